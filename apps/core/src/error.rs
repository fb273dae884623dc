use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The topic analyzer itself has no error path; everything here belongs to the
/// boundaries around it (configuration, persona parsing, the backend client).
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents transport-level failures when calling the advisor backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a persona name that does not resolve to a known advisor.
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Represents a response from the advisor backend that is not usable
    /// (non-success status, unexpected payload shape).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Validation(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
