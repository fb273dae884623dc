//! Environment-driven configuration.
//!
//! The composition root loads everything from `ADVISOR_*` variables (with
//! `.env` support in the binary). Malformed values are configuration
//! errors; only the persona falls back, and that fallback is the documented
//! lenient parse.

use std::env;
use std::time::Duration;

use url::Url;
use validator::Validate;

use crate::advisor::persona::Persona;
use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_FOUNDER_ID: &str = "anonymous";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for an advisor session.
#[derive(Debug, Clone, Validate)]
pub struct AdvisorConfig {
    /// Base URL of the advisor backend.
    #[validate(length(min = 1))]
    pub api_url: String,
    /// Founder identity forwarded to the backend.
    #[validate(length(min = 1))]
    pub founder_id: String,
    /// Persona the session starts under.
    pub persona: Persona,
    /// Per-request timeout for backend calls, in seconds.
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            founder_id: DEFAULT_FOUNDER_ID.to_string(),
            persona: Persona::ProductManager,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AdvisorConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = env::var("ADVISOR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        // Fail fast on URLs the backend client would reject later anyway.
        Url::parse(&api_url)?;

        let founder_id =
            env::var("ADVISOR_FOUNDER_ID").unwrap_or_else(|_| DEFAULT_FOUNDER_ID.to_string());

        let persona = match env::var("ADVISOR_PERSONA") {
            Ok(name) => Persona::from_name_lenient(&name),
            Err(_) => Persona::ProductManager,
        };

        let request_timeout_secs = match env::var("ADVISOR_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|err| {
                AppError::Config(format!("invalid ADVISOR_REQUEST_TIMEOUT_SECS: {}", err))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            api_url,
            founder_id,
            persona,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// The backend request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "ADVISOR_API_URL",
        "ADVISOR_FOUNDER_ID",
        "ADVISOR_PERSONA",
        "ADVISOR_REQUEST_TIMEOUT_SECS",
    ];

    #[test]
    fn test_defaults_when_nothing_is_set() {
        temp_env::with_vars_unset(VARS, || {
            let config = AdvisorConfig::from_env().unwrap();
            assert_eq!(config.api_url, DEFAULT_API_URL);
            assert_eq!(config.founder_id, DEFAULT_FOUNDER_ID);
            assert_eq!(config.persona, Persona::ProductManager);
            assert_eq!(config.request_timeout(), Duration::from_secs(30));
        });
    }

    #[test]
    fn test_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("ADVISOR_API_URL", Some("https://advisor.example.com/api/")),
                ("ADVISOR_FOUNDER_ID", Some("founder@example.com")),
                ("ADVISOR_PERSONA", Some("Shark VC")),
                ("ADVISOR_REQUEST_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = AdvisorConfig::from_env().unwrap();
                assert_eq!(config.api_url, "https://advisor.example.com/api/");
                assert_eq!(config.founder_id, "founder@example.com");
                assert_eq!(config.persona, Persona::SharkVc);
                assert_eq!(config.request_timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_unknown_persona_uses_the_lenient_fallback() {
        temp_env::with_vars([("ADVISOR_PERSONA", Some("Growth Guru"))], || {
            let config = AdvisorConfig::from_env().unwrap();
            assert_eq!(config.persona, Persona::SharkVc);
        });
    }

    #[test]
    fn test_malformed_url_is_a_config_error() {
        temp_env::with_vars([("ADVISOR_API_URL", Some("not a url"))], || {
            let err = AdvisorConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        });
    }

    #[test]
    fn test_malformed_timeout_is_a_config_error() {
        temp_env::with_vars([("ADVISOR_REQUEST_TIMEOUT_SECS", Some("soon"))], || {
            let err = AdvisorConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }

    #[test]
    fn test_out_of_range_timeout_fails_validation() {
        temp_env::with_vars([("ADVISOR_REQUEST_TIMEOUT_SECS", Some("0"))], || {
            let err = AdvisorConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        });
    }
}
