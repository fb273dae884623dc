use serde::{Deserialize, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the founder.
    User,
    /// A reply produced by the advisor backend.
    Assistant,
}

impl Role {
    /// Returns the wire-level name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Represents a single message within an advisor conversation.
///
/// Messages form an ordered, append-only sequence; the topic analyzer only
/// ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Creates a founder-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an advisor-authored message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("What is my TAM?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "What is my TAM?");

        let msg = ChatMessage::assistant("Let's look at your market.");
        assert_eq!(msg.role, Role::Assistant);
    }
}
