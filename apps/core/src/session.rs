//! Session orchestration.
//!
//! Ties a [`Conversation`] to an [`AdvisorBackend`]: one `send` call is one
//! round trip — append the founder message, fetch the advisor reply, append
//! it, and report whatever coverage events the reply produced.

use std::sync::Arc;

use tracing::{error, info};

use crate::advisor::persona::Persona;
use crate::client::{AdvisorBackend, ChatRequest};
use crate::conversation::{Conversation, TopicEvent};
use crate::error::AppError;

/// One founder⟷advisor exchange and the coverage events it produced.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The advisor's reply text.
    pub reply: String,
    /// Topics newly covered by this reply.
    pub events: Vec<TopicEvent>,
}

/// A live advisor session for one founder.
pub struct AdvisorSession {
    founder_id: String,
    conversation: Conversation,
    backend: Arc<dyn AdvisorBackend>,
}

impl AdvisorSession {
    /// Opens a session under the given persona.
    pub fn new(
        founder_id: impl Into<String>,
        persona: Persona,
        backend: Arc<dyn AdvisorBackend>,
    ) -> Self {
        Self {
            founder_id: founder_id.into(),
            conversation: Conversation::new(persona),
            backend,
        }
    }

    /// The conversation state behind this session.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Switches persona; see [`Conversation::switch_persona`] for the reset
    /// semantics. Returns `true` when history was cleared.
    pub fn switch_persona(&mut self, persona: Persona) -> bool {
        self.conversation.switch_persona(persona)
    }

    /// Sends a founder message and folds the advisor reply into the
    /// conversation.
    ///
    /// On backend failure the founder message stays in the transcript; the
    /// caller may surface the error and let the founder retry.
    pub async fn send(&mut self, message: &str) -> Result<Exchange, AppError> {
        self.conversation.push_user(message);

        let request = ChatRequest {
            founder_id: self.founder_id.clone(),
            message: message.to_string(),
            agent_type: self.conversation.persona(),
        };

        let reply = self.backend.reply(request).await.map_err(|err| {
            error!(error = %err, "advisor backend call failed");
            err
        })?;

        let events = self.conversation.push_assistant(reply.reply.as_str());
        info!(
            conversation = self.conversation.id(),
            new_topics = events.len(),
            "exchange complete"
        );

        Ok(Exchange {
            reply: reply.reply,
            events,
        })
    }
}
