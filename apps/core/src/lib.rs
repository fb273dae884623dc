//! # Founders Advisor Core
//!
//! Conversational core of the startup-advisor product: founders chat with a
//! backend-hosted advisor under a selected persona, and the crate keeps
//! track of which rubric topics the conversation has covered.
//!
//! ## Components
//! - `advisor`: personas, keyword tables, the topic-coverage analyzer,
//!   rubrics and suggested questions (pure, synchronous)
//! - `conversation`: conversation state, coverage diffing, topic events
//! - `client`: trait seam and HTTP client for the external reply backend
//! - `session`: one founder's conversation wired to a backend
//! - `config` / `telemetry` / `error`: the ambient plumbing around it all
//!
//! Reply generation, authentication, persistence and rendering live outside
//! this crate.

pub mod advisor;
pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use advisor::analyzer::{analyze_completed_topics, TopicAnalyzer};
pub use advisor::persona::Persona;
pub use advisor::rubric::CoverageReport;
pub use advisor::topic::Topic;
pub use conversation::{Conversation, TopicEvent};
pub use error::AppError;
pub use models::{ChatMessage, Role};
