//! Conversation state and coverage tracking.
//!
//! A `Conversation` owns the message list for one advisor session and keeps
//! the completed-topic set in sync: every append re-runs the topic analyzer
//! over the full transcript and diffs the fresh result against the stored
//! set. Newly covered topics surface as [`TopicEvent`]s for the caller's
//! notification layer; this module never renders anything itself.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::advisor::analyzer::TopicAnalyzer;
use crate::advisor::persona::Persona;
use crate::advisor::rubric::CoverageReport;
use crate::advisor::suggestions::suggested_questions;
use crate::advisor::topic::Topic;
use crate::models::{ChatMessage, Role};

/// Raised when a rubric topic is first judged covered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEvent {
    /// The topic that became covered.
    pub topic: Topic,
    /// Human label for the notification ("Unit Economics has been covered!").
    pub label: String,
    /// When the coverage was detected.
    pub timestamp: DateTime<Utc>,
}

/// Fixed focus shortlist per persona: the first uncovered entry becomes the
/// nudge shown next to the message input.
const PRODUCT_PM_FOCUS: &[(Topic, &str)] = &[
    (Topic::Persona, "user personas"),
    (Topic::Market, "market opportunity"),
    (Topic::Roadmap, "product roadmap"),
    (Topic::Metrics, "success metrics"),
    (Topic::Solution, "competitive landscape"),
];

const SHARK_VC_FOCUS: &[(Topic, &str)] = &[
    (Topic::Team, "your founding team"),
    (Topic::Market, "market size (TAM)"),
    (Topic::Economics, "unit economics"),
    (Topic::Competition, "competitive advantage"),
    (Topic::Funding, "use of funds"),
];

/// One advisor conversation: persona, transcript and coverage progress.
#[derive(Debug)]
pub struct Conversation {
    id: String,
    persona: Persona,
    messages: Vec<ChatMessage>,
    completed: BTreeSet<Topic>,
    created_at: DateTime<Utc>,
    analyzer: TopicAnalyzer,
}

impl Conversation {
    /// Starts an empty conversation under the given persona.
    pub fn new(persona: Persona) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            persona,
            messages: Vec::new(),
            completed: BTreeSet::new(),
            created_at: Utc::now(),
            analyzer: TopicAnalyzer::new(),
        }
    }

    /// The unique identifier of this conversation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The active persona.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// The transcript so far, in order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The topics currently judged covered.
    pub fn completed_topics(&self) -> &BTreeSet<Topic> {
        &self.completed
    }

    /// When the conversation was started.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a founder message and refreshes coverage.
    ///
    /// User text never contributes coverage, but the refresh keeps the
    /// invariant that the stored set always reflects the full transcript.
    pub fn push_user(&mut self, content: impl Into<String>) -> Vec<TopicEvent> {
        self.messages.push(ChatMessage::user(content));
        self.refresh_coverage()
    }

    /// Appends an advisor reply and refreshes coverage, returning events for
    /// any newly covered topics.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> Vec<TopicEvent> {
        self.messages.push(ChatMessage::assistant(content));
        self.refresh_coverage()
    }

    /// Switches the advisor persona.
    ///
    /// Switching away from a non-empty conversation starts over: transcript
    /// and progress are cleared, because coverage measured under one rubric
    /// means nothing under the other. Returns `true` when history was
    /// cleared.
    pub fn switch_persona(&mut self, persona: Persona) -> bool {
        if persona == self.persona {
            return false;
        }

        let reset = !self.messages.is_empty();
        if reset {
            self.messages.clear();
            self.completed.clear();
        }
        info!(
            from = self.persona.display_name(),
            to = persona.display_name(),
            reset,
            "switched persona"
        );
        self.persona = persona;
        reset
    }

    /// Progress against the active persona's rubric.
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::new(self.persona, &self.completed)
    }

    /// The prompt fragment for the first uncovered focus-shortlist entry,
    /// if any remains.
    pub fn next_focus(&self) -> Option<&'static str> {
        let shortlist = match self.persona {
            Persona::ProductManager => PRODUCT_PM_FOCUS,
            Persona::SharkVc => SHARK_VC_FOCUS,
        };
        shortlist
            .iter()
            .find(|(topic, _)| !self.completed.contains(topic))
            .map(|(_, prompt)| *prompt)
    }

    /// Suggested questions for the current coverage state.
    pub fn suggested_questions(&self) -> Vec<String> {
        suggested_questions(self.persona, &self.completed)
    }

    /// Number of assistant replies in the transcript.
    pub fn reply_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count()
    }

    /// Re-analyzes the full transcript and replaces the stored set.
    ///
    /// Events are only raised once some progress already exists; the first
    /// analyzed batch silently seeds the set so a long opening reply does
    /// not fire a notification per topic.
    fn refresh_coverage(&mut self) -> Vec<TopicEvent> {
        let fresh = self.analyzer.analyze(&self.messages, self.persona);
        let announce = !self.completed.is_empty();

        let mut events = Vec::new();
        if announce {
            for topic in fresh.difference(&self.completed) {
                info!(
                    conversation = %self.id,
                    topic = topic.id(),
                    "topic covered"
                );
                events.push(TopicEvent {
                    topic: *topic,
                    label: topic.label().to_string(),
                    timestamp: Utc::now(),
                });
            }
        }

        self.completed = fresh;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_is_empty() {
        let conversation = Conversation::new(Persona::SharkVc);

        assert!(conversation.messages().is_empty());
        assert!(conversation.completed_topics().is_empty());
        assert_eq!(conversation.persona(), Persona::SharkVc);
        assert_eq!(conversation.coverage().percent, 0.0);
    }

    #[test]
    fn test_first_batch_seeds_progress_without_events() {
        let mut conversation = Conversation::new(Persona::SharkVc);

        let events = conversation.push_assistant("Your TAM and market size look thin.");
        assert!(events.is_empty());
        assert!(conversation.completed_topics().contains(&Topic::Market));
    }

    #[test]
    fn test_later_coverage_raises_events() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        conversation.push_assistant("Your TAM and market size look thin.");

        let events =
            conversation.push_assistant("Now traction: show revenue, retention and churn.");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].topic, Topic::Traction);
        assert_eq!(events[0].label, "Traction Metrics");
    }

    #[test]
    fn test_user_messages_raise_no_events() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        conversation.push_assistant("Your TAM and market size look thin.");

        let events = conversation.push_user("My churn churn churn is low, CAC and LTV are fine");

        assert!(events.is_empty());
        assert!(!conversation.completed_topics().contains(&Topic::Traction));
    }

    #[test]
    fn test_switch_persona_resets_non_empty_conversation() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        conversation.push_assistant("Your TAM and market size look thin.");
        assert!(!conversation.completed_topics().is_empty());

        let reset = conversation.switch_persona(Persona::ProductManager);

        assert!(reset);
        assert_eq!(conversation.persona(), Persona::ProductManager);
        assert!(conversation.messages().is_empty());
        assert!(conversation.completed_topics().is_empty());
    }

    #[test]
    fn test_switch_persona_on_empty_conversation_keeps_nothing_to_reset() {
        let mut conversation = Conversation::new(Persona::SharkVc);

        let reset = conversation.switch_persona(Persona::ProductManager);

        assert!(!reset);
        assert_eq!(conversation.persona(), Persona::ProductManager);
    }

    #[test]
    fn test_switch_to_same_persona_is_a_no_op() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        conversation.push_assistant("Your TAM and market size look thin.");

        let reset = conversation.switch_persona(Persona::SharkVc);

        assert!(!reset);
        assert!(!conversation.messages().is_empty());
    }

    #[test]
    fn test_next_focus_walks_the_shortlist() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        assert_eq!(conversation.next_focus(), Some("your founding team"));

        conversation.push_assistant("Strong founder, strong team, real expertise.");
        assert_eq!(conversation.next_focus(), Some("market size (TAM)"));
    }

    #[test]
    fn test_next_focus_exhausts() {
        let mut conversation = Conversation::new(Persona::SharkVc);
        conversation.push_assistant(
            "Founder and team expertise. TAM and market size. CAC, LTV, unit economics. \
             Moat and competitive advantage. Use of funds and budget.",
        );

        assert_eq!(conversation.next_focus(), None);
    }

    #[test]
    fn test_reply_count_ignores_user_messages() {
        let mut conversation = Conversation::new(Persona::ProductManager);
        conversation.push_user("hello");
        conversation.push_assistant("hi");
        conversation.push_user("question");
        conversation.push_assistant("answer");

        assert_eq!(conversation.reply_count(), 2);
    }
}
