//! Topic coverage analysis.
//!
//! Scans advisor-authored transcript text and decides which rubric topics
//! have been discussed. Pure string matching against the persona keyword
//! tables: no I/O, no state, deterministic for identical inputs.
//!
//! Coverage is recomputed from the full transcript on every call rather than
//! maintained incrementally; the result is always a subset of the persona's
//! topic vocabulary.

use std::collections::BTreeSet;

use tracing::debug;

use super::keywords::keyword_table;
use super::persona::Persona;
use super::topic::Topic;
use crate::models::{ChatMessage, Role};

/// Distinct trigger phrases required before a topic counts as covered.
const MIN_DISTINCT_MATCHES: usize = 2;

/// Occurrences of a single phrase required for the repeat-mention fallback.
const MIN_REPEAT_MENTIONS: usize = 2;

/// Decides which rubric topics a transcript has covered.
#[derive(Debug, Default)]
pub struct TopicAnalyzer;

impl TopicAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Returns the set of topics judged covered by the transcript under the
    /// given persona.
    ///
    /// Only assistant messages are read: the advisor confirming or probing a
    /// topic is the signal, a founder merely typing the words is not. The
    /// assistant contents are case-folded and joined with a single space
    /// into one blob; a trigger phrase spanning the seam between two
    /// messages is an accepted false positive.
    ///
    /// A topic is covered when at least [`MIN_DISTINCT_MATCHES`] of its
    /// phrases occur in the blob, or when the first matching phrase occurs
    /// at least [`MIN_REPEAT_MENTIONS`] times — a single heavily-repeated
    /// keyword still signals genuine coverage.
    pub fn analyze(&self, messages: &[ChatMessage], persona: Persona) -> BTreeSet<Topic> {
        let mut covered = BTreeSet::new();

        let blob = assistant_blob(messages);
        if blob.is_empty() {
            return covered;
        }

        for (topic, phrases) in keyword_table(persona) {
            let matched: Vec<String> = phrases
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .filter(|phrase| blob.contains(phrase.as_str()))
                .collect();

            let Some(first_match) = matched.first() else {
                continue;
            };

            let repeated = blob.matches(first_match.as_str()).count() >= MIN_REPEAT_MENTIONS;
            if matched.len() >= MIN_DISTINCT_MATCHES || repeated {
                covered.insert(*topic);
            }
        }

        debug!(
            persona = persona.display_name(),
            covered = covered.len(),
            transcript_messages = messages.len(),
            "analyzed topic coverage"
        );

        covered
    }
}

/// Concatenates the assistant messages into one lowercased blob.
fn assistant_blob(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .filter(|message| message.role == Role::Assistant)
        .map(|message| message.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience wrapper over [`TopicAnalyzer::analyze`] for one-off calls.
pub fn analyze_completed_topics(messages: &[ChatMessage], persona: Persona) -> BTreeSet<Topic> {
    TopicAnalyzer::new().analyze(messages, persona)
}
