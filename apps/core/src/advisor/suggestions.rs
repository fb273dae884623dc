//! Suggested questions.
//!
//! Each persona ships a fixed bank of starter questions. When coverage gaps
//! remain on specific rubric topics, a question targeting the gap is
//! prepended so the most useful prompt is always on top.

use std::collections::BTreeSet;

use super::persona::Persona;
use super::topic::Topic;

/// Maximum number of questions surfaced at once.
const MAX_SUGGESTIONS: usize = 6;

const PRODUCT_PM_QUESTIONS: &[&str] = &[
    "What job is the user hiring my product to do? (Jobs-to-be-Done)",
    "Who exactly is my ideal customer? Get granular.",
    "How do people solve this problem today? What's broken?",
    "What's the smallest version that proves people want this?",
    "How will I know if people actually need this product?",
    "What's my wedge into the market? First 100 users strategy?",
];

const SHARK_VC_QUESTIONS: &[&str] = &[
    "How big is this market? Show me TAM/SAM numbers.",
    "Is this a painkiller or vitamin? How urgent is the problem?",
    "Why now? What's changed that makes this possible today?",
    "What's your unfair advantage? Network effects? Data moat?",
    "How will you get your first 100 customers without spending money?",
    "What's the biggest risk to this business? How do you mitigate it?",
];

/// Gap-targeted follow-ups, prepended while their topic is uncovered.
const PRODUCT_PM_GAP_QUESTIONS: &[(Topic, &str)] = &[
    (
        Topic::Persona,
        "Show me user interview insights - who did you talk to?",
    ),
    (
        Topic::Metrics,
        "What are your key product metrics? Retention? Engagement?",
    ),
    (
        Topic::Solution,
        "Who are your competitors and what makes you different?",
    ),
];

const SHARK_VC_GAP_QUESTIONS: &[(Topic, &str)] = &[
    (
        Topic::Traction,
        "Show me your traction - revenue, users, growth metrics",
    ),
    (
        Topic::Market,
        "Prove the market size - is this a billion-dollar opportunity?",
    ),
    (
        Topic::Team,
        "Why is your team uniquely qualified to solve this problem?",
    ),
];

fn question_bank(persona: Persona) -> &'static [&'static str] {
    match persona {
        Persona::ProductManager => PRODUCT_PM_QUESTIONS,
        Persona::SharkVc => SHARK_VC_QUESTIONS,
    }
}

fn gap_questions(persona: Persona) -> &'static [(Topic, &'static str)] {
    match persona {
        Persona::ProductManager => PRODUCT_PM_GAP_QUESTIONS,
        Persona::SharkVc => SHARK_VC_GAP_QUESTIONS,
    }
}

/// Returns up to [`MAX_SUGGESTIONS`] questions for the persona, gap-targeted
/// follow-ups first.
///
/// Pure function of `(persona, completed)`; the caller decides when to show
/// the list.
pub fn suggested_questions(persona: Persona, completed: &BTreeSet<Topic>) -> Vec<String> {
    let mut questions: Vec<String> = question_bank(persona)
        .iter()
        .map(|q| (*q).to_string())
        .collect();

    for (topic, question) in gap_questions(persona) {
        if !completed.contains(topic) {
            questions.insert(0, (*question).to_string());
        }
    }

    questions.truncate(MAX_SUGGESTIONS);
    questions
}
