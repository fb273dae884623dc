//! Persona rubrics and coverage reporting.
//!
//! The rubric is the fixed, ordered checklist shown to the user as a
//! progress indicator. Labels are per-persona: the same topic identifier can
//! read differently depending on who is advising ("Market Size (TAM)" for
//! the investor, "Market Clarity" for the product advisor).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::persona::Persona;
use super::topic::Topic;

/// One checklist entry of a persona rubric.
#[derive(Debug, Clone, Copy)]
pub struct RubricItem {
    /// The topic tracked by this entry.
    pub topic: Topic,
    /// The display label for this entry.
    pub label: &'static str,
}

const SHARK_VC_RUBRIC: &[RubricItem] = &[
    RubricItem { topic: Topic::Team, label: "Team & Founders" },
    RubricItem { topic: Topic::Market, label: "Market Size (TAM)" },
    RubricItem { topic: Topic::Problem, label: "Problem/Solution Fit" },
    RubricItem { topic: Topic::Traction, label: "Traction & Metrics" },
    RubricItem { topic: Topic::Economics, label: "Unit Economics" },
    RubricItem { topic: Topic::Competition, label: "Competitive Advantage" },
    RubricItem { topic: Topic::Model, label: "Business Model" },
    RubricItem { topic: Topic::Funding, label: "Use of Funds" },
    RubricItem { topic: Topic::Exit, label: "Exit Strategy" },
    RubricItem { topic: Topic::Risks, label: "Risks & Mitigation" },
];

const PRODUCT_PM_RUBRIC: &[RubricItem] = &[
    RubricItem { topic: Topic::Market, label: "Market Clarity" },
    RubricItem { topic: Topic::Persona, label: "User Persona & JTBD" },
    RubricItem { topic: Topic::Problem, label: "Problem Statement" },
    RubricItem { topic: Topic::Solution, label: "Solution Uniqueness" },
    RubricItem { topic: Topic::Roadmap, label: "Roadmap & Prioritization" },
    RubricItem { topic: Topic::Metrics, label: "Success Metrics" },
    RubricItem { topic: Topic::Mvp, label: "MVP → MLP Journey" },
    RubricItem { topic: Topic::Narrative, label: "Product Narrative" },
    RubricItem { topic: Topic::Experiments, label: "Learning Velocity" },
];

/// Returns the checklist for a persona, in display order.
pub fn rubric(persona: Persona) -> &'static [RubricItem] {
    match persona {
        Persona::ProductManager => PRODUCT_PM_RUBRIC,
        Persona::SharkVc => SHARK_VC_RUBRIC,
    }
}

/// Completion state of one rubric entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageItem {
    /// The topic tracked by this entry.
    pub topic: Topic,
    /// The display label for this entry.
    pub label: String,
    /// Whether the conversation has covered the topic.
    pub completed: bool,
}

/// Progress of a conversation against its persona rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// The persona whose rubric this report is measured against.
    pub persona: Persona,
    /// Checklist entries in rubric order.
    pub items: Vec<CoverageItem>,
    /// Number of completed entries.
    pub completed_count: usize,
    /// Total number of entries.
    pub total_count: usize,
    /// Completion percentage (0.0 - 100.0).
    pub percent: f32,
}

impl CoverageReport {
    /// Builds a report for a persona from the set of completed topics.
    pub fn new(persona: Persona, completed: &BTreeSet<Topic>) -> Self {
        let items: Vec<CoverageItem> = rubric(persona)
            .iter()
            .map(|item| CoverageItem {
                topic: item.topic,
                label: item.label.to_string(),
                completed: completed.contains(&item.topic),
            })
            .collect();

        let completed_count = items.iter().filter(|item| item.completed).count();
        let total_count = items.len();
        let percent = completed_count as f32 * 100.0 / total_count as f32;

        Self {
            persona,
            items,
            completed_count,
            total_count,
            percent,
        }
    }

    /// Whether every rubric entry is complete.
    pub fn is_complete(&self) -> bool {
        self.completed_count == self.total_count
    }
}
