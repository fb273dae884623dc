//! Rubric topics.
//!
//! A topic is one dimension of the advisor's checklist. The enum covers the
//! union of both persona vocabularies; which topics apply to a conversation
//! is decided by the persona's keyword table and rubric, never here. The
//! `market` and `problem` identifiers exist in both vocabularies but are
//! evaluated against different keyword lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rubric dimension whose coverage is tracked during a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    // Investor vocabulary
    Team,
    Market,
    Problem,
    Traction,
    Economics,
    Competition,
    Model,
    Funding,
    Exit,
    Risks,
    // Product vocabulary (market and problem are shared identifiers)
    Persona,
    Solution,
    Roadmap,
    Metrics,
    Mvp,
    Narrative,
    Experiments,
}

impl Topic {
    /// Returns the stable identifier used in payloads and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Topic::Team => "team",
            Topic::Market => "market",
            Topic::Problem => "problem",
            Topic::Traction => "traction",
            Topic::Economics => "economics",
            Topic::Competition => "competition",
            Topic::Model => "model",
            Topic::Funding => "funding",
            Topic::Exit => "exit",
            Topic::Risks => "risks",
            Topic::Persona => "persona",
            Topic::Solution => "solution",
            Topic::Roadmap => "roadmap",
            Topic::Metrics => "metrics",
            Topic::Mvp => "mvp",
            Topic::Narrative => "narrative",
            Topic::Experiments => "experiments",
        }
    }

    /// Returns the human label used when announcing a covered topic.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Team => "Team & Founders",
            Topic::Market => "Market Analysis",
            Topic::Problem => "Problem/Solution Fit",
            Topic::Traction => "Traction Metrics",
            Topic::Economics => "Unit Economics",
            Topic::Competition => "Competitive Analysis",
            Topic::Model => "Business Model",
            Topic::Funding => "Use of Funds",
            Topic::Exit => "Exit Strategy",
            Topic::Risks => "Risk Assessment",
            Topic::Persona => "User Persona",
            Topic::Solution => "Solution Design",
            Topic::Roadmap => "Product Roadmap",
            Topic::Metrics => "Success Metrics",
            Topic::Mvp => "MVP Strategy",
            Topic::Narrative => "Product Story",
            Topic::Experiments => "Learning Velocity",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
