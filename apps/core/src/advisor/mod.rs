//! # Advisor Module
//!
//! Persona-aware, non-LLM analysis of advisor conversations. Everything here
//! is pure, synchronous and CPU-only: it reads a transcript snapshot and
//! returns fresh values.
//!
//! ## Components
//! - `persona`: the closed set of advisor roles
//! - `topic`: rubric topic identifiers and labels
//! - `keywords`: static per-persona trigger-phrase tables
//! - `analyzer`: topic coverage heuristic over assistant text
//! - `rubric`: per-persona checklists and coverage reports
//! - `suggestions`: gap-driven suggested questions

pub mod analyzer;
pub mod keywords;
pub mod persona;
pub mod rubric;
pub mod suggestions;
pub mod topic;

pub use analyzer::{analyze_completed_topics, TopicAnalyzer};
pub use keywords::{keyword_table, vocabulary};
pub use persona::Persona;
pub use rubric::{rubric, CoverageItem, CoverageReport, RubricItem};
pub use suggestions::suggested_questions;
pub use topic::Topic;
