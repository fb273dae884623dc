//! Test Module
//!
//! Aggregated test suite for the advisor core.
//!
//! ## Test Categories
//! - `analyzer_tests`: topic coverage heuristics across both personas
//! - `conversation_tests`: coverage diffing, events and persona switching
//! - `client_tests`: HTTP backend client against a mock server
//! - `integration_tests`: full session flows with a scripted backend
