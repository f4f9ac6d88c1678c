//! Test modules for the topic index.
//!
//! This module contains crate-internal test suites:
//! - Table-driven match and search cases
//! - Property-based tests using proptest
//! - Configuration loading and error reporting tests
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, pattern_strategy, registrations_strategy, topic_strategy, tree_from,
    TestFixture,
};
