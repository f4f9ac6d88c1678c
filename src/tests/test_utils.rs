//! Test utilities and fixtures for the topic index.
//!
//! This module provides proptest strategies for topics and patterns, plus a
//! fixture for tests that need temporary files or environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::data_structures::topic_tree::TopicTree;

/// Maximum number of segments in a generated topic.
const MAX_DEPTH: usize = 5;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a literal segment for the standard syntax.
///
/// The alphabet is kept small so that generated topics share prefixes.
pub fn segment_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        4 => "[a-d]{1,2}",
        1 => Just(String::new()),
    ]
    .boxed()
}

/// Generate a literal topic (no wildcard tokens) for the standard syntax.
pub fn topic_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(segment_strategy(), 1..=MAX_DEPTH)
        .prop_map(|segments| segments.join("/"))
        .boxed()
}

/// Generate a topic whose segments may be `+` or `#` wildcards.
pub fn pattern_strategy() -> BoxedStrategy<String> {
    let segment = prop_oneof![
        6 => segment_strategy(),
        2 => Just("+".to_string()),
        1 => Just("#".to_string()),
    ];
    proptest::collection::vec(segment, 1..=MAX_DEPTH)
        .prop_map(|segments| segments.join("/"))
        .boxed()
}

/// Generate `(topic, value)` registrations with small values so that the
/// same value often lands at several topics.
pub fn registrations_strategy() -> BoxedStrategy<Vec<(String, u8)>> {
    proptest::collection::vec((pattern_strategy(), 0u8..8), 0..20).boxed()
}

/// Build a standard tree from registrations.
pub fn tree_from(registrations: &[(String, u8)]) -> TopicTree<u8> {
    let mut tree = TopicTree::standard();
    for (topic, value) in registrations {
        tree.add(topic, *value);
    }
    tree
}

/// Test fixture for tests requiring temporary files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write a file named `name` into the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
