//! Data structures for the topic index.
//!
//! This module contains the hierarchical topic tree and its thread-safe
//! wrapper. Implementations contain no unsafe code.

pub mod topic_tree;

// Re-export common data structures
pub use topic_tree::{SharedTopicTree, TopicTree, TopicTreeConfig, TopicTreeError};
