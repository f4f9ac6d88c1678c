// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Topic Tree Implementation
//!
//! A hierarchical index keyed by separator-delimited path segments, as used
//! for subscription routing in publish/subscribe brokers. Values are attached
//! to paths and can be retrieved by exact lookup or by one of two wildcard
//! matching modes:
//!
//! * [`TopicTree::match_topic`] - the query is literal and wildcards live in
//!   the stored paths (a published topic finds its subscriptions).
//! * [`TopicTree::search`] - the query may contain wildcards and the stored
//!   paths are literal (a subscription pattern finds retained topics).
//!
//! The tree is always pruned to the minimal shape representing its content:
//! a node survives only while it, or one of its descendants, holds a value.
//!
//! # Example
//!
//! ```
//! use topic_index_lib::data_structures::topic_tree::TopicTree;
//!
//! let mut tree = TopicTree::standard();
//! tree.add("sensors/+/temperature", "dashboard");
//! tree.add("sensors/#", "archiver");
//!
//! let mut matched = tree.match_topic("sensors/kitchen/temperature");
//! matched.sort();
//! assert_eq!(matched, vec![&"archiver", &"dashboard"]);
//!
//! let mut retained = TopicTree::standard();
//! retained.set("sensors/kitchen/temperature", 21);
//! assert_eq!(retained.search("sensors/+/temperature"), vec![&21]);
//! ```
//!
//! # Concurrency
//!
//! `TopicTree` performs no internal synchronization. Wrap it in a
//! [`SharedTopicTree`] to share one tree between threads.

mod config;
mod error;
mod node;
mod segment;
mod shared;

use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use fnv::FnvHashSet;

pub use config::TopicTreeConfig;
pub use error::{Result, TopicTreeError};
pub use segment::split_segment;
pub use shared::SharedTopicTree;
use node::TopicNode;

/// A tree of values keyed by topic paths.
///
/// All values stored in one tree share the separator and wildcard tokens
/// given at construction. Read operations hand out borrows into the tree;
/// results of wildcard operations are deduplicated by equality.
#[derive(Debug)]
pub struct TopicTree<V> {
    /// The root node of the tree
    root: TopicNode<V>,

    /// Separator and wildcard tokens
    config: TopicTreeConfig,
}

impl<V> TopicTree<V> {
    /// Creates a new empty tree with the given separator and wildcard tokens.
    ///
    /// # Arguments
    ///
    /// * `separator` - Delimits path segments.
    /// * `wildcard_one` - Matches exactly one segment.
    /// * `wildcard_some` - Matches zero or more trailing segments.
    ///
    /// # Returns
    ///
    /// * `Ok(TopicTree)` - A new empty tree.
    /// * `Err(TopicTreeError)` - If the tokens are empty, collide, or a
    ///   wildcard contains the separator.
    pub fn new(
        separator: impl Into<String>,
        wildcard_one: impl Into<String>,
        wildcard_some: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            TopicTreeConfig::new()
                .with_separator(separator)
                .with_wildcard_one(wildcard_one)
                .with_wildcard_some(wildcard_some),
        )
    }

    /// Creates a new empty tree with the specified configuration.
    pub fn with_config(config: TopicTreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: TopicNode::new(),
            config,
        })
    }

    /// Creates a new empty tree using `/` as separator, `+` as single-level
    /// and `#` as multi-level wildcard.
    pub fn standard() -> Self {
        Self {
            root: TopicNode::new(),
            config: TopicTreeConfig::new(),
        }
    }

    /// Returns the separator and wildcard tokens of this tree.
    pub fn config(&self) -> &TopicTreeConfig {
        &self.config
    }

    /// Registers `value` as the only value at `topic`, discarding any values
    /// previously stored at exactly that path.
    pub fn set(&mut self, topic: &str, value: V) {
        let syntax = self.config.syntax();
        let node = self.root.descend_or_create(topic, &syntax);
        node.values_mut().clear();
        node.values_mut().push(value);
    }

    /// Returns the values stored at exactly `topic`.
    ///
    /// No wildcard interpretation takes place. The slice is empty if the path
    /// does not exist.
    pub fn get(&self, topic: &str) -> &[V] {
        self.root
            .descend(topic, &self.config.syntax())
            .map(TopicNode::values)
            .unwrap_or_default()
    }

    /// Unregisters every value at `topic` and shrinks the tree.
    ///
    /// # Returns
    ///
    /// The number of values dropped.
    pub fn empty(&mut self, topic: &str) -> usize {
        let syntax = self.config.syntax();
        self.root
            .update(Some(topic), &syntax, |values| values.drain(..).count())
            .unwrap_or(0)
    }

    /// Total number of stored values across all paths.
    ///
    /// Values stored at several paths are counted once per path, so this may
    /// exceed `all().len()`.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    /// Returns `true` if no value is stored anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Every stored path with its values, sorted by path.
    ///
    /// Paths are rebuilt with the configured separator; wildcard registrations
    /// appear with their wildcard token.
    pub fn entries(&self) -> Vec<(String, &[V])> {
        let mut result = Vec::new();
        self.root
            .collect_entries(&self.config.syntax(), 0, &mut String::new(), &mut result);
        result.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        result
    }

    /// Removes everything from the tree.
    pub fn reset(&mut self) {
        self.root = TopicNode::new();
    }
}

impl<V: Eq> TopicTree<V> {
    /// Registers `value` at `topic`, growing the tree as needed.
    ///
    /// # Returns
    ///
    /// `true` if the value was added, `false` if an equal value was already
    /// registered at exactly this path.
    pub fn add(&mut self, topic: &str, value: V) -> bool {
        let syntax = self.config.syntax();
        let values = self.root.descend_or_create(topic, &syntax).values_mut();
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Unregisters one occurrence of `value` from `topic` and shrinks the tree.
    ///
    /// # Returns
    ///
    /// `true` if the value was found and removed.
    pub fn remove(&mut self, topic: &str, value: &V) -> bool {
        let syntax = self.config.syntax();
        self.root
            .update(Some(topic), &syntax, |values| {
                TopicNode::remove_value(values, value)
            })
            .unwrap_or(false)
    }

    /// Unregisters `value` from every path in the tree and shrinks the tree.
    ///
    /// # Returns
    ///
    /// The number of paths the value was removed from.
    pub fn clear(&mut self, value: &V) -> usize {
        self.root.clear_value(value)
    }
}

impl<V: Eq + Hash> TopicTree<V> {
    /// Returns the values whose stored paths match `topic`.
    ///
    /// `topic` is taken literally; wildcard tokens are honoured only in the
    /// stored paths. Duplicates are removed.
    pub fn match_topic(&self, topic: &str) -> Vec<&V> {
        let mut harvested = Vec::new();
        let _ = self
            .root
            .match_topic(Some(topic), &self.config.syntax(), &mut |values| {
                harvested.extend(values);
                ControlFlow::Continue(())
            });
        dedup(harvested)
    }

    /// Behaves like [`match_topic`](Self::match_topic) but returns only the
    /// first value found.
    pub fn match_first(&self, topic: &str) -> Option<&V> {
        let mut first = None;
        let _ = self
            .root
            .match_topic(Some(topic), &self.config.syntax(), &mut |values| {
                first = values.first();
                ControlFlow::Break(())
            });
        first
    }

    /// Returns the values whose stored paths are matched by the pattern
    /// `topic`.
    ///
    /// Wildcard tokens are honoured only in `topic`; stored paths are taken
    /// literally. Duplicates are removed.
    pub fn search(&self, topic: &str) -> Vec<&V> {
        let mut harvested = Vec::new();
        let _ = self
            .root
            .search(Some(topic), &self.config.syntax(), &mut |values| {
                harvested.extend(values);
                ControlFlow::Continue(())
            });
        dedup(harvested)
    }

    /// Behaves like [`search`](Self::search) but returns only the first value
    /// found.
    pub fn search_first(&self, topic: &str) -> Option<&V> {
        let mut first = None;
        let _ = self
            .root
            .search(Some(topic), &self.config.syntax(), &mut |values| {
                first = values.first();
                ControlFlow::Break(())
            });
        first
    }

    /// Returns every stored value once.
    pub fn all(&self) -> Vec<&V> {
        let mut harvested = Vec::new();
        self.root.collect_all(&mut harvested);
        dedup(harvested)
    }
}

impl<V> Default for TopicTree<V> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<V> fmt::Display for TopicTree<V> {
    /// Renders the tree shape; the number after each segment is the count of
    /// values stored at that node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TopicTree:")?;
        self.root.render(&self.config.syntax(), 0, f)
    }
}

/// Drops repeated values, keeping the first occurrence of each.
fn dedup<V: Eq + Hash>(values: Vec<&V>) -> Vec<&V> {
    let mut seen = FnvHashSet::default();
    values.into_iter().filter(|value| seen.insert(*value)).collect()
}
