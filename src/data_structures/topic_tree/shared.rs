// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`TopicTree`].
//!
//! The tree itself is unsynchronized. `SharedTopicTree` puts it behind a
//! read-write lock: lookups, matches and searches run concurrently, every
//! mutation is exclusive. Results are cloned out so no guard escapes.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::Result;
use super::{TopicTree, TopicTreeConfig};

/// A cloneable, lock-protected topic tree.
#[derive(Debug)]
pub struct SharedTopicTree<V> {
    inner: Arc<RwLock<TopicTree<V>>>,
}

impl<V> Clone for SharedTopicTree<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> From<TopicTree<V>> for SharedTopicTree<V> {
    fn from(tree: TopicTree<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}

impl<V> SharedTopicTree<V> {
    /// Creates a shared tree using the standard `/`, `+`, `#` tokens.
    pub fn standard() -> Self {
        TopicTree::standard().into()
    }

    /// Creates a shared tree with the specified configuration.
    pub fn with_config(config: TopicTreeConfig) -> Result<Self> {
        TopicTree::with_config(config).map(Self::from)
    }

    /// Replaces the values at `topic` with `value`.
    pub fn set(&self, topic: &str, value: V) {
        tracing::trace!(topic, "set");
        self.inner.write().set(topic, value);
    }

    /// Drops all values at `topic`.
    pub fn empty(&self, topic: &str) -> usize {
        let dropped = self.inner.write().empty(topic);
        tracing::trace!(topic, dropped, "empty");
        dropped
    }

    /// Removes everything from the tree.
    pub fn reset(&self) {
        tracing::debug!("reset");
        self.inner.write().reset();
    }

    /// Total number of stored values, duplicates included.
    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the underlying tree.
    pub fn read<R>(&self, f: impl FnOnce(&TopicTree<V>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<V: Eq> SharedTopicTree<V> {
    /// Registers `value` at `topic`.
    pub fn add(&self, topic: &str, value: V) -> bool {
        let added = self.inner.write().add(topic, value);
        tracing::trace!(topic, added, "add");
        added
    }

    /// Unregisters one occurrence of `value` from `topic`.
    pub fn remove(&self, topic: &str, value: &V) -> bool {
        let removed = self.inner.write().remove(topic, value);
        tracing::trace!(topic, removed, "remove");
        removed
    }

    /// Unregisters `value` from every path.
    pub fn clear(&self, value: &V) -> usize {
        let removed = self.inner.write().clear(value);
        tracing::trace!(removed, "clear");
        removed
    }
}

impl<V: Clone> SharedTopicTree<V> {
    /// Returns the values stored at exactly `topic`.
    pub fn get(&self, topic: &str) -> Vec<V> {
        self.inner.read().get(topic).to_vec()
    }
}

impl<V: Eq + Hash + Clone> SharedTopicTree<V> {
    /// See [`TopicTree::match_topic`].
    pub fn match_topic(&self, topic: &str) -> Vec<V> {
        self.inner.read().match_topic(topic).into_iter().cloned().collect()
    }

    /// See [`TopicTree::match_first`].
    pub fn match_first(&self, topic: &str) -> Option<V> {
        self.inner.read().match_first(topic).cloned()
    }

    /// See [`TopicTree::search`].
    pub fn search(&self, topic: &str) -> Vec<V> {
        self.inner.read().search(topic).into_iter().cloned().collect()
    }

    /// See [`TopicTree::search_first`].
    pub fn search_first(&self, topic: &str) -> Option<V> {
        self.inner.read().search_first(topic).cloned()
    }

    /// See [`TopicTree::all`].
    pub fn all(&self) -> Vec<V> {
        self.inner.read().all().into_iter().cloned().collect()
    }
}

impl<V> Default for SharedTopicTree<V> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<V> fmt::Display for SharedTopicTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), f)
    }
}
