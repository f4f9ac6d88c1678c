// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the topic tree.
//!
//! Each node owns its children and the values attached exactly at its path.
//! Literal children are keyed by segment text; the two wildcard children live
//! in dedicated slots so a wildcard registration can never be confused with a
//! literal segment.

use std::fmt::{self, Write};
use std::ops::ControlFlow;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::segment::{Segment, TopicSyntax};

/// A node in the topic tree.
#[derive(Debug)]
pub(crate) struct TopicNode<V> {
    /// Children reached through a literal segment
    literal_children: HashMap<String, TopicNode<V>, FnvBuildHasher>,

    /// Child reached through the single-level wildcard
    wildcard_one: Option<Box<TopicNode<V>>>,

    /// Child reached through the multi-level wildcard
    wildcard_some: Option<Box<TopicNode<V>>>,

    /// Values registered at exactly this path
    values: Vec<V>,
}

impl<V> TopicNode<V> {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self {
            literal_children: HashMap::default(),
            wildcard_one: None,
            wildcard_some: None,
            values: Vec::new(),
        }
    }

    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<V> {
        &mut self.values
    }

    /// A node is empty when it holds no values and has no children.
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
            && self.literal_children.is_empty()
            && self.wildcard_one.is_none()
            && self.wildcard_some.is_none()
    }

    fn child(&self, segment: Segment<'_>) -> Option<&Self> {
        match segment {
            Segment::Literal(literal) => self.literal_children.get(literal),
            Segment::WildcardOne => self.wildcard_one.as_deref(),
            Segment::WildcardSome => self.wildcard_some.as_deref(),
        }
    }

    fn child_mut(&mut self, segment: Segment<'_>) -> Option<&mut Self> {
        match segment {
            Segment::Literal(literal) => self.literal_children.get_mut(literal),
            Segment::WildcardOne => self.wildcard_one.as_deref_mut(),
            Segment::WildcardSome => self.wildcard_some.as_deref_mut(),
        }
    }

    fn child_or_insert(&mut self, segment: Segment<'_>) -> &mut Self {
        match segment {
            Segment::Literal(literal) => self
                .literal_children
                .entry_ref(literal)
                .or_insert_with(TopicNode::new),
            Segment::WildcardOne => self
                .wildcard_one
                .get_or_insert_with(|| Box::new(TopicNode::new())),
            Segment::WildcardSome => self
                .wildcard_some
                .get_or_insert_with(|| Box::new(TopicNode::new())),
        }
    }

    /// Drops the child behind `segment` if it has become empty.
    fn prune(&mut self, segment: Segment<'_>) {
        match segment {
            Segment::Literal(literal) => {
                if self
                    .literal_children
                    .get(literal)
                    .is_some_and(TopicNode::is_empty)
                {
                    self.literal_children.remove(literal);
                }
            }
            Segment::WildcardOne => {
                self.wildcard_one.take_if(|child| child.is_empty());
            }
            Segment::WildcardSome => {
                self.wildcard_some.take_if(|child| child.is_empty());
            }
        }
    }

    /// Iterates over every child regardless of how it is keyed.
    fn children(&self) -> impl Iterator<Item = &Self> + '_ {
        self.literal_children
            .values()
            .chain(self.wildcard_one.as_deref())
            .chain(self.wildcard_some.as_deref())
    }

    /// Iterates over every child with its textual segment.
    fn labelled_children<'a>(
        &'a self,
        syntax: &TopicSyntax<'a>,
    ) -> impl Iterator<Item = (&'a str, &'a Self)> + 'a {
        let wildcard_one = syntax.wildcard_one;
        let wildcard_some = syntax.wildcard_some;
        self.literal_children
            .iter()
            .map(|(segment, child)| (segment.as_str(), child))
            .chain(self.wildcard_one.as_deref().map(move |child| (wildcard_one, child)))
            .chain(self.wildcard_some.as_deref().map(move |child| (wildcard_some, child)))
    }

    /// Walks `path` from this node, creating missing children on the way.
    pub(crate) fn descend_or_create(
        &mut self,
        path: &str,
        syntax: &TopicSyntax<'_>,
    ) -> &mut Self {
        let mut node = self;
        let mut topic = Some(path);
        while let Some(current) = topic {
            let (segment, rest) = syntax.split(current);
            node = node.child_or_insert(segment);
            topic = rest;
        }
        node
    }

    /// Walks `path` from this node, matching segments literally.
    pub(crate) fn descend(&self, path: &str, syntax: &TopicSyntax<'_>) -> Option<&Self> {
        let mut node = self;
        let mut topic = Some(path);
        while let Some(current) = topic {
            let (segment, rest) = syntax.split(current);
            node = node.child(segment)?;
            topic = rest;
        }
        Some(node)
    }

    /// Applies `f` to the values at `topic` and prunes emptied nodes on the
    /// way back up.
    ///
    /// Returns `None` without touching the tree if the path does not exist.
    pub(crate) fn update<R, F>(
        &mut self,
        topic: Option<&str>,
        syntax: &TopicSyntax<'_>,
        f: F,
    ) -> Option<R>
    where
        F: FnOnce(&mut Vec<V>) -> R,
    {
        let Some(topic) = topic else {
            return Some(f(&mut self.values));
        };

        let (segment, rest) = syntax.split(topic);
        let outcome = self.child_mut(segment)?.update(rest, syntax, f);
        self.prune(segment);
        outcome
    }

    /// Total number of values in this subtree, duplicates included.
    pub(crate) fn count(&self) -> usize {
        self.values.len() + self.children().map(TopicNode::count).sum::<usize>()
    }

    /// Collects every value in this subtree.
    pub(crate) fn collect_all<'a>(&'a self, result: &mut Vec<&'a V>) {
        for child in self.children() {
            child.collect_all(result);
        }
        result.extend(&self.values);
    }

    /// Collects `(path, values)` for every node in this subtree holding values.
    pub(crate) fn collect_entries<'a>(
        &'a self,
        syntax: &TopicSyntax<'a>,
        depth: usize,
        prefix: &mut String,
        result: &mut Vec<(String, &'a [V])>,
    ) {
        for (segment, child) in self.labelled_children(syntax) {
            let restore = prefix.len();
            if depth > 0 {
                prefix.push_str(syntax.separator);
            }
            prefix.push_str(segment);

            if !child.values.is_empty() {
                result.push((prefix.clone(), &child.values));
            }
            child.collect_entries(syntax, depth + 1, prefix, result);
            prefix.truncate(restore);
        }
    }

    fn harvest_own<'a, F>(&'a self, harvest: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&'a [V]) -> ControlFlow<()>,
    {
        if self.values.is_empty() {
            ControlFlow::Continue(())
        } else {
            harvest(&self.values)
        }
    }

    /// Match traversal: wildcards live in the tree, `topic` is literal.
    pub(crate) fn match_topic<'a, F>(
        &'a self,
        topic: Option<&str>,
        syntax: &TopicSyntax<'_>,
        harvest: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&'a [V]) -> ControlFlow<()>,
    {
        // a multi-level registration here absorbs whatever remains of the topic
        if let Some(child) = self.wildcard_some.as_deref() {
            child.harvest_own(harvest)?;
        }

        let Some(topic) = topic else {
            return self.harvest_own(harvest);
        };

        let (segment, rest) = syntax.split(topic);

        if let Some(child) = self.wildcard_one.as_deref() {
            child.match_topic(rest, syntax, harvest)?;
        }

        // a query segment spelled like a wildcard never reaches a literal child
        if let Segment::Literal(literal) = segment {
            if let Some(child) = self.literal_children.get(literal) {
                child.match_topic(rest, syntax, harvest)?;
            }
        }

        ControlFlow::Continue(())
    }

    /// Search traversal: wildcards live in `topic`, the tree is literal.
    pub(crate) fn search<'a, F>(
        &'a self,
        topic: Option<&str>,
        syntax: &TopicSyntax<'_>,
        harvest: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&'a [V]) -> ControlFlow<()>,
    {
        let Some(topic) = topic else {
            return self.harvest_own(harvest);
        };

        let (segment, rest) = syntax.split(topic);

        match segment {
            Segment::WildcardSome => {
                self.harvest_own(harvest)?;
                for child in self.children() {
                    child.search(Some(topic), syntax, harvest)?;
                }
            }
            Segment::WildcardOne => {
                self.harvest_own(harvest)?;
                for child in self.children() {
                    child.search(rest, syntax, harvest)?;
                }
            }
            Segment::Literal(literal) => {
                if let Some(child) = self.literal_children.get(literal) {
                    child.search(rest, syntax, harvest)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Renders this subtree, children sorted by segment.
    pub(crate) fn render(
        &self,
        syntax: &TopicSyntax<'_>,
        level: usize,
        out: &mut impl Write,
    ) -> fmt::Result {
        let mut children: Vec<_> = self.labelled_children(syntax).collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (segment, child) in children {
            write!(
                out,
                "\n| {:indent$}'{}' => {}",
                "",
                segment,
                child.values.len(),
                indent = level * 2
            )?;
            child.render(syntax, level + 1, out)?;
        }
        Ok(())
    }
}

impl<V: PartialEq> TopicNode<V> {
    /// Removes one occurrence of `value` from this node, ignoring order.
    pub(crate) fn remove_value(values: &mut Vec<V>, value: &V) -> bool {
        match values.iter().position(|v| v == value) {
            Some(index) => {
                values.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes `value` from every node of this subtree, pruning emptied
    /// children. Returns the number of occurrences removed.
    pub(crate) fn clear_value(&mut self, value: &V) -> usize {
        let mut removed = usize::from(Self::remove_value(&mut self.values, value));

        self.literal_children.retain(|_, child| {
            removed += child.clear_value(value);
            !child.is_empty()
        });
        for slot in [&mut self.wildcard_one, &mut self.wildcard_some] {
            if let Some(child) = slot.as_deref_mut() {
                removed += child.clear_value(value);
            }
            slot.take_if(|child| child.is_empty());
        }

        removed
    }
}

impl<V> Default for TopicNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
