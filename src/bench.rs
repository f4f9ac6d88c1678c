// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Benchmark fixtures for the topic index.
//!
//! Builds deterministic topic sets and populated trees so that benchmark
//! runs are comparable across commits.

use crate::data_structures::topic_tree::TopicTree;

/// Segment names cycled through when generating topics.
const SEGMENTS: [&str; 8] = [
    "sensors", "kitchen", "garage", "temperature", "humidity", "north", "south", "status",
];

/// Generates `count` distinct literal topics of `depth` segments each.
///
/// The last segment carries the topic index so every topic is unique.
pub fn literal_topics(count: usize, depth: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut segments: Vec<String> = (0..depth.saturating_sub(1))
                .map(|level| SEGMENTS[(i / (level + 1)) % SEGMENTS.len()].to_string())
                .collect();
            segments.push(i.to_string());
            segments.join("/")
        })
        .collect()
}

/// Builds a standard tree holding every topic from [`literal_topics`], plus
/// one `+` and one `#` registration per top-level segment.
pub fn populated_tree(count: usize, depth: usize) -> TopicTree<usize> {
    let mut tree = TopicTree::standard();
    for (i, topic) in literal_topics(count, depth).iter().enumerate() {
        tree.add(topic, i);
    }
    for (i, segment) in SEGMENTS.iter().enumerate() {
        tree.add(&format!("{segment}/+"), count + i);
        tree.add(&format!("{segment}/#"), count + SEGMENTS.len() + i);
    }
    tree
}
