// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Subscription tables.
//!
//! A subscription table is a list of `(topic, subscriber)` pairs stored as
//! TOML or JSON. Loading a table registers every subscriber under its topic
//! in a [`TopicTree`], ready for matching published topics.
//!
//! ```toml
//! [[subscriptions]]
//! topic = "sensors/+/temperature"
//! subscriber = "dashboard"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::topic_tree::{TopicTree, TopicTreeConfig, TopicTreeError};

/// Errors that can occur while loading a subscription table.
#[derive(Error, Debug)]
pub enum SubscriptionError {
    /// The table file could not be read.
    #[error("Failed to read subscription table {path:?}: {source}")]
    Read {
        /// Path of the table
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The table file is not valid TOML or JSON.
    #[error("Failed to parse subscription table: {0}")]
    Parse(String),

    /// The file extension is neither `toml` nor `json`.
    #[error("Unsupported subscription table format: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// The tree could not be built with the requested syntax.
    #[error(transparent)]
    Tree(#[from] TopicTreeError),
}

/// A single subscriber registered under a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Topic, possibly containing wildcards
    pub topic: String,

    /// Opaque subscriber identifier
    pub subscriber: String,
}

/// A list of subscriptions as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTable {
    /// All subscriptions in file order
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl SubscriptionTable {
    /// Parses a table from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SubscriptionError> {
        toml::from_str(text).map_err(|e| SubscriptionError::Parse(e.to_string()))
    }

    /// Parses a table from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SubscriptionError> {
        serde_json::from_str(text).map_err(|e| SubscriptionError::Parse(e.to_string()))
    }

    /// Reads a table from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, SubscriptionError> {
        let parse = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml,
            Some("json") => Self::from_json,
            _ => return Err(SubscriptionError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path).map_err(|source| SubscriptionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let table = parse(&text)?;
        tracing::info!(
            path = %path.display(),
            subscriptions = table.subscriptions.len(),
            "subscription table loaded"
        );
        Ok(table)
    }

    /// Registers every subscription in a new tree using `config`.
    ///
    /// Repeated `(topic, subscriber)` pairs are registered once.
    pub fn into_tree(
        self,
        config: TopicTreeConfig,
    ) -> Result<TopicTree<String>, SubscriptionError> {
        let mut tree = TopicTree::with_config(config)?;
        for Subscription { topic, subscriber } in self.subscriptions {
            if !tree.add(&topic, subscriber) {
                tracing::debug!(%topic, "duplicate subscription ignored");
            }
        }
        Ok(tree)
    }
}
