// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Topic syntax configuration.
//!
//! Selects the separator and wildcard tokens used for every tree the
//! application builds.

use super::{ConfigResult, Validate};
use crate::data_structures::topic_tree::TopicTreeConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Topic syntax configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeConfig {
    /// Segment separator
    pub separator: String,

    /// Single-level wildcard token
    pub wildcard_one: String,

    /// Multi-level wildcard token
    pub wildcard_some: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            wildcard_one: "+".to_string(),
            wildcard_some: "#".to_string(),
        }
    }
}

impl TreeConfig {
    /// Converts into the configuration accepted by the topic tree.
    pub fn to_tree_config(&self) -> TopicTreeConfig {
        TopicTreeConfig::new()
            .with_separator(&self.separator)
            .with_wildcard_one(&self.wildcard_one)
            .with_wildcard_some(&self.wildcard_some)
    }
}

impl Validate for TreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.to_tree_config()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("tree: {e}")))
    }
}
