// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the topic tree.

use super::error::{Result, TopicTreeError};
use super::segment::TopicSyntax;

/// Separator and wildcard tokens used by a [`TopicTree`](super::TopicTree).
///
/// The three strings are fixed once a tree is built. They must be non-empty,
/// pairwise distinct, and neither wildcard may contain the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTreeConfig {
    /// Separates path segments
    separator: String,

    /// Matches exactly one segment
    wildcard_one: String,

    /// Matches zero or more trailing segments
    wildcard_some: String,
}

impl TopicTreeConfig {
    /// Create a new configuration with the MQTT-style defaults.
    ///
    /// Default values:
    /// - separator: `/`
    /// - wildcard_one: `+`
    /// - wildcard_some: `#`
    pub fn new() -> Self {
        Self {
            separator: "/".to_string(),
            wildcard_one: "+".to_string(),
            wildcard_some: "#".to_string(),
        }
    }

    /// Set the segment separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the single-level wildcard token.
    pub fn with_wildcard_one(mut self, wildcard_one: impl Into<String>) -> Self {
        self.wildcard_one = wildcard_one.into();
        self
    }

    /// Set the multi-level wildcard token.
    pub fn with_wildcard_some(mut self, wildcard_some: impl Into<String>) -> Self {
        self.wildcard_some = wildcard_some.into();
        self
    }

    /// Get the segment separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Get the single-level wildcard token.
    pub fn wildcard_one(&self) -> &str {
        &self.wildcard_one
    }

    /// Get the multi-level wildcard token.
    pub fn wildcard_some(&self) -> &str {
        &self.wildcard_some
    }

    /// Checks that the tokens can be used together without ambiguity.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the configuration is usable.
    /// * `Err(TopicTreeError)` - Describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("separator", self.separator.as_str()),
            ("wildcard_one", self.wildcard_one.as_str()),
            ("wildcard_some", self.wildcard_some.as_str()),
        ];

        for (field, token) in fields {
            if token.is_empty() {
                return Err(TopicTreeError::EmptyToken { field });
            }
        }

        for (i, &(first, a)) in fields.iter().enumerate() {
            for &(second, b) in &fields[i + 1..] {
                if a == b {
                    return Err(TopicTreeError::DuplicateToken {
                        first,
                        second,
                        token: a.to_string(),
                    });
                }
            }
        }

        for &(field, wildcard) in &fields[1..] {
            if wildcard.contains(self.separator.as_str()) {
                return Err(TopicTreeError::SeparatorInWildcard {
                    field,
                    wildcard: wildcard.to_string(),
                    separator: self.separator.clone(),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn syntax(&self) -> TopicSyntax<'_> {
        TopicSyntax {
            separator: &self.separator,
            wildcard_one: &self.wildcard_one,
            wildcard_some: &self.wildcard_some,
        }
    }
}

impl Default for TopicTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TopicTreeConfig::default();
        assert_eq!(config.separator(), "/");
        assert_eq!(config.wildcard_one(), "+");
        assert_eq!(config.wildcard_some(), "#");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_tokens_are_valid() {
        let config = TopicTreeConfig::new()
            .with_separator(".")
            .with_wildcard_one("*")
            .with_wildcard_some(">");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_tokens() {
        let config = TopicTreeConfig::new().with_separator("");
        assert_eq!(
            config.validate(),
            Err(TopicTreeError::EmptyToken { field: "separator" })
        );

        let config = TopicTreeConfig::new().with_wildcard_some("");
        assert_eq!(
            config.validate(),
            Err(TopicTreeError::EmptyToken {
                field: "wildcard_some"
            })
        );
    }

    #[test]
    fn test_rejects_wildcard_as_separator() {
        let config = TopicTreeConfig::new().with_separator("+");
        assert_eq!(
            config.validate(),
            Err(TopicTreeError::DuplicateToken {
                first: "separator",
                second: "wildcard_one",
                token: "+".to_string(),
            })
        );

        let config = TopicTreeConfig::new().with_wildcard_one("#");
        assert!(matches!(
            config.validate(),
            Err(TopicTreeError::DuplicateToken {
                first: "wildcard_one",
                second: "wildcard_some",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_separator_inside_wildcard() {
        let config = TopicTreeConfig::new().with_wildcard_some("#/");
        assert!(matches!(
            config.validate(),
            Err(TopicTreeError::SeparatorInWildcard {
                field: "wildcard_some",
                ..
            })
        ));
    }
}
