// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the topic tree.
//!
//! Tree operations themselves never fail; only construction with an
//! inconsistent separator/wildcard configuration is rejected.

/// Errors that can occur when configuring a topic tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicTreeError {
    /// A separator or wildcard token is the empty string.
    #[error("{field} must not be empty")]
    EmptyToken {
        /// Name of the offending configuration field.
        field: &'static str,
    },

    /// Two of the three configuration strings are equal.
    #[error("{first} and {second} must differ, both are '{token}'")]
    DuplicateToken {
        /// Name of the first colliding field.
        first: &'static str,
        /// Name of the second colliding field.
        second: &'static str,
        /// The shared value.
        token: String,
    },

    /// A wildcard token contains the separator and could never be a single segment.
    #[error("{field} '{wildcard}' contains the separator '{separator}'")]
    SeparatorInWildcard {
        /// Name of the offending wildcard field.
        field: &'static str,
        /// The wildcard token.
        wildcard: String,
        /// The configured separator.
        separator: String,
    },
}

/// Result type for topic tree operations.
pub type Result<T> = std::result::Result<T, TopicTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TopicTreeError::EmptyToken { field: "separator" };
        assert_eq!(err.to_string(), "separator must not be empty");

        let err = TopicTreeError::DuplicateToken {
            first: "separator",
            second: "wildcard_one",
            token: "+".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "separator and wildcard_one must differ, both are '+'"
        );

        let err = TopicTreeError::SeparatorInWildcard {
            field: "wildcard_some",
            wildcard: "#/".to_string(),
            separator: "/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "wildcard_some '#/' contains the separator '/'"
        );
    }
}
