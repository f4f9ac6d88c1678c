//! Topic Index Library
//!
//! This library contains a hierarchical topic-matching index in the style of
//! publish/subscribe brokers, together with the configuration, error handling
//! and subscription-table loading used by the `topic_index` binary.
//!
//! # Architecture
//!
//! - [`data_structures::topic_tree`] holds the index itself. Values are stored
//!   under separator-delimited topics that may contain single-level and
//!   multi-level wildcards, and can be retrieved by matching a concrete topic
//!   against stored patterns or by searching stored topics with a pattern.
//! - [`config`] loads the topic syntax and logging settings from files and
//!   environment variables.
//! - [`subscriptions`] reads `(topic, subscriber)` tables from disk.
//! - [`error`] defines the crate-wide error type and error reporting hooks.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod subscriptions;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the topic index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
