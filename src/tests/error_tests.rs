//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::topic_tree::{TopicTree, TopicTreeError};
use crate::error::{
    config::ConfigError, get_error_reporting, set_error_reporter, ErrorContext, ErrorReporter,
    TopicIndexError, TracingErrorReporter,
};
use crate::subscriptions::SubscriptionError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = TopicIndexError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = TopicIndexError::Io(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error: TopicIndexError = ConfigError::ValidationError("bad level".to_string()).into();
    assert!(matches!(error, TopicIndexError::Config(_)));
    assert!(error.to_string().contains("bad level"));
}

/// Test that tree construction errors convert into the crate error.
#[test]
fn test_tree_error_conversion() {
    let error: TopicIndexError = TopicTree::<u8>::new("/", "/", "#").unwrap_err().into();
    assert!(matches!(
        error,
        TopicIndexError::Tree(TopicTreeError::DuplicateToken { .. })
    ));
    assert!(error.to_string().starts_with("Topic tree error:"));
}

/// Test that subscription errors keep the tree error message.
#[test]
fn test_subscription_error_conversion() {
    let tree_error = TopicTree::<u8>::new("", "+", "#").unwrap_err();
    let message = tree_error.to_string();
    let error: TopicIndexError = SubscriptionError::from(tree_error).into();

    assert!(matches!(error, TopicIndexError::Subscription(_)));
    assert!(error.to_string().ends_with(&message));
}

/// Test that trace information is attached and span capture never fails.
#[test]
fn test_error_context_trace() {
    let context = ErrorContext::new(TopicIndexError::Custom("x".to_string()), "trace")
        .with_trace("explicit trace");
    assert_eq!(context.trace.as_deref(), Some("explicit trace"));

    // no ErrorLayer is installed in tests, so nothing is captured
    let context =
        ErrorContext::new(TopicIndexError::Custom("x".to_string()), "trace").with_span_trace();
    assert!(context.trace.is_none());
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// Note: This test modifies global state.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = TopicIndexError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    get_error_reporting().report(context);

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = TopicIndexError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
