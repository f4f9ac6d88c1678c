// Copyright (c) 2025 Topic Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path segmentation for the topic tree.
//!
//! Topics are consumed one segment at a time. Instead of a sentinel string
//! marking the end of a path, the remainder is an `Option<&str>`: `Some` means
//! more segments follow, `None` means the segment just split off was the last.

/// Splits `path` at the first occurrence of `separator`.
///
/// Returns the leading segment and the remainder after the separator, or the
/// whole path and `None` when the separator does not occur. An empty path is a
/// single empty segment, and a trailing separator yields a trailing empty
/// segment.
///
/// `separator` must not be empty.
///
/// # Example
///
/// ```
/// use topic_index_lib::data_structures::topic_tree::split_segment;
///
/// assert_eq!(split_segment("a/b/c", "/"), ("a", Some("b/c")));
/// assert_eq!(split_segment("c", "/"), ("c", None));
/// assert_eq!(split_segment("a/", "/"), ("a", Some("")));
/// ```
pub fn split_segment<'p>(path: &'p str, separator: &str) -> (&'p str, Option<&'p str>) {
    match path.find(separator) {
        Some(index) => (&path[..index], Some(&path[index + separator.len()..])),
        None => (path, None),
    }
}

/// A path segment classified against the configured wildcard tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'p> {
    /// An ordinary segment matched by string equality.
    Literal(&'p str),
    /// The single-level wildcard token.
    WildcardOne,
    /// The multi-level wildcard token.
    WildcardSome,
}

/// Borrowed view of a validated separator and wildcard tokens.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopicSyntax<'c> {
    pub(crate) separator: &'c str,
    pub(crate) wildcard_one: &'c str,
    pub(crate) wildcard_some: &'c str,
}

impl TopicSyntax<'_> {
    /// Classifies a raw segment.
    pub(crate) fn classify<'p>(&self, segment: &'p str) -> Segment<'p> {
        if segment == self.wildcard_some {
            Segment::WildcardSome
        } else if segment == self.wildcard_one {
            Segment::WildcardOne
        } else {
            Segment::Literal(segment)
        }
    }

    /// Splits off and classifies the next segment of `path`.
    pub(crate) fn split<'p>(&self, path: &'p str) -> (Segment<'p>, Option<&'p str>) {
        let (segment, rest) = split_segment(path, self.separator);
        (self.classify(segment), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MQTT: TopicSyntax<'static> = TopicSyntax {
        separator: "/",
        wildcard_one: "+",
        wildcard_some: "#",
    };

    #[test]
    fn test_split_segment() {
        assert_eq!(split_segment("a/b/c", "/"), ("a", Some("b/c")));
        assert_eq!(split_segment("b/c", "/"), ("b", Some("c")));
        assert_eq!(split_segment("c", "/"), ("c", None));
        assert_eq!(split_segment("", "/"), ("", None));
        assert_eq!(split_segment("/", "/"), ("", Some("")));
        assert_eq!(split_segment("a//b", "/"), ("a", Some("/b")));
    }

    #[test]
    fn test_split_segment_multi_char_separator() {
        assert_eq!(split_segment("a::b::c", "::"), ("a", Some("b::c")));
        assert_eq!(split_segment("a:b", "::"), ("a:b", None));
    }

    #[test]
    fn test_classify() {
        assert_eq!(MQTT.classify("+"), Segment::WildcardOne);
        assert_eq!(MQTT.classify("#"), Segment::WildcardSome);
        assert_eq!(MQTT.classify("a+"), Segment::Literal("a+"));
        assert_eq!(MQTT.classify(""), Segment::Literal(""));
    }

    #[test]
    fn test_split_classifies() {
        assert_eq!(MQTT.split("+/b"), (Segment::WildcardOne, Some("b")));
        assert_eq!(MQTT.split("#"), (Segment::WildcardSome, None));
        assert_eq!(MQTT.split("x/#"), (Segment::Literal("x"), Some("#")));
    }
}
