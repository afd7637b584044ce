//! Line classification for attribute blocks and doc comments.

use crate::defaults::DOC_PREFIX;
use crate::regexes::re_test_attr;

/// What a single source line is, as far as marker-block scanning cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#[test]`, `#[tokio::test(...)]` and friends.
    TestMarker,
    /// Any other `#[...]` attribute, including `#[cfg(test)]`.
    Attribute,
    DocComment,
    Other,
}

/// Classifies one line. Test markers win over plain attributes, which win over
/// doc comments.
pub fn classify(line: &str) -> LineKind {
    if is_test_attribute(line) {
        LineKind::TestMarker
    } else if is_attribute(line) {
        LineKind::Attribute
    } else if is_doc_comment(line) {
        LineKind::DocComment
    } else {
        LineKind::Other
    }
}

/// True when the line declares a test entry point.
///
/// Conditional-compilation attributes are rejected even when they mention a
/// test-shaped token (`#[cfg_attr(test, ...)]`), since they configure rather
/// than declare.
pub fn is_test_attribute(line: &str) -> bool {
    let t = line.trim();
    if !t.starts_with("#[") || t.starts_with("#[cfg") {
        return false;
    }
    re_test_attr().is_match(t)
}

/// Any `#[...]` line, test markers and `#[cfg(...)]` included.
pub fn is_attribute(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("#[") && !t.starts_with(DOC_PREFIX)
}

/// `///` after optional indentation. `//!` and `//` do not count.
pub fn is_doc_comment(line: &str) -> bool {
    line.trim_start().starts_with(DOC_PREFIX)
}
