//! Marker-block boundaries, signature lookup and doc-comment presence.
//!
//! Every function takes the immutable line slice plus an index and hands back
//! a new index; nothing keeps a cursor between calls.

use crate::classify::{is_attribute, is_doc_comment};
use crate::model::MarkerBlock;
use crate::regexes::re_fn_token;

/// The marker block around the test marker at `marker`.
///
/// `start` walks up over preceding attributes; `end` walks down over the
/// attributes that follow the marker.
pub fn marker_block(lines: &[&str], marker: usize) -> MarkerBlock {
    let mut start = marker;
    while start > 0 && is_attribute(lines[start - 1]) {
        start -= 1;
    }
    let mut end = marker;
    while end + 1 < lines.len() && is_attribute(lines[end + 1]) {
        end += 1;
    }
    MarkerBlock { start, end }
}

/// First line after the block that carries the `fn` keyword, if the file has one.
pub fn find_signature(lines: &[&str], block: MarkerBlock) -> Option<usize> {
    (block.end + 1..lines.len()).find(|&i| re_fn_token().is_match(lines[i]))
}

/// True when the first non-blank line above the block is a `///` comment.
pub fn has_doc_comment(lines: &[&str], block: MarkerBlock) -> bool {
    lines[..block.start]
        .iter()
        .rev()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| is_doc_comment(l))
}

/// Leading whitespace of `line`, borrowed as-is.
///
/// # Notes
/// - Tabs and spaces are kept exactly, so inserted doc lines line up with the
///   marker block whatever the file uses.
/// - A blank line is all indentation.
pub fn indentation(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<&str> {
        src.lines().collect()
    }

    #[test]
    fn test_block_spans_attributes_on_both_sides() {
        let src = lines(
            "mod tests {\n    #[ignore]\n    #[test]\n    #[should_panic]\n    fn test_boom() {}\n}",
        );
        let block = marker_block(&src, 2);
        assert_eq!(block, MarkerBlock { start: 1, end: 3 });
        assert_eq!(find_signature(&src, block), Some(4));
    }

    #[test]
    fn test_block_at_file_start() {
        let src = lines("#[test]\nfn test_a() {}");
        let block = marker_block(&src, 0);
        assert_eq!(block, MarkerBlock { start: 0, end: 0 });
        assert!(
            !has_doc_comment(&src, block),
            "nothing precedes the block, so no doc comment"
        );
    }

    #[test]
    fn test_signature_search_skips_non_fn_lines() {
        let src = lines("#[test]\n// comment\n\npub async fn test_a() {}");
        assert_eq!(find_signature(&src, marker_block(&src, 0)), Some(3));
    }

    #[test]
    fn test_missing_signature() {
        let src = lines("#[test]\nconst X: u8 = 1;");
        assert_eq!(find_signature(&src, marker_block(&src, 0)), None);
    }

    #[test]
    fn test_doc_comment_detection_ignores_blank_lines() {
        let src = lines("/// Documented.\n\n\n#[test]\nfn test_a() {}");
        assert!(has_doc_comment(&src, marker_block(&src, 3)));

        let src = lines("// plain\n#[test]\nfn test_a() {}");
        assert!(!has_doc_comment(&src, marker_block(&src, 1)));
    }

    #[test]
    fn test_indentation_is_literal_prefix() {
        assert_eq!(indentation("\t  #[test]"), "\t  ");
        assert_eq!(indentation("#[test]"), "");
    }
}
