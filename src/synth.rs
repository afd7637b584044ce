use crate::asserts::extract_asserts;
use crate::config::Heuristics;
use crate::defaults::{COVERAGE_LINE, DOC_PREFIX};
use crate::humanize::humanize_name;
use crate::model::DocBlock;
use crate::regexes::{re_qualified_path, re_turbofish};

/// First `Type::item` reference in the body, with any `::<...>::` turbofish
/// collapsed to `::`.
pub fn find_primary_target(body: &str) -> Option<String> {
    let m = re_qualified_path().find(body)?;
    Some(re_turbofish().replace_all(m.as_str(), "::").into_owned())
}

/// Builds the doc block for one test.
///
/// The opening sentence names the primary target when the body has one. A blank
/// doc line follows, then either an `Assertions:` list (one bullet per
/// assertion, scan order) or the generic coverage line. Every line is prefixed
/// with `indent`.
pub fn build_doc_comment(
    indent: &str,
    name: &str,
    body: &str,
    heuristics: &Heuristics,
) -> DocBlock {
    let display = humanize_name(name, heuristics).to_lowercase();
    let target = find_primary_target(body);
    let assertions = extract_asserts(body);

    let mut raw = Vec::with_capacity(assertions.len() + 3);
    raw.push(match &target {
        Some(t) => format!("Validates `{}` behavior for the {} scenario.", t, display),
        None => format!("Validates the {} scenario.", display),
    });
    raw.push(String::new());
    if assertions.is_empty() {
        raw.push(COVERAGE_LINE.to_string());
    } else {
        raw.push("Assertions:".to_string());
        raw.extend(assertions.iter().map(|a| format!("- {}.", a.text)));
    }

    DocBlock {
        target,
        assertions,
        lines: indent_like(indent, &raw),
    }
}

/// Turns raw text lines into `///` lines carrying `indent`; empty lines become a bare `///`.
fn indent_like(indent: &str, raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|line| {
            if line.trim().is_empty() {
                format!("{}{}", indent, DOC_PREFIX)
            } else {
                format!("{}{} {}", indent, DOC_PREFIX, line)
            }
        })
        .collect()
}
