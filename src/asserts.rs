use crate::delims::{matching, split_top_level};
use crate::model::AssertSummary;
use crate::regexes::re_assert_call;

use std::fmt;

/// How a single assertion reads in prose. Variants are tried top to bottom.
#[derive(Debug, PartialEq, Eq)]
enum Rendering<'a> {
    Equals(&'a str, &'a str),
    Differs(&'a str, &'a str),
    Holds(&'a str),
    Verbatim { keyword: &'a str, expr: &'a str },
}

impl<'a> Rendering<'a> {
    fn of(keyword: &'a str, expr: &'a str, operands: &'a [String]) -> Self {
        match (keyword, operands) {
            ("assert_eq", [lhs, rhs, ..]) => Rendering::Equals(lhs, rhs),
            ("assert_ne", [lhs, rhs, ..]) => Rendering::Differs(lhs, rhs),
            ("assert", [cond, ..]) => Rendering::Holds(cond),
            ("assert", []) => Rendering::Holds(expr),
            _ => Rendering::Verbatim { keyword, expr },
        }
    }
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendering::Equals(lhs, rhs) => write!(f, "Confirms `{}` equals `{}`", lhs, rhs),
            Rendering::Differs(lhs, rhs) => {
                write!(f, "Confirms `{}` differs from `{}`", lhs, rhs)
            }
            Rendering::Holds(cond) => write!(f, "Ensures `{}` evaluates to true", cond),
            Rendering::Verbatim { keyword, expr } => {
                write!(f, "Checks `{}!({})`", keyword, expr)
            }
        }
    }
}

/// Collapses every run of whitespace, newlines included, into one space.
pub fn clean_expr(expr: &str) -> String {
    expr.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders one assertion as a sentence fragment, without the trailing period.
///
/// `expr` is the raw text between the macro's parentheses. It is whitespace
/// normalized first, then split on top-level commas to find the operands.
///
/// # Notes
/// - `assert_eq`/`assert_ne` need two operands; with fewer they fall back to
///   the verbatim `Checks ...` form, like any other `assert*` macro.
/// - A bare `assert` with no operands reads the whole (empty) expression.
pub fn format_assert_text(keyword: &str, expr: &str) -> String {
    let cleaned = clean_expr(expr);
    let operands = split_top_level(&cleaned);
    Rendering::of(keyword.trim(), &cleaned, &operands).to_string()
}

/// Summarizes every `assert*!(...)` call in `body`, in textual order.
///
/// After each match the scan resumes past the next `;` at or after the closing
/// parenthesis, or right after the parenthesis when no `;` is left in the body,
/// so matches never overlap. An assertion sitting between a call and that `;`
/// (another arm of the same `if`, say) is therefore not reported. An
/// unbalanced call swallows the rest of the body.
///
/// # Returns
/// One `AssertSummary` per reported call, in scan order; empty when the body
/// has no assertions.
pub fn extract_asserts(body: &str) -> Vec<AssertSummary> {
    let mut out = Vec::new();
    let mut idx = 0usize;

    while let Some(caps) = re_assert_call().captures_at(body, idx) {
        let (Some(call), Some(keyword)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let open = call.end() - 1;
        let (expr, close) = match matching(body, open, b'(', b')') {
            Some(close) => (&body[open + 1..close], close),
            None => (&body[open + 1..], body.len()),
        };

        out.push(AssertSummary {
            keyword: keyword.as_str().to_string(),
            text: format_assert_text(keyword.as_str(), expr),
        });
        idx = resume_after(body, close);
    }
    out
}

fn resume_after(body: &str, close: usize) -> usize {
    if close >= body.len() {
        return body.len();
    }
    match body[close..].find(';') {
        Some(semi) => close + semi + 1,
        None => close + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(body: &str) -> Vec<String> {
        extract_asserts(body).into_iter().map(|a| a.text).collect()
    }

    #[test]
    fn test_equality_rendering() {
        assert_eq!(
            format_assert_text("assert_eq", "a, b.len()"),
            "Confirms `a` equals `b.len()`"
        );
    }

    #[test]
    fn test_inequality_and_boolean_rendering() {
        assert_eq!(
            format_assert_text("assert_ne", "left,\n    right"),
            "Confirms `left` differs from `right`"
        );
        assert_eq!(
            format_assert_text("assert", "x.is_empty(), \"should be empty: {}\", x"),
            "Ensures `x.is_empty()` evaluates to true"
        );
    }

    #[test]
    fn test_other_macros_render_verbatim() {
        assert_eq!(
            format_assert_text("assert_matches", "res,   Err(_)"),
            "Checks `assert_matches!(res, Err(_))`"
        );
        assert_eq!(
            format_assert_text("assert_eq", "only_one"),
            "Checks `assert_eq!(only_one)`",
            "assert_eq with fewer than two operands falls through"
        );
        assert_eq!(format_assert_text("assert", ""), "Ensures `` evaluates to true");
    }

    #[test]
    fn test_nested_commas_split_into_two_operands() {
        assert_eq!(
            format_assert_text("assert_eq", "vec![1, 2, 3], expected"),
            "Confirms `vec![1, 2, 3]` equals `expected`"
        );
    }

    #[test]
    fn test_extracts_in_scan_order_across_lines() {
        let body = r#"
    let v = compute();
    assert!(v.ok);
    assert_eq!(
        v.items,
        vec![1, 2],
    );
    assert_ne!(v.id, 0);
"#;
        let got = extract_asserts(body);
        let keywords: Vec<&str> = got.iter().map(|a| a.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["assert", "assert_eq", "assert_ne"]);
        assert_eq!(got[1].text, "Confirms `v.items` equals `vec![1, 2]`");
    }

    #[test]
    fn test_scan_skips_to_the_statement_separator() {
        let body = "if flag { assert!(a) } else { assert!(b) }\nassert_eq!(x, y);";
        assert_eq!(
            texts(body),
            vec!["Ensures `a` evaluates to true"],
            "everything up to the next `;` belongs to the first call"
        );
    }

    #[test]
    fn test_assert_inside_closure_then_next_statement() {
        let body = "items.iter().for_each(|i| assert!(i.valid()));\nassert_eq!(items.len(), 3);";
        assert_eq!(
            texts(body),
            vec![
                "Ensures `i.valid()` evaluates to true",
                "Confirms `items.len()` equals `3`",
            ]
        );
    }

    #[test]
    fn test_debug_asserts_and_plain_calls_are_ignored() {
        assert!(texts("debug_assert!(x); assert_eq(a, b); my_assert!(y);").is_empty());
    }

    #[test]
    fn test_unbalanced_call_consumes_rest_of_body() {
        assert_eq!(
            texts("assert!(f(x)\nlet y = 1;"),
            vec!["Ensures `f(x) let y = 1;` evaluates to true"]
        );
    }

    #[test]
    fn test_resume_after_semicolon() {
        assert_eq!(resume_after("assert!(a) ;x", 9), 12);
        assert_eq!(resume_after("assert!(a) } b(); c", 9), 17);
        assert_eq!(resume_after("assert!(a) x", 9), 10);
        assert_eq!(resume_after("assert!(a)", 9), 10);
    }
}
