use regex::Regex;
use std::sync::OnceLock;

/// `#[test`, `#[tokio::test` (with or without arguments).
pub fn re_test_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\[(?:tokio::)?test").unwrap())
}
/// The `fn` keyword as a whole word.
pub fn re_fn_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bfn\b").unwrap())
}
/// Captures the function name after `fn`, skipping a raw-identifier `r#`.
pub fn re_fn_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bfn\s+(?:r#)?([A-Za-z0-9_]+)").unwrap())
}
/// Start of an assertion macro call up to and including its opening parenthesis.
pub fn re_assert_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(assert[_a-zA-Z0-9]*)!\s*\(").unwrap())
}
/// `Type::item` or `Type::<Generics>::item`.
pub fn re_qualified_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Za-z0-9_]*::(?:<[^>]+>::)?[A-Za-z0-9_]+").unwrap()
    })
}
pub fn re_turbofish() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"::<[^>]+>::").unwrap())
}
