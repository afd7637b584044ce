//! Byte-level delimiter scanning that steps over literals and comments.
//!
//! Brace, parenthesis and comma scanning all run on the same rule: a delimiter
//! only counts when it sits in code, not inside `"..."`, a `'x'` literal, a
//! `// line` comment or a `/* block */` comment. Raw strings are not recognised.

/// Yields `(byte_index, byte)` for every byte of `s` that lies outside a
/// string or char literal and outside a comment. Quote bytes and comment
/// text are never yielded; the newline ending a line comment is.
pub fn code_bytes(s: &str) -> CodeBytes<'_> {
    CodeBytes {
        bytes: s.as_bytes(),
        pos: 0,
        in_str: false,
    }
}

pub struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
    in_str: bool,
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.bytes.len() {
            let i = self.pos;
            let b = self.bytes[i];
            self.pos += 1;

            if self.in_str {
                match b {
                    b'\\' => self.pos += 1,
                    b'"' => self.in_str = false,
                    _ => {}
                }
                continue;
            }
            match (b, self.bytes.get(i + 1).copied()) {
                (b'"', _) => self.in_str = true,
                (b'\'', _) => self.pos = self.char_literal_end(i).unwrap_or(self.pos),
                (b'/', Some(b'/')) => self.pos = self.line_comment_end(i),
                (b'/', Some(b'*')) => self.pos = self.block_comment_end(i),
                _ => return Some((i, b)),
            }
        }
        None
    }
}

impl CodeBytes<'_> {
    /// Index just past a char literal opening at `quote`, or `None` for a
    /// lifetime / label such as `'a`.
    fn char_literal_end(&self, quote: usize) -> Option<usize> {
        let rest = &self.bytes[quote + 1..];
        match rest {
            [b'\\', ..] => rest
                .iter()
                .skip(2)
                .position(|&c| c == b'\'')
                .map(|p| quote + 1 + 2 + p + 1),
            _ => {
                // One char, possibly multi-byte, then the closing quote.
                let width = utf8_width(*rest.first()?);
                (rest.get(width) == Some(&b'\'')).then_some(quote + 1 + width + 1)
            }
        }
    }
}

impl CodeBytes<'_> {
    /// Index of the `\n` closing a line comment opening at `start`, or the end
    /// of input.
    fn line_comment_end(&self, start: usize) -> usize {
        self.bytes[start..]
            .iter()
            .position(|&c| c == b'\n')
            .map_or(self.bytes.len(), |p| start + p)
    }

    /// Index just past the `*/` closing a block comment opening at `start`.
    /// Block comments nest; an unclosed one runs to the end of input.
    fn block_comment_end(&self, start: usize) -> usize {
        let mut depth = 0usize;
        let mut i = start;
        while i + 1 < self.bytes.len() {
            match (self.bytes[i], self.bytes[i + 1]) {
                (b'/', b'*') => {
                    depth += 1;
                    i += 2;
                }
                (b'*', b'/') => {
                    depth -= 1;
                    i += 2;
                    if depth == 0 {
                        return i;
                    }
                }
                _ => i += 1,
            }
        }
        self.bytes.len()
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

/// Index of the `close` byte balancing the `open` byte at `start`.
pub fn matching(s: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in code_bytes(&s[start..]) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(start + i);
            }
        }
    }
    None
}

/// Splits on commas that are not nested inside `()`, `[]` or `{}` (or a literal).
/// Parts are trimmed; empty parts, such as the one after a trailing comma, are dropped.
pub fn split_top_level(expr: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, b) in code_bytes(expr) {
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(expr[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(expr[start..].trim().to_string());
    parts.retain(|p| !p.is_empty());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_bytes_skips_string_contents() {
        let src = r#"a("x)", b)"#;
        let code: String = code_bytes(src).map(|(_, b)| b as char).collect();
        assert_eq!(code, "a(, b)");
    }

    #[test]
    fn test_code_bytes_skips_char_literals_but_not_lifetimes() {
        let code: String = code_bytes("f('(', '\\'', &'a x)")
            .map(|(_, b)| b as char)
            .collect();
        assert_eq!(code, "f(, , &a x)");
    }

    #[test]
    fn test_code_bytes_skips_comments() {
        let code: String = code_bytes("a // don't \"x\nb /* { /* } */ ( */ c")
            .map(|(_, b)| b as char)
            .collect();
        assert_eq!(code, "a \nb  c");
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let code: String = code_bytes("a / b").map(|(_, b)| b as char).collect();
        assert_eq!(code, "a / b");
    }

    #[test]
    fn test_matching_ignores_delimiters_in_comments() {
        let s = "{\n    // don't\n    // 12\" x\n    /* { */\n    f();\n}\nrest";
        assert_eq!(matching(s, 0, b'{', b'}'), s.find("}\nrest"));

        let call = "assert!(ok /* ) */, \"msg\") // )";
        assert_eq!(matching(call, 7, b'(', b')'), call.find(") //"));
    }

    #[test]
    fn test_matching_handles_nesting() {
        let s = "assert!(f(g(1), (2)));";
        assert_eq!(matching(s, 7, b'(', b')'), Some(20));
        assert_eq!(matching("x(( )", 1, b'(', b')'), None);
    }

    #[test]
    fn test_matching_ignores_parens_in_strings() {
        let s = r#"assert!(s.contains("("))"#;
        assert_eq!(matching(s, 7, b'(', b')'), Some(s.len() - 1));
    }

    #[test]
    fn test_split_top_level_keeps_nested_commas() {
        let parts = split_top_level("vec![1, 2, 3], expected");
        assert_eq!(parts, vec!["vec![1, 2, 3]", "expected"]);
    }

    #[test]
    fn test_split_top_level_keeps_commas_inside_strings() {
        let parts = split_top_level(r#"msg, "a, b", "{}, {}""#);
        assert_eq!(parts, vec!["msg", r#""a, b""#, r#""{}, {}""#]);
    }

    #[test]
    fn test_split_top_level_drops_trailing_empty_part() {
        assert_eq!(split_top_level("a, b,"), vec!["a", "b"]);
        assert!(split_top_level("").is_empty());
    }
}
