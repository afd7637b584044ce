use crate::delims::code_bytes;
use crate::model::Body;

/// Finds the brace-delimited body of the function whose signature sits on
/// `sig_line0`.
///
/// The first `{` at or after the signature opens the body; depth counting over
/// `{`/`}` (literals and comments excluded) finds its partner, so nested
/// blocks, closures and struct literals inside the body are tolerated.
///
/// # Returns
/// - `Body::Span` with the text strictly between the braces and the zero-based
///   lines of both braces.
/// - `Body::Empty` when no `{` follows the signature at all.
/// - `Body::Unterminated` when the file ends before the depth returns to zero.
pub fn extract_body(lines: &[&str], sig_line0: usize) -> Body {
    let Some(tail) = lines.get(sig_line0..) else {
        return Body::Empty;
    };
    let joined = tail.join("\n");

    let mut open = None;
    let mut depth = 0usize;
    for (i, b) in code_bytes(&joined) {
        match b {
            b'{' => {
                open.get_or_insert(i);
                depth += 1;
            }
            b'}' if open.is_some() => {
                depth -= 1;
                if depth == 0 {
                    let start = open.unwrap_or(i);
                    return Body::Span {
                        open_line: sig_line0 + line_of(&joined, start),
                        close_line: sig_line0 + line_of(&joined, i),
                        text: joined[start + 1..i].to_string(),
                    };
                }
            }
            _ => {}
        }
    }

    if open.is_some() {
        Body::Unterminated
    } else {
        Body::Empty
    }
}

fn line_of(text: &str, byte: usize) -> usize {
    text[..byte].bytes().filter(|&b| b == b'\n').count()
}
