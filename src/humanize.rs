use crate::config::Heuristics;

/// Turns a snake_case test name into a readable phrase.
///
/// The leading marker word (`test`) is dropped, known acronyms are rendered in
/// their fixed case, the first remaining word is capitalized and the rest are
/// lowercased. Never fails: an identifier with nothing left after stripping
/// yields [`Heuristics::display_word`].
pub fn humanize_name(name: &str, heuristics: &Heuristics) -> String {
    let mut tokens: Vec<&str> = name.split('_').filter(|t| !t.is_empty()).collect();
    if tokens.first() == Some(&heuristics.marker_word.as_str()) {
        tokens.remove(0);
    }
    if tokens.is_empty() {
        return heuristics.display_word.clone();
    }

    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            let lower = token.to_lowercase();
            match heuristics.acronym(&lower) {
                Some(form) => form.to_string(),
                None if idx == 0 => capitalize(&lower),
                None => lower,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
