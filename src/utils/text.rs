//! Small text helpers used when post-processing generated output.

/// Opening and closing quotes that may wrap a generated title.
const QUOTE_PAIRS: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// Keep at most `max_chars` characters. Counts Unicode scalar values so a
/// multi-byte character is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Trim whitespace and remove quotes that wrap the whole text.
///
/// A quote is only removed together with its partner at the other end, so a
/// leading or trailing apostrophe survives.
pub fn strip_quotes(text: &str) -> String {
    let mut current = text.trim();
    loop {
        let mut chars = current.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            break;
        };
        if !QUOTE_PAIRS.contains(&(first, last)) {
            break;
        }
        current = current[first.len_utf8()..current.len() - last.len_utf8()].trim();
    }
    current.to_string()
}
