//! Best-effort parsing of free-text SEO output
//!
//! The model is asked for `Description: ...` and `Keywords: a, b` lines but
//! nothing guarantees that shape. These functions only pick out what looks
//! like those lines and fall back to caller-supplied values otherwise.

use crate::utils::text::truncate_chars;

/// Longest meta description taken from an excerpt.
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Longest meta title.
pub const META_TITLE_MAX_CHARS: usize = 60;

/// Fields recovered from an SEO blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSeo {
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Parse the SEO blob, filling gaps from the excerpt and fallback keywords.
///
/// - description: text after the first `:` on the first line containing
///   "description"; otherwise the first 160 characters of `excerpt`.
/// - keywords: comma-separated values after the first `:` on the first line
///   containing "keywords"; otherwise `fallback_keywords`.
pub fn parse_seo_blob(blob: &str, excerpt: &str, fallback_keywords: &[String]) -> ParsedSeo {
    let meta_description = labelled_value(blob, "description")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| truncate_chars(excerpt.trim(), META_DESCRIPTION_MAX_CHARS));

    let keywords = labelled_value(blob, "keywords")
        .map(split_keywords)
        .unwrap_or_else(|| fallback_keywords.to_vec());

    ParsedSeo {
        meta_description,
        keywords,
    }
}

/// Value after the first colon of the first line whose text contains
/// `label` (case-insensitive). Lines without a colon are skipped.
pub fn labelled_value<'a>(blob: &'a str, label: &str) -> Option<&'a str> {
    let label = label.to_lowercase();
    blob.lines()
        .filter(|line| line.to_lowercase().contains(&label))
        .find_map(|line| line.split_once(':'))
        .map(|(_, value)| clean_value(value))
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(clean_value)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Meta title derived from the post title.
pub fn meta_title(title: &str) -> String {
    truncate_chars(title, META_TITLE_MAX_CHARS)
}

fn clean_value(value: &str) -> &str {
    value.trim().trim_matches(|c: char| c == '*' || c == '"').trim()
}
