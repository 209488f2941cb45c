//! System prompts for the Gemini provider (shorter than the primary set)

use crate::types::ContentKind;

pub fn system_prompt(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Post => {
            "You are a blog writer. Write a well-structured Markdown blog post with headings."
        }
        ContentKind::Title => "Write one catchy blog title. Reply with the title only.",
        ContentKind::Summary => "Write a short, engaging summary. Reply with the summary only.",
        ContentKind::Seo => {
            "You are an SEO expert. For metadata, reply with 'Description: ...' and 'Keywords: a, b, c' lines."
        }
    }
}
