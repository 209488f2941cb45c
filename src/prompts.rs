//! User prompts for the composed content operations

use crate::types::Tone;

/// Prompt for the full post body.
pub fn blog_post(topic: &str, keywords: &[String], tone: Tone) -> String {
    let mut prompt = format!("Write a comprehensive, {tone} blog post about \"{topic}\".");
    if !keywords.is_empty() {
        prompt.push_str(&format!(
            " Naturally include the following keywords: {}.",
            keywords.join(", ")
        ));
    }
    prompt.push_str(
        " Structure it with an introduction, several sections with headings, and a conclusion.",
    );
    prompt
}

pub fn title(topic: &str) -> String {
    format!("Generate a compelling, SEO-friendly title for a blog post about \"{topic}\".")
}

pub fn excerpt(topic: &str) -> String {
    format!("Write a brief, engaging excerpt (2-3 sentences) for a blog post about \"{topic}\".")
}

pub fn seo_metadata(topic: &str) -> String {
    format!(
        "Generate SEO metadata for a blog post about \"{topic}\".\n\
         Description: <meta description, at most 160 characters>\n\
         Keywords: <comma-separated list of 5-8 keywords>"
    )
}

pub fn improve_seo(content: &str, target_keywords: &[String]) -> String {
    format!(
        "Improve the SEO of the following blog content for these target keywords: {}.\n\
         Keep the meaning and tone, improve headings, keyword placement and readability, \
         and return the optimized content only.\n\n{content}",
        target_keywords.join(", ")
    )
}

pub fn twitter(title: &str, excerpt: &str) -> String {
    format!(
        "Write an engaging Twitter post (max 280 characters) promoting this blog post. \
         Include relevant hashtags.\nTitle: {title}\nExcerpt: {excerpt}"
    )
}

pub fn facebook(title: &str, excerpt: &str) -> String {
    format!(
        "Write an engaging Facebook post promoting this blog post. Make it conversational \
         and end with a call to action.\nTitle: {title}\nExcerpt: {excerpt}"
    )
}

pub fn linkedin(title: &str, excerpt: &str) -> String {
    format!(
        "Write a professional LinkedIn post promoting this blog post. Highlight the key \
         takeaways for a professional audience.\nTitle: {title}\nExcerpt: {excerpt}"
    )
}
