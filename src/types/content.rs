//! Content request and draft types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LlmError;

/// Purpose of a generation call; selects the system prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Full blog post body
    Post,
    /// Post title
    Title,
    /// Short summary / excerpt
    Summary,
    /// SEO metadata or SEO rewrite
    Seo,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [Self::Post, Self::Title, Self::Summary, Self::Seo];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Seo => "seo",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing tone for a full post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Technical,
}

impl Tone {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Technical => "technical",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "technical" => Ok(Self::Technical),
            other => Err(LlmError::InvalidParameter(format!(
                "unknown tone '{other}', expected professional, casual or technical"
            ))),
        }
    }
}

/// A single generation call: user prompt plus its content kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub kind: ContentKind,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            prompt: prompt.into(),
            kind,
        }
    }
}

/// SEO metadata attached to a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Result of a full blog post generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub seo: SeoMetadata,
}

/// Platform variants of one excerpt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPostSet {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Output of an SEO rewrite request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoImprovement {
    pub optimized_content: String,
    pub suggestions: Vec<String>,
}
