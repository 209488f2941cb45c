//! Core types

pub mod content;
pub mod params;

pub use content::{
    BlogPostDraft, ContentKind, GenerationRequest, SeoImprovement, SeoMetadata, SocialPostSet,
    Tone,
};
pub use params::GenerationParams;
