//! # draftsmith
//!
//! Blog content drafting on top of large-language-model HTTP APIs.
//!
//! A [`ContentClient`] sends every request to an OpenAI-compatible
//! chat-completion endpoint first and falls back to Google Gemini when that
//! call fails. On top of single generations it composes full blog drafts,
//! SEO rewrites and social media snippets.
//!
//! ```rust,no_run
//! use draftsmith::prelude::*;
//!
//! # async fn example() -> Result<(), LlmError> {
//! let client = ContentClient::new(ContentConfig::new("sk-...", "AIza..."))?;
//!
//! let keywords = vec!["ownership".to_string(), "borrowing".to_string()];
//! let draft = client
//!     .generate_blog_post("Rust memory safety", Some(&keywords), Tone::Technical)
//!     .await?;
//! println!("{}\n\n{}", draft.title, draft.content);
//!
//! let social = client
//!     .generate_social_media_posts(&draft.title, &draft.excerpt)
//!     .await?;
//! println!("{}", social.twitter);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executors;
pub mod fallback;
pub mod observability;
pub mod prompts;
pub mod providers;
pub mod seo;
pub mod types;
pub mod utils;

pub use client::{ContentClient, ContentClientBuilder};
pub use config::ContentConfig;
pub use error::{LlmError, ProviderFailure, Result};
pub use fallback::ProviderChain;
pub use providers::GenerationProvider;

/// Commonly used types
pub mod prelude {
    pub use crate::client::{ContentClient, ContentClientBuilder};
    pub use crate::config::ContentConfig;
    pub use crate::error::LlmError;
    pub use crate::fallback::ProviderChain;
    pub use crate::providers::{
        GeminiConfig, GeminiProvider, GenerationProvider, OpenAiConfig, OpenAiProvider,
    };
    pub use crate::types::{
        BlogPostDraft, ContentKind, GenerationParams, GenerationRequest, SeoImprovement,
        SeoMetadata, SocialPostSet, Tone,
    };
    pub use crate::utils::http_interceptor::{
        HttpInterceptor, HttpRequestContext, LoggingInterceptor,
    };
}
