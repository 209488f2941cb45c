//! Content generation client
//!
//! [`ContentClient`] turns topics into drafts. Every underlying call goes
//! through the [`ProviderChain`], so each one is independently protected by
//! the primary/secondary fallback. Composed operations run their calls
//! concurrently on the current task and fail as soon as any call fails.

use futures::try_join;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};

use crate::config::ContentConfig;
use crate::error::LlmError;
use crate::fallback::ProviderChain;
use crate::prompts;
use crate::providers::{GeminiProvider, GenerationProvider, OpenAiProvider};
use crate::seo::{meta_title, parse_seo_blob};
use crate::types::{
    BlogPostDraft, ContentKind, GenerationRequest, SeoImprovement, SeoMetadata, SocialPostSet,
    Tone,
};
use crate::utils::http_interceptor::HttpInterceptor;
use crate::utils::text::{strip_quotes, truncate_chars};

/// Longest Twitter variant returned by [`ContentClient::generate_social_media_posts`].
pub const TWITTER_MAX_CHARS: usize = 280;

/// Fixed advice returned with every SEO rewrite.
pub const SEO_SUGGESTIONS: [&str; 4] = [
    "Add internal links to related posts",
    "Include target keywords in headings",
    "Optimize images with descriptive alt text",
    "Keep paragraphs short and scannable",
];

/// Drafts blog content through an ordered provider chain.
#[derive(Debug, Clone)]
pub struct ContentClient {
    chain: ProviderChain,
}

impl ContentClient {
    /// Build the standard chain: chat-completion primary, Gemini secondary.
    pub fn new(config: ContentConfig) -> Result<Self, LlmError> {
        Self::builder(config).build()
    }

    /// Build from `OPENAI_API_KEY`, `GEMINI_API_KEY` and friends.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(ContentConfig::from_env()?)
    }

    pub fn builder(config: ContentConfig) -> ContentClientBuilder {
        ContentClientBuilder::new(config)
    }

    /// Use an arbitrary provider chain.
    pub fn with_chain(chain: ProviderChain) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Generate text for `prompt`, falling back to the next provider on failure.
    pub async fn generate(&self, prompt: &str, kind: ContentKind) -> Result<String, LlmError> {
        self.chain
            .generate(&GenerationRequest::new(prompt, kind))
            .await
    }

    /// Draft a full post: title, body, excerpt and SEO metadata.
    ///
    /// The four generation calls run concurrently; the first failure aborts
    /// the draft.
    pub async fn generate_blog_post(
        &self,
        topic: &str,
        keywords: Option<&[String]>,
        tone: Tone,
    ) -> Result<BlogPostDraft, LlmError> {
        let keywords = keywords.unwrap_or(&[]);
        let span = info_span!(
            "generate_blog_post",
            request_id = %uuid::Uuid::new_v4(),
            %tone,
            keywords = keywords.len()
        );

        async move {
            let post_prompt = prompts::blog_post(topic, keywords, tone);
            let title_prompt = prompts::title(topic);
            let excerpt_prompt = prompts::excerpt(topic);
            let seo_prompt = prompts::seo_metadata(topic);

            let (raw_title, content, excerpt, seo_blob) = try_join!(
                self.generate(&title_prompt, ContentKind::Title),
                self.generate(&post_prompt, ContentKind::Post),
                self.generate(&excerpt_prompt, ContentKind::Summary),
                self.generate(&seo_prompt, ContentKind::Seo),
            )?;

            let title = strip_quotes(&raw_title);
            let excerpt = excerpt.trim().to_string();
            let parsed = parse_seo_blob(&seo_blob, &excerpt, keywords);
            info!(
                title_chars = title.chars().count(),
                content_chars = content.chars().count(),
                keywords = parsed.keywords.len(),
                "blog post drafted"
            );

            Ok::<_, LlmError>(BlogPostDraft {
                seo: SeoMetadata {
                    meta_title: meta_title(&title),
                    meta_description: parsed.meta_description,
                    keywords: parsed.keywords,
                },
                title,
                content,
                excerpt,
            })
        }
        .instrument(span)
        .await
    }

    /// Rewrite `content` for `target_keywords`.
    ///
    /// The suggestions are always [`SEO_SUGGESTIONS`]; they are not derived
    /// from the content or the model response.
    pub async fn improve_seo(
        &self,
        content: &str,
        target_keywords: &[String],
    ) -> Result<SeoImprovement, LlmError> {
        let prompt = prompts::improve_seo(content, target_keywords);
        let optimized_content = self
            .generate(&prompt, ContentKind::Seo)
            .instrument(info_span!("improve_seo", keywords = target_keywords.len()))
            .await?;

        Ok(SeoImprovement {
            optimized_content,
            suggestions: SEO_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Draft Twitter, Facebook and LinkedIn posts for one article.
    ///
    /// The Twitter variant is cut to 280 characters; the others are returned
    /// as generated. Any failed call fails the whole set.
    pub async fn generate_social_media_posts(
        &self,
        title: &str,
        excerpt: &str,
    ) -> Result<SocialPostSet, LlmError> {
        let twitter_prompt = prompts::twitter(title, excerpt);
        let facebook_prompt = prompts::facebook(title, excerpt);
        let linkedin_prompt = prompts::linkedin(title, excerpt);

        let (twitter, facebook, linkedin) = async {
            try_join!(
                self.generate(&twitter_prompt, ContentKind::Summary),
                self.generate(&facebook_prompt, ContentKind::Summary),
                self.generate(&linkedin_prompt, ContentKind::Summary),
            )
        }
        .instrument(info_span!("generate_social_media_posts"))
        .await?;

        Ok(SocialPostSet {
            twitter: truncate_chars(&twitter, TWITTER_MAX_CHARS),
            facebook,
            linkedin,
        })
    }
}

/// Builder for the standard two-provider client.
pub struct ContentClientBuilder {
    config: ContentConfig,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    extra_providers: Vec<Arc<dyn GenerationProvider>>,
}

impl ContentClientBuilder {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            config,
            interceptors: Vec::new(),
            extra_providers: Vec::new(),
        }
    }

    /// Attach an HTTP interceptor to both providers.
    pub fn interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Append a provider tried after the secondary.
    pub fn fallback_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.extra_providers.push(provider);
        self
    }

    pub fn build(self) -> Result<ContentClient, LlmError> {
        self.config.validate()?;
        let (openai, gemini) = self.config.resolved();

        let primary = OpenAiProvider::new(openai)?.with_interceptors(self.interceptors.clone());
        let secondary = GeminiProvider::new(gemini)?.with_interceptors(self.interceptors);

        let mut chain = ProviderChain::new()
            .with_provider(Arc::new(primary))
            .with_provider(Arc::new(secondary));
        for provider in self.extra_providers {
            chain.push(provider);
        }
        Ok(ContentClient::with_chain(chain))
    }
}
