// src/infrastructure/publishers/local.rs
use crate::{
    application::ports::publisher::Publisher,
    domain::publishing::{Platform, PublishContent, PublishResult},
};
use async_trait::async_trait;

/// The site itself. Persisting the article is the caller's job, so this
/// only reports where the article lives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPublisher;

impl LocalPublisher {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Publisher for LocalPublisher {
    fn platform(&self) -> Platform {
        Platform::Local
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn publish(&self, content: &PublishContent) -> PublishResult {
        PublishResult::success(format!("/articles/{}", content.slug), "local")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_the_public_article_path() {
        let content = PublishContent {
            slug: "hello-world".into(),
            ..PublishContent::default()
        };
        let result = LocalPublisher::new().publish(&content).await;
        assert!(result.success);
        assert_eq!(result.url.as_deref(), Some("/articles/hello-world"));
        assert_eq!(result.platform_id.as_deref(), Some("local"));
    }
}
