// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, publishing::PublishingService},
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService,
        },
        category::CategoryRepository,
        publishing::PublishResults,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) publishing: Arc<PublishingService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<ArticleSlugService>,
        publishing: Arc<PublishingService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            publishing,
            clock,
        }
    }

    /// Runs the fan-out for a freshly committed article when it is published
    /// and an external platform is selected. The stored article is never
    /// touched afterwards, whatever the platforms answer.
    pub(super) async fn publish_after_write(&self, article: &Article) -> Option<PublishResults> {
        if !article.wants_external_publishing() {
            return None;
        }

        tracing::info!(
            article_id = %article.id,
            platforms = ?article.publish_platforms,
            "article committed, publishing to selected platforms"
        );
        let results = self
            .publishing
            .publish(article.to_publish_content(), &article.publish_destinations())
            .await;
        Some(results)
    }
}
