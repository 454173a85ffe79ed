use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Restricts a listing; `None` fields match every article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub category: Option<CategoryId>,
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        self.status.is_none_or(|status| article.status == status)
            && self
                .category
                .is_none_or(|category| article.category_ids.contains(&category))
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// `NotFound` when no article has this id.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest first (`created_at`, then id), skipping `offset` matches.
    async fn list(
        &self,
        filter: ArticleFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Article>>;
    async fn count(&self, filter: ArticleFilter) -> DomainResult<u64>;
}
