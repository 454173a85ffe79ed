// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tribune_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use tribune_core::domain::errors::{DomainError, DomainResult};

/* -------------------------------- 記事リポジトリ (読み書き) -------------------------------- */

/// メモリ上で記事を保持するリポジトリ。読み取りと書き込みの両方を実装する。
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let next_id = articles.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(next_id)?,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            status: article.status,
            featured_image: article.featured_image,
            video_path: article.video_path,
            tags: article.tags,
            category_ids: article.category_ids,
            publish_platforms: article.publish_platforms,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let existing = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if existing.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        existing.title = update.title;
        existing.slug = update.slug;
        existing.excerpt = update.excerpt;
        existing.content = update.content;
        existing.status = update.status;
        existing.featured_image = update.featured_image;
        existing.video_path = update.video_path;
        existing.tags = update.tags;
        existing.category_ids = update.category_ids;
        existing.publish_platforms = update.publish_platforms;
        existing.published_at = update.published_at;
        existing.updated_at = update.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug)
            .cloned())
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(articles
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: ArticleFilter) -> DomainResult<u64> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().filter(|a| filter.matches(a)).count() as u64)
    }
}

/* -------------------------------- 古い読み取り (競合再現用) -------------------------------- */

/// `find_by_id` が 1 分前の `updated_at` を返す読み取りリポジトリ。
/// 読み取り後に別の書き込みが入った状況を再現する。
pub struct StaleReadRepo {
    inner: Arc<InMemoryArticleRepo>,
}

impl StaleReadRepo {
    pub fn new(inner: Arc<InMemoryArticleRepo>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ArticleReadRepository for StaleReadRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.find_by_id(id).await?.map(|mut article| {
            article.updated_at -= chrono::Duration::minutes(1);
            article
        }))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.inner.find_by_slug(slug).await
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        self.inner.list(filter, offset, limit).await
    }

    async fn count(&self, filter: ArticleFilter) -> DomainResult<u64> {
        self.inner.count(filter).await
    }
}
