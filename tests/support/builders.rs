// tests/support/builders.rs
use tribune_core::domain::article::*;
use tribune_core::domain::category::CategoryId;
use tribune_core::domain::publishing::{Platform, PublishContent};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    status: ArticleStatus,
    tags: Vec<String>,
    categories: Vec<i64>,
    platforms: Vec<Platform>,
    featured_image: Option<String>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            excerpt: "Short summary".into(),
            content: "<p>Test body</p>".into(),
            status: ArticleStatus::Draft,
            tags: Vec::new(),
            categories: Vec::new(),
            platforms: vec![Platform::Local],
            featured_image: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn categories(mut self, ids: &[i64]) -> Self {
        self.categories = ids.to_vec();
        self
    }

    pub fn platforms(mut self, platforms: &[Platform]) -> Self {
        self.platforms = platforms.to_vec();
        self
    }

    pub fn featured_image(mut self, path: impl Into<String>) -> Self {
        self.featured_image = Some(path.into());
        self
    }

    pub fn build(self) -> Article {
        let published = self.status.is_published();
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            excerpt: self.excerpt,
            content: ArticleContent::new(self.content).unwrap(),
            status: self.status,
            featured_image: self.featured_image,
            video_path: None,
            tags: self.tags,
            category_ids: self
                .categories
                .into_iter()
                .map(|id| CategoryId::new(id).unwrap())
                .collect(),
            publish_platforms: self.platforms,
            published_at: published.then(fixed_now),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// 公開用コンテンツのサンプル
pub fn sample_content(slug: &str) -> PublishContent {
    PublishContent {
        title: "Hello".into(),
        excerpt: "An excerpt".into(),
        content: "<p>Body</p>".into(),
        slug: slug.into(),
        ..PublishContent::default()
    }
}
