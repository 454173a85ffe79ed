// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::category::CategoryId;
use crate::domain::publishing::{FeaturedImage, Platform, PublishContent, PublishDestination};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: String,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub featured_image: Option<String>,
    pub video_path: Option<String>,
    pub tags: Vec<String>,
    pub category_ids: Vec<CategoryId>,
    pub publish_platforms: Vec<Platform>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        if status.is_published() && !self.status.is_published() {
            self.published_at = Some(now);
        } else if !status.is_published() {
            self.published_at = None;
        }
        self.status = status;
        self.updated_at = now;
    }

    /// True when the article is live and at least one external platform is selected.
    pub fn wants_external_publishing(&self) -> bool {
        self.status.is_published()
            && self
                .publish_platforms
                .iter()
                .any(|platform| *platform != Platform::Local)
    }

    /// Destinations selected in the editor, all enabled.
    pub fn publish_destinations(&self) -> Vec<PublishDestination> {
        self.publish_platforms
            .iter()
            .map(|platform| PublishDestination::enabled(*platform))
            .collect()
    }

    /// Snapshot handed to every publisher during one fan-out.
    pub fn to_publish_content(&self) -> PublishContent {
        PublishContent {
            title: self.title.as_str().to_string(),
            excerpt: self.excerpt.clone(),
            content: self.content.as_str().to_string(),
            slug: self.slug.as_str().to_string(),
            featured_image: self
                .featured_image
                .as_deref()
                .filter(|path| !path.trim().is_empty())
                .map(|path| FeaturedImage::Path(path.to_string())),
            tags: self.tags.clone(),
            categories: self
                .category_ids
                .iter()
                .map(|id| i64::from(*id).to_string())
                .collect(),
            video_path: self.video_path.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: String,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub featured_image: Option<String>,
    pub video_path: Option<String>,
    pub tags: Vec<String>,
    pub category_ids: Vec<CategoryId>,
    pub publish_platforms: Vec<Platform>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable fields, guarded by `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: String,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub featured_image: Option<String>,
    pub video_path: Option<String>,
    pub tags: Vec<String>,
    pub category_ids: Vec<CategoryId>,
    pub publish_platforms: Vec<Platform>,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn from_article(article: &Article, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            status: article.status,
            featured_image: article.featured_image.clone(),
            video_path: article.video_path.clone(),
            tags: article.tags.clone(),
            category_ids: article.category_ids.clone(),
            publish_platforms: article.publish_platforms.clone(),
            published_at: article.published_at,
            original_updated_at,
            updated_at: article.updated_at,
        }
    }
}
