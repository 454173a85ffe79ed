use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::publishing::PublishResultDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    /// `DRAFT`, `PUBLISHED` or `ARCHIVED`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<i64>,
    pub publish_platforms: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt,
            content: article.content.into_inner(),
            status: article.status.as_str().to_string(),
            featured_image: article.featured_image,
            video_url: article.video_path,
            tags: article.tags,
            categories: article.category_ids.into_iter().map(i64::from).collect(),
            publish_platforms: article
                .publish_platforms
                .into_iter()
                .map(|platform| platform.as_str().to_string())
                .collect(),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Result of an article write. `results` is present only when the write
/// triggered a publish fan-out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleWithPublishResults {
    pub success: bool,
    pub article: ArticleDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<BTreeMap<String, PublishResultDto>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// One page of a listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlePageDto {
    pub articles: Vec<ArticleDto>,
    pub pagination: PaginationDto,
}
