use crate::application::publishing::PublisherAvailability;
use crate::domain::publishing::{
    FeaturedImage, PublishContent, PublishDestination, PublishResult, PublishResults,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Featured image as sent by the editor: a remote media id or a local path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FeaturedImageDto {
    MediaId(u64),
    Path(String),
}

impl From<FeaturedImageDto> for FeaturedImage {
    fn from(value: FeaturedImageDto) -> Self {
        match value {
            FeaturedImageDto::MediaId(id) => Self::MediaId(id),
            FeaturedImageDto::Path(path) => Self::Path(path),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishContentDto {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub featured_image: Option<FeaturedImageDto>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl From<PublishContentDto> for PublishContent {
    fn from(dto: PublishContentDto) -> Self {
        Self {
            title: dto.title,
            excerpt: dto.excerpt,
            content: dto.content,
            slug: dto.slug,
            featured_image: dto.featured_image.map(Into::into),
            tags: dto.tags,
            categories: dto.categories,
            video_path: dto.video_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishDestinationDto {
    pub platform: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl From<PublishDestinationDto> for PublishDestination {
    fn from(dto: PublishDestinationDto) -> Self {
        Self::new(dto.platform, dto.enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishResultDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<PublishResult> for PublishResultDto {
    fn from(result: PublishResult) -> Self {
        Self {
            success: result.success,
            url: result.url,
            platform_id: result.platform_id,
            error: result.error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishResponse {
    pub results: BTreeMap<String, PublishResultDto>,
}

impl From<PublishResults> for PublishResponse {
    fn from(results: PublishResults) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(platform, result)| (platform, result.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublisherAvailabilityDto {
    pub platform: String,
    pub enabled: bool,
}

impl From<PublisherAvailability> for PublisherAvailabilityDto {
    fn from(value: PublisherAvailability) -> Self {
        Self {
            platform: value.platform.as_str().to_string(),
            enabled: value.enabled,
        }
    }
}
