// src/infrastructure/publishers/wordpress.rs
use super::{
    error::{PublishError, ensure_success},
    media,
    slug::taxonomy_slug,
};
use crate::{
    application::ports::{
        HttpTransportPort,
        http::{HttpRequest, HttpResponse},
        publisher::Publisher,
    },
    config::WordPressCredentials,
    domain::{
        category::{CategoryId, CategoryRepository},
        publishing::{FeaturedImage, Platform, PublishContent, PublishResult},
    },
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{path::PathBuf, sync::Arc};

/// Publishes posts through the WordPress REST API (`/wp-json/wp/v2`).
pub struct WordPressPublisher {
    transport: Arc<HttpTransportPort>,
    categories: Arc<dyn CategoryRepository>,
    connection: Option<Connection>,
    uploads_root: PathBuf,
}

struct Connection {
    base_url: String,
    authorization: String,
}

#[derive(Debug, Clone, Copy)]
enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    const fn endpoint(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Tag => "tags",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Term {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: u64,
    link: String,
}

#[derive(Debug, Serialize)]
struct PostPayload<'a> {
    title: &'a str,
    content: &'a str,
    excerpt: &'a str,
    status: &'static str,
    categories: Vec<u64>,
    tags: Vec<u64>,
    slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured_media: Option<u64>,
}

impl WordPressPublisher {
    pub fn new(
        transport: Arc<HttpTransportPort>,
        categories: Arc<dyn CategoryRepository>,
        credentials: &WordPressCredentials,
        uploads_root: impl Into<PathBuf>,
    ) -> Self {
        let connection = match (
            &credentials.api_url,
            &credentials.username,
            &credentials.application_password,
        ) {
            (Some(url), Some(user), Some(password)) => Some(Connection {
                base_url: url.trim_end_matches('/').to_string(),
                authorization: format!("Basic {}", STANDARD.encode(format!("{user}:{password}"))),
            }),
            _ => None,
        };

        Self {
            transport,
            categories,
            connection,
            uploads_root: uploads_root.into(),
        }
    }

    async fn try_publish(
        &self,
        connection: &Connection,
        content: &PublishContent,
    ) -> Result<PublishResult, PublishError> {
        if content.slug.trim().is_empty() {
            return Err(PublishError::validation("WordPress publish requires a slug"));
        }

        let category_ids = self.resolve_categories(connection, &content.categories).await?;
        let tag_ids = self.resolve_tags(connection, &content.tags).await?;

        let featured_media = match &content.featured_image {
            Some(FeaturedImage::MediaId(id)) => Some(*id),
            Some(image @ FeaturedImage::Path(_)) => match image.as_path() {
                Some(path) => Some(self.upload_media(connection, path).await?),
                None => None,
            },
            None => None,
        };

        let payload = PostPayload {
            title: &content.title,
            content: &content.content,
            excerpt: &content.excerpt,
            status: "publish",
            categories: category_ids,
            tags: tag_ids,
            slug: &content.slug,
            featured_media,
        };
        let request = connection.request(HttpRequest::post(connection.url("posts"))).json(&payload)?;
        let response = self.send(request).await?;
        let response = ensure_success(response, || "WordPress API error".to_string())?;

        let post: CreatedPost = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid WordPress post response: {err}")))?;
        Ok(PublishResult::success(post.link, post.id.to_string()))
    }

    async fn resolve_categories(
        &self,
        connection: &Connection,
        raw_ids: &[String],
    ) -> Result<Vec<u64>, PublishError> {
        if raw_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = raw_ids
            .iter()
            .map(|raw| raw.parse::<CategoryId>())
            .collect::<Result<Vec<_>, _>>()?;
        let names = self.categories.find_names_by_ids(&ids).await?;

        let mut resolved = Vec::with_capacity(names.len());
        for name in &names {
            resolved.push(self.lookup_or_create(connection, Taxonomy::Category, name).await?);
        }
        Ok(resolved)
    }

    async fn resolve_tags(
        &self,
        connection: &Connection,
        tags: &[String],
    ) -> Result<Vec<u64>, PublishError> {
        let mut resolved = Vec::new();
        for name in split_tags(tags) {
            resolved.push(self.lookup_or_create(connection, Taxonomy::Tag, &name).await?);
        }
        Ok(resolved)
    }

    /// Finds the term by slug and creates it when WordPress does not know it yet.
    async fn lookup_or_create(
        &self,
        connection: &Connection,
        taxonomy: Taxonomy,
        name: &str,
    ) -> Result<u64, PublishError> {
        let slug = taxonomy_slug(name);
        let endpoint = taxonomy.endpoint();

        // a name made only of unsupported characters has no slug to look up;
        // WordPress derives one on creation
        if !slug.is_empty() {
            let request = connection.request(HttpRequest::get(format!(
                "{}?slug={slug}",
                connection.url(endpoint)
            )));
            let response = self.send(request).await?;
            let response = ensure_success(response, || {
                format!("failed to look up {} '{name}'", taxonomy.label())
            })?;
            let existing: Vec<Term> = response.json().map_err(|err| {
                PublishError::unexpected(format!("invalid {} lookup response: {err}", taxonomy.label()))
            })?;
            if let Some(term) = existing.first() {
                return Ok(term.id);
            }
        }

        let body = if slug.is_empty() {
            json!({ "name": name })
        } else {
            json!({ "name": name, "slug": slug })
        };
        let request = connection.request(HttpRequest::post(connection.url(endpoint))).json(&body)?;
        let response = self.send(request).await?;
        let response = ensure_success(response, || {
            format!("failed to create {} '{name}'", taxonomy.label())
        })?;
        let created: Term = response.json().map_err(|err| {
            PublishError::unexpected(format!("invalid {} creation response: {err}", taxonomy.label()))
        })?;
        tracing::debug!(taxonomy = taxonomy.label(), name, id = created.id, "created WordPress term");
        Ok(created.id)
    }

    async fn upload_media(&self, connection: &Connection, path: &str) -> Result<u64, PublishError> {
        let file = media::read_image(&self.uploads_root, path).await?;
        let request = connection
            .request(HttpRequest::post(connection.url("media")))
            .header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", file.file_name),
            )
            .bytes(file.mime_type, file.data);
        let response = self.send(request).await?;
        let response = ensure_success(response, || "failed to upload image to WordPress".to_string())?;
        let uploaded: Term = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid WordPress media response: {err}")))?;
        Ok(uploaded.id)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, PublishError> {
        tracing::debug!(method = %request.method, url = %request.url, "calling WordPress");
        Ok(self.transport.send(request).await?)
    }
}

impl Connection {
    fn url(&self, endpoint: &str) -> String {
        format!("{}/wp-json/wp/v2/{endpoint}", self.base_url)
    }

    fn request(&self, request: HttpRequest) -> HttpRequest {
        request.header("Authorization", self.authorization.clone())
    }
}

/// Splits comma-joined tag strings, trimming and dropping blanks.
pub fn split_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl Publisher for WordPressPublisher {
    fn platform(&self) -> Platform {
        Platform::WordPress
    }

    fn is_enabled(&self) -> bool {
        self.connection.is_some()
    }

    async fn publish(&self, content: &PublishContent) -> PublishResult {
        let Some(connection) = &self.connection else {
            return PublishResult::failure("WordPress credentials not configured");
        };

        match self.try_publish(connection, content).await {
            Ok(result) => {
                tracing::info!(platform = "wordpress", url = ?result.url, "post published");
                result
            }
            Err(err) => {
                tracing::warn!(platform = "wordpress", error = %err, "WordPress publish failed");
                PublishResult::failure(err.to_string())
            }
        }
    }
}
