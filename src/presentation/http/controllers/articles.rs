// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand, UpdateArticleCommand,
    },
    dto::{
        ArticleDto, ArticlePageDto, ArticleWithPublishResults, PublishDestinationDto,
        PublishResponse,
    },
    error::ApplicationError,
    queries::articles::{
        DEFAULT_PAGE_SIZE, GetArticleByIdQuery, GetArticleBySlugQuery,
        ListArticlesByCategoryQuery, ListArticlesQuery,
    },
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_page() -> u32 {
    1
}

const fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// `DRAFT`, `PUBLISHED` or `ARCHIVED`. Takes precedence over `include_unpublished`.
    #[serde(default)]
    pub status: Option<String>,
    /// Also return drafts and archived articles.
    #[serde(default)]
    pub include_unpublished: bool,
    /// 1-based.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Clamped to 1..=100.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    /// `DRAFT` (default), `PUBLISHED` or `ARCHIVED`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<i64>,
    /// Platform names selected in the editor, e.g. `["local", "wordpress"]`.
    #[serde(default)]
    pub publish_platforms: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<i64>>,
    pub publish_platforms: Option<Vec<String>>,
    /// Empty string removes the image.
    pub featured_image: Option<String>,
    /// Empty string removes the video.
    pub video_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishArticleRequest {
    pub destinations: Vec<PublishDestinationDto>,
}

fn parse_status(raw: Option<String>) -> HttpResult<Option<ArticleStatus>> {
    raw.map(|value| value.parse::<ArticleStatus>())
        .transpose()
        .map_err(ApplicationError::from)
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Newest articles first.", body = ArticlePageDto),
        (status = 400, description = "Unknown status.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    let query = ListArticlesQuery {
        status: parse_status(params.status)?,
        include_unpublished: params.include_unpublished,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-category/{id}",
    params(("id" = i64, Path, description = "Category identifier"), PageParams),
    responses(
        (status = 200, description = "Published articles in the category, newest first.", body = ArticlePageDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_articles_by_category(ListArticlesByCategoryQuery {
            category_id: id,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Public article slug")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, description = "Unknown or unpublished article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article stored; `results` is set when it was distributed.", body = ArticleWithPublishResults),
        (status = 400, body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleWithPublishResults>> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        status: parse_status(payload.status)?.unwrap_or_default(),
        tags: payload.tags,
        categories: payload.categories,
        publish_platforms: payload.publish_platforms,
        featured_image: payload.featured_image,
        video_url: payload.video_url,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, body = ArticleWithPublishResults),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleWithPublishResults>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        status: parse_status(payload.status)?,
        tags: payload.tags,
        categories: payload.categories,
        publish_platforms: payload.publish_platforms,
        featured_image: payload.featured_image,
        video_url: payload.video_url,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = PublishArticleRequest,
    responses(
        (status = 200, description = "Per-platform outcomes.", body = PublishResponse),
        (status = 400, description = "Article is not published.", body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishArticleRequest>,
) -> HttpResult<Json<PublishResponse>> {
    let command = PublishArticleCommand {
        id,
        destinations: payload.destinations.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .article_commands
        .publish_article(command)
        .await
        .into_http()
        .map(|results| Json(results.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article removed locally.", body = StatusResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
