// src/presentation/http/controllers/publishing.rs
use crate::application::dto::{
    PublishContentDto, PublishDestinationDto, PublishResponse, PublisherAvailabilityDto,
};
use crate::domain::publishing::PublishDestination;
use crate::presentation::http::error::ErrorResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub content: PublishContentDto,
    #[serde(default)]
    pub destinations: Vec<PublishDestinationDto>,
}

/// Platforms known to the server and whether their credentials are configured.
#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    responses(
        (status = 200, body = [PublisherAvailabilityDto])
    ),
    tag = "Publishing"
)]
pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> Json<Vec<PublisherAvailabilityDto>> {
    let publishers = state
        .services
        .publishing()
        .available_publishers()
        .into_iter()
        .map(Into::into)
        .collect();
    Json(publishers)
}

/// Distributes ad-hoc content. Always answers 200; failures are reported per platform.
#[utoipa::path(
    post,
    path = "/api/v1/publish",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Per-platform outcomes, `local` included.", body = PublishResponse),
        (status = 422, description = "Malformed body.", body = ErrorResponse)
    ),
    tag = "Publishing"
)]
pub async fn publish(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PublishRequest>,
) -> Json<PublishResponse> {
    let destinations: Vec<PublishDestination> =
        payload.destinations.into_iter().map(Into::into).collect();
    let results = state
        .services
        .publishing()
        .publish(payload.content.into(), &destinations)
        .await;
    Json(results.into())
}
