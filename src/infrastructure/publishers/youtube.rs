// src/infrastructure/publishers/youtube.rs
use super::{
    error::{PublishError, ensure_success},
    media,
    multipart::MultipartBody,
};
use crate::{
    application::ports::{HttpTransportPort, http::HttpRequest, publisher::Publisher},
    config::YouTubeCredentials,
    domain::publishing::{Platform, PublishContent, PublishResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{path::PathBuf, sync::Arc};

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const YOUTUBE_UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/youtube/v3/videos?uploadType=multipart&part=snippet,status";

#[derive(Debug, Clone)]
pub struct YouTubeEndpoints {
    pub token_url: String,
    pub upload_url: String,
}

impl Default for YouTubeEndpoints {
    fn default() -> Self {
        Self {
            token_url: GOOGLE_TOKEN_URL.to_string(),
            upload_url: YOUTUBE_UPLOAD_URL.to_string(),
        }
    }
}

/// Uploads the article's video with the YouTube Data API v3.
pub struct YouTubePublisher {
    transport: Arc<HttpTransportPort>,
    credentials: YouTubeCredentials,
    endpoints: YouTubeEndpoints,
    uploads_root: PathBuf,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'static str,
}

#[derive(Deserialize)]
struct AccessToken {
    access_token: String,
}

#[derive(Deserialize)]
struct InsertedVideo {
    id: Option<String>,
}

impl YouTubePublisher {
    pub fn new(
        transport: Arc<HttpTransportPort>,
        credentials: YouTubeCredentials,
        uploads_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transport,
            credentials,
            endpoints: YouTubeEndpoints::default(),
            uploads_root: uploads_root.into(),
        }
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: YouTubeEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    async fn try_publish(&self, content: &PublishContent) -> Result<PublishResult, PublishError> {
        let video_path = content
            .video_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| PublishError::validation("No video path provided"))?;
        let refresh_token = self
            .credentials
            .refresh_token
            .as_deref()
            .ok_or_else(|| PublishError::validation("YouTube refresh token not configured"))?;

        let video = media::read_video(&self.uploads_root, video_path).await?;
        let access_token = self.access_token(refresh_token).await?;

        let metadata = json!({
            "snippet": {
                "title": content.title,
                "description": content.excerpt,
                "tags": content.tags,
            },
            "status": { "privacyStatus": "public" },
        });
        let metadata = serde_json::to_vec(&metadata)
            .map_err(|err| PublishError::unexpected(format!("failed to encode video metadata: {err}")))?;
        let (content_type, body) = MultipartBody::new()
            .related_part("application/json; charset=UTF-8", &metadata)
            .related_part(video.mime_type, &video.data)
            .finish("related");

        tracing::debug!(file = %video.file_name, bytes = video.data.len(), "uploading video to YouTube");
        let request = HttpRequest::post(&self.endpoints.upload_url)
            .header("Authorization", format!("Bearer {access_token}"))
            .bytes(content_type, body);
        let response = self.transport.send(request).await?;
        let response = ensure_success(response, || "YouTube upload failed".to_string())?;

        let inserted: InsertedVideo = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid YouTube response: {err}")))?;
        let id = inserted
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PublishError::unexpected("No video ID returned by YouTube"))?;

        Ok(PublishResult::success(format!("https://youtube.com/watch?v={id}"), id))
    }

    async fn access_token(&self, refresh_token: &str) -> Result<String, PublishError> {
        let (Some(client_id), Some(client_secret)) =
            (&self.credentials.client_id, &self.credentials.client_secret)
        else {
            return Err(PublishError::validation("YouTube credentials not configured"));
        };

        let form = serde_urlencoded::to_string(RefreshGrant {
            client_id,
            client_secret,
            refresh_token,
            grant_type: "refresh_token",
        })
        .map_err(|err| PublishError::unexpected(format!("failed to encode token request: {err}")))?;

        let request = HttpRequest::post(&self.endpoints.token_url)
            .bytes("application/x-www-form-urlencoded", form);
        let response = self.transport.send(request).await?;
        let response = ensure_success(response, || "YouTube token refresh failed".to_string())?;
        let token: AccessToken = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid token response: {err}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl Publisher for YouTubePublisher {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn is_enabled(&self) -> bool {
        self.credentials.is_complete()
    }

    async fn publish(&self, content: &PublishContent) -> PublishResult {
        if !self.is_enabled() {
            return PublishResult::failure("YouTube credentials not configured");
        }

        match self.try_publish(content).await {
            Ok(result) => {
                tracing::info!(platform = "youtube", url = ?result.url, "video published");
                result
            }
            Err(err) => {
                tracing::warn!(platform = "youtube", error = %err, "YouTube publish failed");
                PublishResult::failure(err.to_string())
            }
        }
    }
}
