// src/infrastructure/publishers/twitter.rs
use super::{
    error::{PublishError, ensure_success},
    media,
    multipart::MultipartBody,
    oauth1::{self, OAuth1Keys},
};
use crate::{
    application::ports::{HttpTransportPort, http::HttpRequest, publisher::Publisher},
    config::TwitterCredentials,
    domain::publishing::{Platform, PublishContent, PublishResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};

pub const TWITTER_MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";
pub const TWITTER_TWEETS_URL: &str = "https://api.twitter.com/2/tweets";

const MAX_MEDIA_PER_TWEET: usize = 4;

#[derive(Debug, Clone)]
pub struct TwitterEndpoints {
    pub media_upload_url: String,
    pub tweets_url: String,
}

impl Default for TwitterEndpoints {
    fn default() -> Self {
        Self {
            media_upload_url: TWITTER_MEDIA_UPLOAD_URL.to_string(),
            tweets_url: TWITTER_TWEETS_URL.to_string(),
        }
    }
}

/// Announces the article as a tweet, with the featured image attached when
/// it is a local file.
pub struct TwitterPublisher {
    transport: Arc<HttpTransportPort>,
    credentials: TwitterCredentials,
    endpoints: TwitterEndpoints,
    uploads_root: PathBuf,
}

#[derive(Deserialize)]
struct UploadedMedia {
    media_id_string: String,
}

#[derive(Serialize)]
struct TweetPayload {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<TweetMedia>,
}

#[derive(Serialize)]
struct TweetMedia {
    media_ids: Vec<String>,
}

#[derive(Deserialize)]
struct CreatedTweet {
    data: TweetData,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

impl TwitterPublisher {
    pub fn new(
        transport: Arc<HttpTransportPort>,
        credentials: TwitterCredentials,
        uploads_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transport,
            credentials,
            endpoints: TwitterEndpoints::default(),
            uploads_root: uploads_root.into(),
        }
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: TwitterEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// OAuth 1.0a user context when the access token secret is configured,
    /// otherwise the access token is sent as a bearer token.
    fn authorization(&self, access_token: &str, url: &str) -> Result<String, PublishError> {
        let TwitterCredentials {
            api_key: Some(consumer_key),
            api_secret: Some(consumer_secret),
            access_secret: Some(token_secret),
            ..
        } = &self.credentials
        else {
            return Ok(format!("Bearer {access_token}"));
        };

        let keys = OAuth1Keys {
            consumer_key,
            consumer_secret,
            token: access_token,
            token_secret,
        };
        oauth1::authorization_header(keys, "POST", url, &[])
    }

    async fn try_publish(
        &self,
        access_token: &str,
        content: &PublishContent,
    ) -> Result<PublishResult, PublishError> {
        let mut media_ids = Vec::new();
        if let Some(path) = content.featured_image.as_ref().and_then(|image| image.as_path()) {
            media_ids.push(self.upload_media(access_token, path).await?);
        }
        media_ids.truncate(MAX_MEDIA_PER_TWEET);

        let payload = TweetPayload {
            text: tweet_text(content),
            media: (!media_ids.is_empty()).then_some(TweetMedia { media_ids }),
        };
        let url = &self.endpoints.tweets_url;
        let request = HttpRequest::post(url)
            .header("Authorization", self.authorization(access_token, url)?)
            .json(&payload)?;
        let response = self.transport.send(request).await?;
        let response = ensure_success(response, || "Twitter API error".to_string())?;

        let tweet: CreatedTweet = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid tweet response: {err}")))?;
        let id = tweet.data.id;
        Ok(PublishResult::success(
            format!("https://twitter.com/user/status/{id}"),
            id,
        ))
    }

    async fn upload_media(&self, access_token: &str, path: &str) -> Result<String, PublishError> {
        let file = media::read_image(&self.uploads_root, path).await?;
        let (content_type, body) = MultipartBody::new()
            .file_field("media", &file.file_name, file.mime_type, &file.data)
            .finish("form-data");

        tracing::debug!(file = %file.file_name, "uploading media to Twitter");
        let url = &self.endpoints.media_upload_url;
        let request = HttpRequest::post(url)
            .header("Authorization", self.authorization(access_token, url)?)
            .bytes(content_type, body);
        let response = self.transport.send(request).await?;
        let response = ensure_success(response, || "Twitter media upload failed".to_string())?;
        let uploaded: UploadedMedia = response
            .json()
            .map_err(|err| PublishError::unexpected(format!("invalid media upload response: {err}")))?;
        Ok(uploaded.media_id_string)
    }
}

pub fn tweet_text(content: &PublishContent) -> String {
    format!("{}\n\n{}", content.title, content.excerpt)
}

#[async_trait]
impl Publisher for TwitterPublisher {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    fn is_enabled(&self) -> bool {
        self.credentials.is_complete()
    }

    async fn publish(&self, content: &PublishContent) -> PublishResult {
        let access_token = match &self.credentials.access_token {
            Some(token) if self.is_enabled() => token,
            _ => return PublishResult::failure("Twitter credentials not configured"),
        };

        match self.try_publish(access_token, content).await {
            Ok(result) => {
                tracing::info!(platform = "twitter", url = ?result.url, "tweet published");
                result
            }
            Err(err) => {
                tracing::warn!(platform = "twitter", error = %err, "Twitter publish failed");
                PublishResult::failure(err.to_string())
            }
        }
    }
}
