// src/application/ports/publisher.rs
use crate::domain::publishing::{Platform, PublishContent, PublishResult};
use async_trait::async_trait;

/// Delivery of content to one platform.
///
/// Implementations never fail outright: every problem, from missing fields
/// to remote errors, comes back as a failed [`PublishResult`].
#[async_trait]
pub trait Publisher: Send + Sync {
    fn platform(&self) -> Platform;

    /// Whether the credentials this platform needs are present.
    fn is_enabled(&self) -> bool;

    /// Single best-effort attempt; no retries.
    async fn publish(&self, content: &PublishContent) -> PublishResult;
}
