// src/application/publishing/service.rs
use std::{collections::HashSet, sync::Arc, time::Duration};

use futures::future::join_all;
use tokio::task::{JoinError, JoinHandle};

use super::registry::PublisherRegistry;
use crate::application::ports::publisher::Publisher;
use crate::domain::publishing::{
    Platform, PublishContent, PublishDestination, PublishResult, PublishResults,
    normalize_destinations,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublisherAvailability {
    pub platform: Platform,
    pub enabled: bool,
}

/// Fans one piece of content out to the selected platforms.
///
/// The registry is read-only after construction, so concurrent calls do not
/// share any mutable state.
pub struct PublishingService {
    registry: PublisherRegistry,
    timeout: Option<Duration>,
}

impl PublishingService {
    pub const fn new(registry: PublisherRegistry) -> Self {
        Self {
            registry,
            timeout: None,
        }
    }

    /// Upper bound for a single platform's attempt. `None` waits indefinitely.
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Publishes `content` to every enabled destination, plus local when the
    /// caller did not mention it. Attempts run as independent tasks: a failure,
    /// timeout or panic on one platform only affects that platform's entry.
    ///
    /// Disabled destinations get no entry. A platform named twice is attempted once.
    pub async fn publish(
        &self,
        content: PublishContent,
        destinations: &[PublishDestination],
    ) -> PublishResults {
        let content = Arc::new(content);
        let mut results = PublishResults::new();
        let mut seen = HashSet::new();
        let mut pending: Vec<(String, JoinHandle<PublishResult>)> = Vec::new();

        for destination in normalize_destinations(destinations) {
            if !destination.enabled {
                continue;
            }

            let key = result_key(&destination);
            if !seen.insert(key.clone()) {
                continue;
            }

            match self.resolve(&destination, &key) {
                Ok(publisher) => {
                    let handle = self.dispatch(key.clone(), publisher, Arc::clone(&content));
                    pending.push((key, handle));
                }
                Err(failure) => {
                    tracing::warn!(
                        platform = %key,
                        error = failure.error.as_deref().unwrap_or_default(),
                        "publish destination skipped"
                    );
                    results.insert(key, failure);
                }
            }
        }

        let (keys, handles): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
        for (key, outcome) in keys.into_iter().zip(join_all(handles).await) {
            let result = outcome.unwrap_or_else(|err| crashed(&key, &err));
            if result.success {
                tracing::info!(platform = %key, url = result.url.as_deref(), "published");
            } else {
                tracing::warn!(
                    platform = %key,
                    error = result.error.as_deref().unwrap_or_default(),
                    "publish failed"
                );
            }
            results.insert(key, result);
        }

        tracing::info!(
            slug = %content.slug,
            attempted = results.len(),
            succeeded = results.values().filter(|r| r.success).count(),
            "publish fan-out finished"
        );
        results
    }

    /// Every registered publisher with its configuration state, for display.
    pub fn available_publishers(&self) -> Vec<PublisherAvailability> {
        self.registry
            .iter()
            .map(|(platform, publisher)| PublisherAvailability {
                platform,
                enabled: publisher.is_enabled(),
            })
            .collect()
    }

    fn resolve(
        &self,
        destination: &PublishDestination,
        key: &str,
    ) -> Result<Arc<dyn Publisher>, PublishResult> {
        let publisher = destination
            .parsed_platform()
            .and_then(|platform| self.registry.get(platform))
            .ok_or_else(|| {
                PublishResult::failure(format!("Publisher not found for platform: {key}"))
            })?;

        if !publisher.is_enabled() {
            return Err(PublishResult::failure(format!(
                "Publisher {key} is not properly configured"
            )));
        }

        Ok(publisher)
    }

    fn dispatch(
        &self,
        name: String,
        publisher: Arc<dyn Publisher>,
        content: Arc<PublishContent>,
    ) -> JoinHandle<PublishResult> {
        let timeout = self.timeout;
        tokio::spawn(async move {
            let attempt = publisher.publish(&content);
            match timeout {
                Some(limit) => tokio::time::timeout(limit, attempt)
                    .await
                    .unwrap_or_else(|_| {
                        PublishResult::failure(format!(
                            "Publisher {name} timed out after {}s",
                            limit.as_secs()
                        ))
                    }),
                None => attempt.await,
            }
        })
    }
}

fn result_key(destination: &PublishDestination) -> String {
    destination
        .parsed_platform()
        .map_or_else(|| destination.platform.clone(), |p| p.as_str().to_string())
}

fn crashed(name: &str, err: &JoinError) -> PublishResult {
    let detail = if err.is_panic() {
        "publisher panicked"
    } else {
        "publisher task was cancelled"
    };
    PublishResult::failure(format!("Publisher {name} failed unexpectedly: {detail}"))
}
