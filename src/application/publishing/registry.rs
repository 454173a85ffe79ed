// src/application/publishing/registry.rs
use std::sync::Arc;

use crate::application::ports::publisher::Publisher;
use crate::domain::publishing::Platform;

/// One slot per [`Platform`]; lookups go through an exhaustive match so a new
/// platform variant cannot be forgotten here.
#[derive(Clone)]
pub struct PublisherRegistry {
    local: Arc<dyn Publisher>,
    wordpress: Option<Arc<dyn Publisher>>,
    youtube: Option<Arc<dyn Publisher>>,
    twitter: Option<Arc<dyn Publisher>>,
}

impl PublisherRegistry {
    pub fn new(local: Arc<dyn Publisher>) -> Self {
        Self {
            local,
            wordpress: None,
            youtube: None,
            twitter: None,
        }
    }

    pub fn with_wordpress(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.wordpress = Some(publisher);
        self
    }

    pub fn with_youtube(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.youtube = Some(publisher);
        self
    }

    pub fn with_twitter(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.twitter = Some(publisher);
        self
    }

    pub fn get(&self, platform: Platform) -> Option<Arc<dyn Publisher>> {
        match platform {
            Platform::Local => Some(Arc::clone(&self.local)),
            Platform::WordPress => self.wordpress.clone(),
            Platform::YouTube => self.youtube.clone(),
            Platform::Twitter => self.twitter.clone(),
        }
    }

    /// Registered publishers in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, Arc<dyn Publisher>)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|publisher| (platform, publisher)))
    }
}
