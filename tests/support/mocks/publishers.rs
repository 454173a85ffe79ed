// tests/support/mocks/publishers.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tribune_core::application::ports::publisher::Publisher;
use tribune_core::domain::publishing::{Platform, PublishContent, PublishResult};

/// 固定の結果を返し、呼び出し回数を数えるパブリッシャー
pub struct StubPublisher {
    platform: Platform,
    enabled: bool,
    result: PublishResult,
    calls: AtomicUsize,
}

impl StubPublisher {
    pub fn succeeding(platform: Platform) -> Self {
        Self {
            platform,
            enabled: true,
            result: PublishResult::success(
                format!("https://{}.example/post", platform.as_str()),
                format!("{}-1", platform.as_str()),
            ),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(platform: Platform, error: &str) -> Self {
        Self {
            result: PublishResult::failure(error),
            ..Self::succeeding(platform)
        }
    }

    pub fn disabled(platform: Platform) -> Self {
        Self {
            enabled: false,
            ..Self::succeeding(platform)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Publisher for StubPublisher {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn publish(&self, _content: &PublishContent) -> PublishResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// 呼び出されると panic するパブリッシャー
pub struct PanickingPublisher(pub Platform);

#[async_trait]
impl Publisher for PanickingPublisher {
    fn platform(&self) -> Platform {
        self.0
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn publish(&self, _content: &PublishContent) -> PublishResult {
        panic!("remote SDK blew up");
    }
}

/// 指定時間待ってから成功するパブリッシャー
pub struct SlowPublisher {
    pub platform: Platform,
    pub delay: Duration,
}

#[async_trait]
impl Publisher for SlowPublisher {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn publish(&self, _content: &PublishContent) -> PublishResult {
        tokio::time::sleep(self.delay).await;
        PublishResult::success("https://slow.example/post", "slow")
    }
}
