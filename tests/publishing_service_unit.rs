// tests/publishing_service_unit.rs
use std::sync::Arc;
use std::time::Duration;

use tribune_core::application::publishing::PublishingService;
use tribune_core::config::WordPressCredentials;
use tribune_core::domain::publishing::{Platform, PublishDestination};
use tribune_core::infrastructure::publishers::WordPressPublisher;

mod support;
use support::{
    InMemoryCategoryRepo, PanickingPublisher, ScriptedTransport, SlowPublisher, StubPublisher,
    local_only_registry, sample_content, stub_registry,
};

/// 宛先が空でもローカルだけは必ず公開される
#[tokio::test]
async fn empty_destinations_publish_locally() {
    let service = PublishingService::new(local_only_registry());

    let results = service.publish(sample_content("t"), &[]).await;

    assert_eq!(results.len(), 1);
    let local = &results["local"];
    assert!(local.success);
    assert_eq!(local.url.as_deref(), Some("/articles/t"));
    assert_eq!(local.platform_id.as_deref(), Some("local"));
}

/// 各プラットフォームの結果は独立している
#[tokio::test]
async fn outcomes_are_reported_per_platform() {
    let (registry, wordpress) = stub_registry();
    let service = PublishingService::new(registry);
    let destinations = vec![
        PublishDestination::new("wordpress", true),
        PublishDestination::new("twitter", true),
        PublishDestination::new("youtube", true),
    ];

    let results = service.publish(sample_content("t"), &destinations).await;

    assert_eq!(results.len(), 4);
    assert!(results["local"].success);
    assert!(results["wordpress"].success);
    assert_eq!(results["twitter"].error.as_deref(), Some("rate limited"));
    assert_eq!(
        results["youtube"].error.as_deref(),
        Some("Publisher youtube is not properly configured")
    );
    assert_eq!(wordpress.calls(), 1);
}

#[tokio::test]
async fn disabled_destinations_get_no_entry_and_no_call() {
    let (registry, wordpress) = stub_registry();
    let service = PublishingService::new(registry);

    let results = service
        .publish(
            sample_content("t"),
            &[PublishDestination::new("wordpress", false)],
        )
        .await;

    assert_eq!(results.keys().collect::<Vec<_>>(), vec!["local"]);
    assert_eq!(wordpress.calls(), 0);
}

#[tokio::test]
async fn unknown_and_unregistered_platforms_are_reported() {
    let service = PublishingService::new(local_only_registry());
    let destinations = vec![
        PublishDestination::new("medium", true),
        PublishDestination::new("wordpress", true),
    ];

    let results = service.publish(sample_content("t"), &destinations).await;

    assert_eq!(
        results["medium"].error.as_deref(),
        Some("Publisher not found for platform: medium")
    );
    assert_eq!(
        results["wordpress"].error.as_deref(),
        Some("Publisher not found for platform: wordpress")
    );
    assert!(results["local"].success);
}

#[tokio::test]
async fn repeated_platform_is_attempted_once() {
    let (registry, wordpress) = stub_registry();
    let service = PublishingService::new(registry);
    let destinations = vec![
        PublishDestination::new("wordpress", true),
        PublishDestination::new("WordPress", true),
        PublishDestination::new("local", true),
    ];

    let results = service.publish(sample_content("t"), &destinations).await;

    assert_eq!(results.len(), 2);
    assert_eq!(wordpress.calls(), 1);
}

/// ローカルを明示的に無効化した場合はローカルの結果も出ない
#[tokio::test]
async fn explicitly_disabled_local_is_honoured() {
    let service = PublishingService::new(local_only_registry());

    let results = service
        .publish(sample_content("t"), &[PublishDestination::new("local", false)])
        .await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn a_panicking_publisher_only_fails_its_own_entry() {
    let registry = local_only_registry()
        .with_twitter(Arc::new(PanickingPublisher(Platform::Twitter)))
        .with_wordpress(Arc::new(StubPublisher::succeeding(Platform::WordPress)));
    let service = PublishingService::new(registry);
    let destinations = vec![
        PublishDestination::enabled(Platform::Twitter),
        PublishDestination::enabled(Platform::WordPress),
    ];

    let results = service.publish(sample_content("t"), &destinations).await;

    let twitter = &results["twitter"];
    assert!(!twitter.success);
    assert_eq!(
        twitter.error.as_deref(),
        Some("Publisher twitter failed unexpectedly: publisher panicked")
    );
    assert!(results["wordpress"].success);
    assert!(results["local"].success);
}

#[tokio::test]
async fn slow_publishers_are_cut_off_by_the_timeout() {
    let registry = local_only_registry().with_youtube(Arc::new(SlowPublisher {
        platform: Platform::YouTube,
        delay: Duration::from_secs(30),
    }));
    let service = PublishingService::new(registry).with_timeout(Some(Duration::from_millis(50)));

    let results = service
        .publish(
            sample_content("t"),
            &[PublishDestination::enabled(Platform::YouTube)],
        )
        .await;

    let youtube = &results["youtube"];
    assert!(!youtube.success);
    assert!(
        youtube.error.as_deref().unwrap().contains("timed out"),
        "unexpected error: {:?}",
        youtube.error
    );
    assert!(results["local"].success);
}

#[tokio::test]
async fn attempts_run_concurrently() {
    let delay = Duration::from_millis(200);
    let registry = local_only_registry()
        .with_youtube(Arc::new(SlowPublisher {
            platform: Platform::YouTube,
            delay,
        }))
        .with_twitter(Arc::new(SlowPublisher {
            platform: Platform::Twitter,
            delay,
        }));
    let service = PublishingService::new(registry);
    let destinations = vec![
        PublishDestination::enabled(Platform::YouTube),
        PublishDestination::enabled(Platform::Twitter),
    ];

    let started = std::time::Instant::now();
    let results = service.publish(sample_content("t"), &destinations).await;

    assert!(results.values().all(|r| r.success));
    assert!(started.elapsed() < delay * 2, "attempts were serialized");
}

#[test]
fn available_publishers_report_configuration_state() {
    let (registry, _) = stub_registry();
    let service = PublishingService::new(registry);

    let listed: Vec<(Platform, bool)> = service
        .available_publishers()
        .into_iter()
        .map(|p| (p.platform, p.enabled))
        .collect();

    assert_eq!(
        listed,
        vec![
            (Platform::Local, true),
            (Platform::WordPress, true),
            (Platform::YouTube, false),
            (Platform::Twitter, true),
        ]
    );
}

/// 認証情報が欠けた WordPress はネットワークに一切触れずに失敗する
#[tokio::test]
async fn unconfigured_wordpress_never_reaches_the_network() {
    let transport = Arc::new(ScriptedTransport::unreachable());
    let wordpress = WordPressPublisher::new(
        transport.clone(),
        Arc::new(InMemoryCategoryRepo::default()),
        &WordPressCredentials {
            api_url: Some("https://blog.example".into()),
            username: Some("editor".into()),
            application_password: None,
        },
        "public",
    );
    let service =
        PublishingService::new(local_only_registry().with_wordpress(Arc::new(wordpress)));

    let results = service
        .publish(
            sample_content("t"),
            &[PublishDestination::new("wordpress", true)],
        )
        .await;

    assert_eq!(
        results["wordpress"].error.as_deref(),
        Some("Publisher wordpress is not properly configured")
    );
    assert!(results["local"].success);
    assert_eq!(transport.total(), 0);
}

/// 結果のキーとエラーメッセージは同じ正規化された名前を使う
#[tokio::test]
async fn failure_messages_use_the_normalized_platform_name() {
    let (registry, _) = stub_registry();
    let service = PublishingService::new(registry);

    let results = service
        .publish(
            sample_content("t"),
            &[PublishDestination::new("YouTube", true)],
        )
        .await;

    assert_eq!(
        results["youtube"].error.as_deref(),
        Some("Publisher youtube is not properly configured")
    );
    assert!(!results.contains_key("YouTube"));
}
