use tribune_core::application::{
    ports::{HttpTransportPort, time::Clock, util::SlugGenerator},
    publishing::{PublisherRegistry, PublishingService},
    services::ApplicationServices,
};
use tribune_core::config::AppConfig;
use tribune_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};
use tribune_core::infrastructure::{
    database,
    http::ReqwestTransport,
    publishers::{LocalPublisher, TwitterPublisher, WordPressPublisher, YouTubePublisher},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCategoryRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use tribune_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));

    let publishing = Arc::new(build_publishing(&config, Arc::clone(&category_repo))?);
    for publisher in publishing.available_publishers() {
        tracing::info!(platform = %publisher.platform, enabled = publisher.enabled, "publisher registered");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        Arc::clone(&category_repo),
        Arc::clone(&publishing),
        Arc::clone(&clock),
        Arc::clone(&slugger),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_publishing(
    config: &AppConfig,
    category_repo: Arc<dyn CategoryRepository>,
) -> Result<PublishingService> {
    let transport: Arc<HttpTransportPort> = Arc::new(ReqwestTransport::new(config.http_timeout())?);
    let credentials = config.publishing();
    let uploads_root = config.uploads_root();

    let registry = PublisherRegistry::new(Arc::new(LocalPublisher::new()))
        .with_wordpress(Arc::new(WordPressPublisher::new(
            Arc::clone(&transport),
            category_repo,
            &credentials.wordpress,
            uploads_root.clone(),
        )))
        .with_youtube(Arc::new(YouTubePublisher::new(
            Arc::clone(&transport),
            credentials.youtube.clone(),
            uploads_root.clone(),
        )))
        .with_twitter(Arc::new(TwitterPublisher::new(
            transport,
            credentials.twitter.clone(),
            uploads_root.clone(),
        )));

    Ok(PublishingService::new(registry).with_timeout(config.publish_timeout()))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
