//! Mindly API Server
//!
//! Backend for a short-video learning feed: user registration and a feed of
//! moderated videos with their authors.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.
//!
//! Commands:
//! - `mindly-api` or `mindly-api serve`: run the HTTP server
//! - `mindly-api migrate`: apply the database schema
//! - `mindly-api seed`: load demo data

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod db;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresUserRepository, PostgresVideoRepository};
use app::{FeedService, UserService};
use config::Config;
use domain::ports::{UserRepository, VideoRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<dyn VideoRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    pub fn new(videos: Arc<dyn VideoRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(videos)),
            user_service: Arc::new(UserService::new(users)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    time: DateTime<Utc>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "mindly-api",
        version: env!("CARGO_PKG_VERSION"),
        time: Utc::now(),
    })
}

/// Registration routes; the caller decides whether they are rate limited
fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/auth/register", post(handlers::register))
}

/// Build the full router around `auth`
fn build_router(state: AppState, auth: Router<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/feed", get(handlers::get_feed))
        .merge(auth)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(3600)),
                )
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

enum Command {
    Serve,
    Migrate,
    Seed,
}

impl Command {
    fn parse(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("serve") => Some(Command::Serve),
            Some("migrate") => Some(Command::Migrate),
            Some("seed") => Some(Command::Seed),
            Some(_) => None,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mindly_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arg = std::env::args().nth(1);
    let Some(command) = Command::parse(arg.as_deref()) else {
        eprintln!("usage: mindly-api [serve|migrate|seed]");
        std::process::exit(2);
    };

    let config = Config::from_env();

    let result = match command {
        Command::Serve => serve(config).await,
        Command::Migrate => migrate(config).await,
        Command::Seed => seed(config).await,
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    tracing::info!("Connecting to database...");
    let db = Database::connect(config.connect_options())
        .await
        .context("failed to connect to database")?;
    db.ping().await.context("database did not answer ping")?;
    tracing::info!("Database connected");

    Ok(db)
}

async fn migrate(config: Config) -> anyhow::Result<()> {
    let db = connect(&config).await?;
    let version = db::apply_schema(&db).await?;
    tracing::info!(version, "Migration complete");
    Ok(())
}

async fn seed(config: Config) -> anyhow::Result<()> {
    let db = Arc::new(connect(&config).await?);
    let report = db::seed::run(&db).await?;
    tracing::info!(
        videos = report.videos_added,
        quizzes = report.quizzes_added,
        "Seed complete"
    );
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Mindly API...");

    let db = Arc::new(connect(&config).await?);
    if let Err(e) = db::schema::ensure_schema_version(&*db).await {
        tracing::warn!(error = %e, "Schema check failed; requests may fail until `migrate` runs");
    }

    let state = AppState::new(
        Arc::new(PostgresVideoRepository::new(Arc::clone(&db))),
        Arc::new(PostgresUserRepository::new(Arc::clone(&db))),
    );

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("invalid rate limit configuration")?,
    );

    let auth = auth_routes().layer(GovernorLayer {
        config: governor_config,
    });
    let app = build_router(state, auth, config.request_timeout());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    // The router owned the other handles and is gone once serving stops
    if let Ok(db) = Arc::try_unwrap(db) {
        db.close().await.context("failed to close database pool")?;
    }
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
