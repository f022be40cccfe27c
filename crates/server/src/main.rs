//! chirp-rs server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use chirp_api::{middleware::AppState, router as api_router};
use chirp_common::{Config, MediaStorage};
use chirp_core::{FollowService, LikeService, MediaService, TweetService, UserService};
use chirp_db::entities::user;
use chirp_db::repositories::{
    FollowerRepository, LikeRepository, MediaRepository, TweetRepository, UserRepository,
};
use sea_orm::Set;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

/// Fill an empty users table with demo accounts.
///
/// Only used for local development and manual testing; enabled by the
/// `server.seed_demo` config flag.
async fn seed_demo_users(user_repo: &UserRepository) -> Result<(), chirp_common::AppError> {
    if user_repo.count().await? > 0 {
        return Ok(());
    }

    let demo_users = [
        ("Test", "test"),
        ("Josh", "fd2f8f56-a060-4bba"),
        ("Ricardo", "3c0da680-3c2d-4511"),
        ("Comedian", "67b4a167-a3cb-4bb0"),
    ];

    for (name, api_key) in demo_users {
        user_repo
            .create(user::ActiveModel {
                name: Set(name.to_string()),
                api_key: Set(api_key.to_string()),
                ..Default::default()
            })
            .await?;
    }

    info!("Seeded demo users");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirp=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting chirp-rs server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = chirp_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    chirp_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let user_repo = UserRepository::new(Arc::clone(&db));
    let tweet_repo = TweetRepository::new(Arc::clone(&db));
    let media_repo = MediaRepository::new(Arc::clone(&db));
    let follower_repo = FollowerRepository::new(Arc::clone(&db));
    let like_repo = LikeRepository::new(Arc::clone(&db));

    if config.server.seed_demo {
        seed_demo_users(&user_repo).await?;
    }

    // Initialize services
    let storage = MediaStorage::new(config.storage.media_dir.clone());

    let user_service = UserService::new(user_repo.clone(), follower_repo.clone());
    let tweet_service = TweetService::new(
        tweet_repo.clone(),
        media_repo.clone(),
        like_repo.clone(),
        user_repo.clone(),
        storage.clone(),
    );
    let media_service = MediaService::new(media_repo, storage);
    let follow_service = FollowService::new(follower_repo, user_repo);
    let like_service = LikeService::new(like_repo, tweet_repo);

    let state = AppState {
        user_service,
        tweet_service,
        media_service,
        follow_service,
        like_service,
    };

    // Build router
    let app = Router::new()
        .nest("/api", api_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            chirp_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
