//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-time errors go through
//! `auth::AuthError` and `kernel::error::AppError`.

use auth::{AuthConfig, PgUserDirectory, site_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = load_auth_config()?;

    // The directory must be reachable before any traffic is served
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "User directory unreachable"))?;

    let directory = PgUserDirectory::new(pool.clone());
    directory.ping().await?;

    tracing::info!("Connected to user directory");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    if cfg!(debug_assertions) {
        let user_id = directory.ensure_user("testuser", "password").await?;
        tracing::info!(user_id = %user_id, "Demo account testuser is available");
    }

    let app = site_router(directory, auth_config).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Session settings from the environment
///
/// `SESSION_SECRET` (standard Base64) fixes the cookie signing key. Without
/// it, debug builds use the development key and release builds draw a
/// random key, so cookies do not outlive the process.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret = platform::crypto::from_base64(secret_b64.trim())?;
            anyhow::ensure!(!secret.is_empty(), "SESSION_SECRET must not be empty");
            AuthConfig::with_secret(secret)
        }
        Err(_) if cfg!(debug_assertions) => AuthConfig::development(),
        Err(_) => {
            tracing::warn!("SESSION_SECRET not set, using a random signing key");
            AuthConfig::with_random_secret()
        }
    };

    if let Ok(secure) = env::var("COOKIE_SECURE") {
        config.cookie_secure = secure.parse()?;
    } else if cfg!(debug_assertions) {
        config.cookie_secure = false;
    }

    Ok(config)
}
