//! PoolCare - Rust/Axum dosing service
//!
//! Serves dosing recommendations, pool volume estimation and the vision
//! analysis helpers to the app shell.

use poolcare_web::{app, config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poolcare_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        default_locale = %config.default_locale,
        cors_allow_any = config.cors_allow_any,
        "Configuration loaded"
    );

    let addr = config.bind_addr.clone();
    let router = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
