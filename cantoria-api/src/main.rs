//! # Cantoria API Server
//!
//! HTTP server for the Cantoria ministry coordination app: musician roster,
//! song repertoire, schedule ledger, and the derived agenda views, behind a
//! seeded-credential session layer.
//!
//! ## Usage
//!
//! ```bash
//! CANTORIA_SESSION_SECRET=$(openssl rand -hex 32) cargo run -p cantoria-api
//! ```

use cantoria_api::{app, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cantoria_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Cantoria API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    let state = app::AppState::new(config);
    state.seed().await?;

    let router = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
