//! Application state and router builder
//!
//! This module defines the shared application state and provides a function
//! to build the axum router with all routes and middleware.
//!
//! # Example
//!
//! ```no_run
//! use cantoria_api::{app::AppState, config::Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let state = AppState::new(config);
//! state.seed().await?;
//! let app = cantoria_api::app::build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use axum::{
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use cantoria_core::auth::{middleware::authenticate, Authenticator};
use cantoria_core::seed;
use cantoria_core::services::{Agenda, Ledger, Repertoire, Roster};
use cantoria_core::store::memory::{
    MemoryMusicianStore, MemoryScheduleStore, MemorySongStore, MemoryUserStore,
};
use cantoria_core::store::UserStore;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via axum's `State` extractor; the services
/// share `Arc`s of the same stores, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Credential check and session issuing
    pub auth: Authenticator,

    /// Musician registry service
    pub roster: Roster,

    /// Song repertoire service
    pub repertoire: Repertoire,

    /// Schedule ledger service
    pub ledger: Ledger,

    /// Derived read-only views
    pub agenda: Agenda,

    /// Seeded user accounts (kept for seeding)
    users: Arc<dyn UserStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state with fresh in-memory stores
    ///
    /// Every store applies the configured simulated latency. The state is
    /// empty until [`AppState::seed`] runs.
    pub fn new(config: Config) -> Self {
        let latency = config.store.latency();
        let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::with_latency(latency));
        let musicians = Arc::new(MemoryMusicianStore::with_latency(latency));
        let songs = Arc::new(MemorySongStore::with_latency(latency));
        let schedules = Arc::new(MemoryScheduleStore::with_latency(latency));

        Self {
            auth: Authenticator::new(users.clone(), config.session.secret.clone()),
            roster: Roster::new(musicians.clone(), schedules.clone()),
            repertoire: Repertoire::new(songs.clone(), schedules.clone()),
            ledger: Ledger::new(schedules.clone(), musicians.clone(), songs.clone()),
            agenda: Agenda::new(schedules, musicians),
            users,
            config: Arc::new(config),
        }
    }

    /// Seeds the credential table, plus demo data when configured
    pub async fn seed(&self) -> anyhow::Result<()> {
        seed::seed_identity(&self.users).await?;
        if self.config.store.seed_demo {
            seed::seed_demo(&self.roster, &self.repertoire, &self.ledger).await?;
        }
        Ok(())
    }
}

/// Builds the complete axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                                    # Health check (public)
/// └── /api/
///     ├── /auth/login        POST                # Public
///     ├── /auth/me           GET                 # Session required
///     ├── /auth/logout       POST                # Session required
///     ├── /musicians[...]                        # GET: session, writes: admin
///     ├── /songs[...]                            # GET: session, writes: admin
///     ├── /schedules[...]                        # GET: session, writes: admin
///     └── /stats             GET                 # Session required
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Session authentication (everything under /api except /auth/login)
///
/// Admin gating happens per handler through the `AdminContext` extractor.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Login (public, no auth)
    let login_routes = Router::new().route("/auth/login", post(routes::auth::login));

    // Everything else under /api requires a valid session; mutating handlers
    // additionally extract AdminContext.
    let gated_routes = Router::new()
        .route("/auth/me", get(routes::auth::me))
        .route("/auth/logout", post(routes::auth::logout))
        .route(
            "/musicians",
            get(routes::musicians::list).post(routes::musicians::create),
        )
        .route(
            "/musicians/:id",
            get(routes::musicians::get_one)
                .put(routes::musicians::update)
                .delete(routes::musicians::remove),
        )
        .route("/musicians/user/:user_id", get(routes::musicians::for_user))
        .route("/songs", get(routes::songs::list).post(routes::songs::create))
        .route(
            "/songs/:id",
            get(routes::songs::get_one)
                .put(routes::songs::update)
                .delete(routes::songs::remove),
        )
        .route(
            "/schedules",
            get(routes::schedules::list).post(routes::schedules::create),
        )
        .route("/schedules/upcoming", get(routes::schedules::upcoming))
        .route("/schedules/past", get(routes::schedules::past))
        .route(
            "/schedules/musician/:musician_id",
            get(routes::schedules::for_musician),
        )
        .route(
            "/schedules/:id",
            get(routes::schedules::get_one)
                .put(routes::schedules::update)
                .delete(routes::schedules::remove),
        )
        .route(
            "/schedules/:id/musicians",
            post(routes::schedules::assign_musician),
        )
        .route(
            "/schedules/:id/musicians/:musician_id",
            delete(routes::schedules::remove_musician),
        )
        .route(
            "/schedules/:id/musicians/:musician_id/confirmation",
            put(routes::schedules::confirm_attendance),
        )
        .route("/schedules/:id/songs", put(routes::schedules::set_songs))
        .route("/stats", get(routes::stats::stats));

    let session_secret = state.auth.secret().to_string();
    let gated_routes = gated_routes.layer(axum::middleware::from_fn(move |req, next| {
        authenticate(session_secret.clone(), req, next)
    }));

    // CORS for the browser client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(health_routes)
        .nest("/api", login_routes.merge(gated_routes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
