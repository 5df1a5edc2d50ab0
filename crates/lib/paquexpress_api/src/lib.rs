//! # paquexpress_api
//!
//! HTTP API library for Paquexpress.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use paquexpress_core::media::MediaStore;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ApiConfig;
use crate::handlers::{auth, deliveries, packages, photos, status};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Photo storage.
    pub media: MediaStore,
}

/// Run embedded database migrations.
///
/// Delegates to `paquexpress_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    paquexpress_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/", get(status::status_handler))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/paquetes/{id}", get(packages::get_package_handler))
        .route("/fotos/", post(photos::upload_photo_handler));

    // Protected routes (require a Bearer token bound to a live agent)
    let protected = Router::new()
        .route(
            "/entregas/confirmar",
            post(deliveries::confirm_delivery_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_agent,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(state.media.root()))
        .layer(cors)
        .with_state(state)
}
