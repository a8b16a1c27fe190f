pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod sweeper;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{AppointmentStore, AuthStore, CustomerStore, InvoiceStore, NoteStore, ServiceStore};
use crate::rate_limit::LoginRateLimiter;
use crate::state::{AppState, SharedState};

/// Wire every store to the same pool and build the router.
pub fn build_app(pool: SqlitePool, config: Config) -> (Router, SharedState) {
    let state: SharedState = Arc::new(AppState {
        auth: AuthStore::new(pool.clone(), config.session_ttl),
        customers: CustomerStore::new(pool.clone()),
        appointments: AppointmentStore::new(pool.clone()),
        services: ServiceStore::new(pool.clone()),
        invoices: InvoiceStore::new(pool.clone()),
        notes: NoteStore::new(pool),
        login_limiter: LoginRateLimiter::new(),
        config,
    });

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(layers)
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
