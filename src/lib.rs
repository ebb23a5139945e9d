pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notify;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::notify::{EmailNotifier, Notifier};
use crate::services::{ContactService, ProjectService};
use crate::state::{AppState, SharedState};
use crate::store::PgStore;

pub fn build_app(pool: PgPool, config: Config) -> (Router, SharedState) {
    let notifier = match EmailNotifier::new(&config.notify) {
        Ok(notifier) => {
            if notifier.is_enabled() {
                tracing::info!("Contact email notifications configured");
            }
            notifier
        }
        Err(e) => {
            tracing::warn!("Contact email notifications not available: {e}");
            EmailNotifier::disabled()
        }
    };

    build_app_with_notifier(pool, config, Arc::new(notifier))
}

pub fn build_app_with_notifier(
    pool: PgPool,
    config: Config,
    notifier: Arc<dyn Notifier>,
) -> (Router, SharedState) {
    let store = Arc::new(PgStore::new(pool));

    let state: SharedState = Arc::new(AppState {
        projects: ProjectService::new(store.clone()),
        contact: ContactService::new(store, notifier, config.notify.timeout),
        config,
    });

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
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
                )),
        )
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
