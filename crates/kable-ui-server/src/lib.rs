#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tera::Tera;
use thiserror::Error;
use tower_http::services::ServeDir;

mod config;
mod fixtures;
mod http;
mod middleware;
mod render;

pub use config::{validate_startup_config, UiConfig};
pub use fixtures::{ConceptSource, StaticFixtures};
pub use render::load_templates;

pub const CRATE_NAME: &str = "kable-ui-server";

#[derive(Debug, Error)]
pub enum UiError {
    #[error("failed to load templates from {glob}: {source}")]
    TemplateLoad { glob: String, source: tera::Error },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("server startup failed: {0}")]
    Startup(String),
}

/// Shared per-request state. Everything behind the `Arc`s is immutable, so
/// requests never contend on anything.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Tera>,
    pub source: Arc<dyn ConceptSource>,
    pub ui: UiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(templates: Tera, source: Arc<dyn ConceptSource>, ui: UiConfig) -> Self {
        Self {
            templates: Arc::new(templates),
            source,
            ui,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let assets = state.ui.asset_root.clone();
    Router::new()
        .route("/", get(http::handlers::index_handler))
        .route("/repos", get(http::handlers::repos_handler))
        .route("/concepts", get(http::handlers::concepts_handler))
        .route(
            "/concepts/:conceptid",
            get(http::handlers::concept_detail_handler),
        )
        .route("/kubeapps", get(http::handlers::kubeapps_handler))
        .route("/stats", get(http::handlers::stats_handler))
        .nest_service("/css", ServeDir::new(assets.join("css")))
        .nest_service("/img", ServeDir::new(assets.join("img")))
        .nest_service("/js", ServeDir::new(assets.join("js")))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.ui.max_body_bytes))
        .with_state(state)
}
