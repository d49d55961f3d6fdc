//! Reducer Server - HTTP boundary for the reducer pipeline
//!
//! Routes:
//!
//! - `POST /reduce` - multipart form with `image`, `maxWidth`, `maxHeight`;
//!   responds with the reduced image in its original format
//! - `GET /ping` - liveness probe, responds `Pong!\n`
//!
//! # Module Structure
//!
//! - `config` - Command-line configuration
//! - `form` - Multipart form extraction and validation
//! - `handlers` - Route handlers
//! - `error` - [`ApiError`] and its status / message mapping

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use reducer_core::{ImageBackend, ImageCrateBackend};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;

pub use config::Config;
pub use error::ApiError;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ImageBackend + Send + Sync>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            backend: Arc::new(ImageCrateBackend),
        }
    }
}

/// Build the router with the default codec backend.
pub fn app(config: &Config) -> Router {
    router(AppState::default(), config.max_upload_bytes)
}

/// Build the router around an explicit state.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/reduce", post(handlers::reduce))
        .route("/ping", get(handlers::ping))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
