//! HTTP API application wiring (Axum router + service wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: the entry service (validation + store calls)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::EntryService;

/// Build the full HTTP router (public entrypoint used by the server and tests).
///
/// The service is passed in rather than built here so tests can run the
/// exact production router over any store.
pub fn build_app(service: Arc<EntryService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(service)))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace())
                .layer(middleware::cors()),
        )
}
