//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: gateway and ticket service wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `GET /dispatches` is only routed when the services keep a dispatch log.
pub fn build_app(services: Arc<AppServices>) -> Router {
    let mut router = Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router());

    if services.dispatch_log.is_some() {
        router = router.route("/dispatches", get(routes::system::dispatches));
    }

    router.layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
