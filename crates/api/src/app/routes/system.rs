use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Calls recorded by the in-memory gateways (dev/test only).
pub async fn dispatches(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let Some(log) = services.dispatch_log.as_ref() else {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "dispatch recording is disabled",
        );
    };

    Json(dto::DispatchLogResponse {
        payments: log.payments.payments(),
        reservations: log.seats.reservations(),
    })
    .into_response()
}
