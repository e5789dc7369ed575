use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use boxoffice_core::{InvalidPurchase, PurchaseError};

pub fn purchase_error_to_response(err: PurchaseError) -> axum::response::Response {
    match err {
        PurchaseError::Rejected(rejection) => rejection_to_response(&rejection),
        PurchaseError::Gateway(e) => {
            json_error(StatusCode::BAD_GATEWAY, "gateway_error", e.to_string())
        }
    }
}

pub fn rejection_to_response(rejection: &InvalidPurchase) -> axum::response::Response {
    let status = if rejection.is_count_rule() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_REQUEST
    };
    json_error(status, rejection.code(), rejection.to_string())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
