use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use boxoffice_tickets::{rules, RawPurchaseRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(purchase_tickets))
        .route("/quote", post(quote_tickets))
}

pub async fn purchase_tickets(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<RawPurchaseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.tickets.purchase(&request) {
        Ok(confirmation) => {
            tracing::info!(
                account_id = %confirmation.account_id,
                total_price = confirmation.total_price,
                seats_reserved = confirmation.seats_reserved,
                "purchase completed"
            );
            (StatusCode::OK, Json(confirmation)).into_response()
        }
        Err(e) => {
            match e.rejection() {
                Some(rejection) => tracing::info!(code = rejection.code(), "purchase rejected"),
                None => tracing::warn!(error = %e, "purchase failed at gateway"),
            }
            errors::purchase_error_to_response(e)
        }
    }
}

pub async fn quote_tickets(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::QuoteRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let quote = rules::validate_ticket_lines(&request.ticket_lines)
        .and_then(|lines| services.tickets.quote(&lines));

    match quote {
        Ok(q) => (StatusCode::OK, Json(dto::QuoteResponse::from(q))).into_response(),
        Err(rejection) => errors::rejection_to_response(&rejection),
    }
}
