use serde::{Deserialize, Serialize};
use serde_json::Value;

use boxoffice_infra::{Payment, SeatReservation};
use boxoffice_tickets::{CategoryTotals, PurchaseQuote};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /purchases/quote`. Lines are validated like a purchase,
/// so a missing or non-array `ticketLines` is an invalid ticket request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub ticket_lines: Value,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub tickets: CategoryTotals,
    pub total_price: u64,
    pub seats_to_reserve: u64,
}

impl From<PurchaseQuote> for QuoteResponse {
    fn from(q: PurchaseQuote) -> Self {
        Self {
            tickets: q.tickets,
            total_price: q.total_price,
            seats_to_reserve: q.seats_to_reserve,
        }
    }
}

/// Everything the in-memory gateways have recorded.
#[derive(Debug, Serialize)]
pub struct DispatchLogResponse {
    pub payments: Vec<Payment>,
    pub reservations: Vec<SeatReservation>,
}
