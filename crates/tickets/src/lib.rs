//! Ticket purchasing domain module.
//!
//! This crate contains the business rules for a single ticket purchase,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Payment and seat reservation are reached only through the traits in
//! [`gateway`].

pub mod category;
pub mod config;
pub mod gateway;
pub mod line;
pub mod policy;
pub mod rules;
pub mod service;
pub mod totals;

pub use category::TicketCategory;
pub use config::{ConfigError, PriceTable, SeatExemptSet, TicketServiceConfig};
pub use gateway::{GatewayError, PaymentGateway, SeatReservationGateway};
pub use line::TicketLine;
pub use policy::{seats_to_reserve, total_price};
pub use service::{
    PurchaseConfirmation, PurchaseQuote, PurchaseRequest, RawPurchaseRequest, TicketService,
};
pub use totals::CategoryTotals;
