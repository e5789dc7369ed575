//! Payment and seat reservation adapters.
//!
//! - `logging`: stateless gateways that accept and log every call
//! - `in_memory`: recording gateways for tests and local development

pub mod in_memory;
pub mod logging;

pub use in_memory::{
    InMemoryGatewayError, InMemoryPaymentGateway, InMemorySeatReservationGateway, Payment,
    SeatReservation,
};
pub use logging::{LoggingPaymentGateway, LoggingSeatReservationGateway};
