//! Infrastructure layer: configuration loading and external service adapters.

pub mod config;
pub mod gateways;

pub use config::{ConfigLoadError, load_config, load_config_from};
pub use gateways::{
    InMemoryGatewayError, InMemoryPaymentGateway, InMemorySeatReservationGateway,
    LoggingPaymentGateway, LoggingSeatReservationGateway, Payment, SeatReservation,
};
