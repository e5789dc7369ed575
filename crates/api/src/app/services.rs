use std::sync::Arc;

use boxoffice_infra::{
    InMemoryPaymentGateway, InMemorySeatReservationGateway, LoggingPaymentGateway,
    LoggingSeatReservationGateway,
};
use boxoffice_tickets::{
    ConfigError, PaymentGateway, SeatReservationGateway, TicketService, TicketServiceConfig,
};

/// Set to `true` to wire the recording gateways and expose `GET /dispatches`.
pub const RECORD_DISPATCHES_VAR: &str = "BOXOFFICE_RECORD_DISPATCHES";

/// Ticket service as shared by request handlers.
pub type SharedTicketService = TicketService<
    Arc<dyn PaymentGateway + Send + Sync>,
    Arc<dyn SeatReservationGateway + Send + Sync>,
>;

/// Recording gateways whose history `GET /dispatches` reports.
pub struct DispatchLog {
    pub payments: Arc<InMemoryPaymentGateway>,
    pub seats: Arc<InMemorySeatReservationGateway>,
}

/// Everything a request handler needs. Read-only after startup.
pub struct AppServices {
    pub tickets: SharedTicketService,
    /// Present only when the recording gateways are wired.
    pub dispatch_log: Option<DispatchLog>,
}

/// Pick the gateways from the environment: logging gateways by default,
/// recording gateways when [`RECORD_DISPATCHES_VAR`] is `true`.
pub fn build_services_from_env(
    config: TicketServiceConfig,
) -> Result<Arc<AppServices>, ConfigError> {
    let record = std::env::var(RECORD_DISPATCHES_VAR)
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if record {
        tracing::warn!(
            "{RECORD_DISPATCHES_VAR}=true: dispatches are kept in memory and exposed on /dispatches"
        );
        return build_in_memory_services(config);
    }

    build_logging_services(config)
}

/// Wire the ticket service to the stateless logging gateways.
pub fn build_logging_services(
    config: TicketServiceConfig,
) -> Result<Arc<AppServices>, ConfigError> {
    build_services(
        config,
        Arc::new(LoggingPaymentGateway),
        Arc::new(LoggingSeatReservationGateway),
    )
}

/// Wire the ticket service to fresh recording gateways.
pub fn build_in_memory_services(
    config: TicketServiceConfig,
) -> Result<Arc<AppServices>, ConfigError> {
    build_recording_services(
        config,
        Arc::new(InMemoryPaymentGateway::new()),
        Arc::new(InMemorySeatReservationGateway::new()),
    )
}

/// Wire the ticket service to the given recording gateways and keep them
/// for `GET /dispatches`.
pub fn build_recording_services(
    config: TicketServiceConfig,
    payments: Arc<InMemoryPaymentGateway>,
    seats: Arc<InMemorySeatReservationGateway>,
) -> Result<Arc<AppServices>, ConfigError> {
    let payment_gateway: Arc<dyn PaymentGateway + Send + Sync> = payments.clone();
    let seat_gateway: Arc<dyn SeatReservationGateway + Send + Sync> = seats.clone();
    let tickets = TicketService::new(config, payment_gateway, seat_gateway)?;

    Ok(Arc::new(AppServices {
        tickets,
        dispatch_log: Some(DispatchLog { payments, seats }),
    }))
}

/// Wire the ticket service to arbitrary gateways. No dispatch log is kept.
pub fn build_services(
    config: TicketServiceConfig,
    payments: Arc<dyn PaymentGateway + Send + Sync>,
    seats: Arc<dyn SeatReservationGateway + Send + Sync>,
) -> Result<Arc<AppServices>, ConfigError> {
    let tickets = TicketService::new(config, payments, seats)?;

    Ok(Arc::new(AppServices {
        tickets,
        dispatch_log: None,
    }))
}
