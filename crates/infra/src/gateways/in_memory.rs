use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn};

use boxoffice_core::AccountId;
use boxoffice_tickets::{GatewayError, PaymentGateway, SeatReservationGateway};

/// A payment captured by [`InMemoryPaymentGateway`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u64,
}

/// A reservation recorded by [`InMemorySeatReservationGateway`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatReservation {
    pub account_id: AccountId,
    pub seats: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum InMemoryGatewayError {
    /// The gateway was configured to refuse every call.
    #[error("payment declined: {0}")]
    Declined(String),

    /// Internal lock poisoning.
    #[error("gateway state poisoned")]
    Poisoned,
}

/// In-memory payment gateway for tests/dev.
///
/// Records every payment it accepts. Never moves real money.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    payments: Mutex<Vec<Payment>>,
    decline: Option<String>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every payment with `reason`.
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            payments: Mutex::new(Vec::new()),
            decline: Some(reason.into()),
        }
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PaymentGateway for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError> {
        if let Some(reason) = &self.decline {
            warn!(%account_id, amount, %reason, "payment declined");
            return Err(InMemoryGatewayError::Declined(reason.clone()).into());
        }

        self.payments
            .lock()
            .map_err(|_| InMemoryGatewayError::Poisoned)?
            .push(Payment { account_id, amount });

        info!(%account_id, amount, "payment captured");
        Ok(())
    }
}

/// In-memory seat reservation gateway for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySeatReservationGateway {
    reservations: Mutex<Vec<SeatReservation>>,
}

impl InMemorySeatReservationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.reservations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Total seats reserved across all accounts.
    pub fn seats_reserved(&self) -> u64 {
        self.reservations().iter().map(|r| r.seats).sum()
    }
}

impl SeatReservationGateway for InMemorySeatReservationGateway {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), GatewayError> {
        self.reservations
            .lock()
            .map_err(|_| InMemoryGatewayError::Poisoned)?
            .push(SeatReservation { account_id, seats });

        info!(%account_id, seats, "seats reserved");
        Ok(())
    }
}
