use tracing::info;

use boxoffice_core::AccountId;
use boxoffice_tickets::{GatewayError, PaymentGateway, SeatReservationGateway};

/// Payment gateway that accepts every charge and only logs it.
///
/// Keeps no state, so a long-running process does not accumulate anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentGateway;

impl PaymentGateway for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError> {
        info!(%account_id, amount, "payment accepted");
        Ok(())
    }
}

/// Seat reservation gateway that accepts every request and only logs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationGateway;

impl SeatReservationGateway for LoggingSeatReservationGateway {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), GatewayError> {
        info!(%account_id, seats, "seats accepted");
        Ok(())
    }
}
