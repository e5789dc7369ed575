//! Collaborator interfaces for payment capture and seat allocation.
//!
//! Implementations live outside the domain (see `boxoffice-infra`). The
//! purchase pipeline never inspects their errors; it returns them to the
//! caller as-is.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Error raised by an external collaborator.
pub type GatewayError = anyhow::Error;

pub trait PaymentGateway {
    /// Charge `amount` (smallest currency unit) to the account.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError>;
}

pub trait SeatReservationGateway {
    /// Reserve `seats` seats for the account.
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), GatewayError>;
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for &T {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationGateway + ?Sized> SeatReservationGateway for &T {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), GatewayError> {
        (**self).reserve_seats(account_id, seats)
    }
}

impl<T: SeatReservationGateway + ?Sized> SeatReservationGateway for Arc<T> {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), GatewayError> {
        (**self).reserve_seats(account_id, seats)
    }
}
