//! Purchase error model.

use thiserror::Error;

/// Result type used by the purchase pipeline.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Reasons a purchase attempt is rejected before anything is dispatched.
///
/// The display strings are stable and are surfaced verbatim to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// The account id is not a positive integer.
    #[error("Invalid account ID")]
    InvalidAccount,

    /// No ticket lines were supplied, or one of them is malformed.
    #[error("Invalid ticket type")]
    InvalidTicketRequest,

    /// Every ticket line has a quantity of zero.
    #[error("No tickets requested")]
    NoTickets,

    #[error("Tickets cannot be purchased without an Adult ticket")]
    NoAdult,

    #[error("Number of Infant tickets cannot be greater than number of Adult tickets")]
    TooManyInfants,

    /// The total quantity exceeds the configured per-purchase maximum.
    #[error("Maximum of {max} tickets per purchase")]
    TooManyTickets { max: u64 },
}

impl InvalidPurchase {
    /// Stable machine-readable code for adapters.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccount => "invalid_account",
            InvalidPurchase::InvalidTicketRequest => "invalid_ticket_request",
            InvalidPurchase::NoTickets => "no_tickets",
            InvalidPurchase::NoAdult => "no_adult",
            InvalidPurchase::TooManyInfants => "too_many_infants",
            InvalidPurchase::TooManyTickets { .. } => "too_many_tickets",
        }
    }

    /// True for the rejections raised by the count rules (after aggregation).
    pub fn is_count_rule(&self) -> bool {
        !matches!(
            self,
            InvalidPurchase::InvalidAccount | InvalidPurchase::InvalidTicketRequest
        )
    }
}

/// Error returned by a purchase call.
///
/// Gateway failures are carried as-is; callers can `downcast_ref` to the
/// collaborator's own error type.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Rejected(#[from] InvalidPurchase),

    #[error(transparent)]
    Gateway(#[from] anyhow::Error),
}

impl PurchaseError {
    /// The validation rejection, if this error is one.
    pub fn rejection(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::Rejected(r) => Some(r),
            PurchaseError::Gateway(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(InvalidPurchase::InvalidAccount.to_string(), "Invalid account ID");
        assert_eq!(
            InvalidPurchase::InvalidTicketRequest.to_string(),
            "Invalid ticket type"
        );
        assert_eq!(
            InvalidPurchase::TooManyTickets { max: 20 }.to_string(),
            "Maximum of 20 tickets per purchase"
        );
        assert_eq!(
            InvalidPurchase::NoAdult.to_string(),
            "Tickets cannot be purchased without an Adult ticket"
        );
    }

    #[test]
    fn gateway_errors_pass_through_unchanged() {
        #[derive(Debug, Error)]
        #[error("card declined")]
        struct Declined;

        let err = PurchaseError::from(anyhow::Error::new(Declined));
        assert_eq!(err.to_string(), "card declined");
        assert!(err.rejection().is_none());
        match err {
            PurchaseError::Gateway(inner) => assert!(inner.downcast_ref::<Declined>().is_some()),
            PurchaseError::Rejected(_) => panic!("Expected gateway error"),
        }
    }

    #[test]
    fn only_post_aggregation_rejections_are_count_rules() {
        assert!(!InvalidPurchase::InvalidAccount.is_count_rule());
        assert!(!InvalidPurchase::InvalidTicketRequest.is_count_rule());
        assert!(InvalidPurchase::NoTickets.is_count_rule());
        assert!(InvalidPurchase::TooManyTickets { max: 1 }.is_count_rule());
    }
}
