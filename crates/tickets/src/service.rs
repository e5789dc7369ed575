use serde::{Deserialize, Serialize};
use serde_json::Value;

use boxoffice_core::{AccountId, InvalidPurchase, PurchaseError, PurchaseResult};

use crate::config::{ConfigError, TicketServiceConfig};
use crate::gateway::{PaymentGateway, SeatReservationGateway};
use crate::line::TicketLine;
use crate::policy::{seats_to_reserve, total_price};
use crate::rules;
use crate::totals::CategoryTotals;

/// A validated account with its ticket lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    pub ticket_lines: Vec<TicketLine>,
}

/// A purchase request as received from an adapter, before any validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurchaseRequest {
    #[serde(default)]
    pub account_id: Value,
    #[serde(default)]
    pub ticket_lines: Value,
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmation {
    pub message: String,
    pub account_id: AccountId,
    pub tickets: CategoryTotals,
    pub total_price: u64,
    pub seats_reserved: u64,
}

impl PurchaseConfirmation {
    pub const SUCCESS: &'static str = "success";
}

/// Totals, price and seat count of a purchase that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub tickets: CategoryTotals,
    pub total_price: u64,
    pub seats_to_reserve: u64,
}

/// Validates, prices and dispatches ticket purchases.
///
/// Holds only read-only configuration and the two gateways; every call is
/// independent of every other.
#[derive(Debug)]
pub struct TicketService<P, S> {
    config: TicketServiceConfig,
    payments: P,
    seats: S,
}

impl<P, S> TicketService<P, S>
where
    P: PaymentGateway,
    S: SeatReservationGateway,
{
    pub fn new(config: TicketServiceConfig, payments: P, seats: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            payments,
            seats,
        })
    }

    /// Build with the default prices, cap and seat exemptions.
    pub fn with_defaults(payments: P, seats: S) -> Self {
        Self {
            config: TicketServiceConfig::default(),
            payments,
            seats,
        }
    }

    pub fn config(&self) -> &TicketServiceConfig {
        &self.config
    }

    /// Purchase tickets for `account_id`.
    ///
    /// Neither gateway is called unless every check passes. On success the
    /// payment gateway is called once, then the seat gateway once.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        lines: &[TicketLine],
    ) -> PurchaseResult<PurchaseConfirmation> {
        let account_id = AccountId::new(account_id)?;
        rules::ensure_lines_present(lines)?;
        self.settle(account_id, lines)
    }

    /// Purchase from an untyped request. The account id is checked before
    /// the shape of any ticket line.
    pub fn purchase(&self, request: &RawPurchaseRequest) -> PurchaseResult<PurchaseConfirmation> {
        let account_id = AccountId::from_value(&request.account_id)?;
        let lines = rules::validate_ticket_lines(&request.ticket_lines)?;
        self.settle(account_id, &lines)
    }

    /// Purchase from an already-typed request.
    pub fn purchase_request(
        &self,
        request: &PurchaseRequest,
    ) -> PurchaseResult<PurchaseConfirmation> {
        rules::ensure_lines_present(&request.ticket_lines)?;
        self.settle(request.account_id, &request.ticket_lines)
    }

    /// Price a purchase without dispatching it.
    pub fn quote(&self, lines: &[TicketLine]) -> Result<PurchaseQuote, InvalidPurchase> {
        rules::ensure_lines_present(lines)?;
        let tickets = CategoryTotals::from_lines(lines);
        rules::check_counts(&tickets, &self.config)?;
        Ok(PurchaseQuote {
            tickets,
            total_price: total_price(&tickets, &self.config.prices),
            seats_to_reserve: seats_to_reserve(&tickets, &self.config.seat_exempt),
        })
    }

    fn settle(
        &self,
        account_id: AccountId,
        lines: &[TicketLine],
    ) -> PurchaseResult<PurchaseConfirmation> {
        let quote = self.quote(lines)?;

        self.payments
            .make_payment(account_id, quote.total_price)
            .map_err(PurchaseError::Gateway)?;
        self.seats
            .reserve_seats(account_id, quote.seats_to_reserve)
            .map_err(PurchaseError::Gateway)?;

        Ok(PurchaseConfirmation {
            message: PurchaseConfirmation::SUCCESS.to_string(),
            account_id,
            tickets: quote.tickets,
            total_price: quote.total_price,
            seats_reserved: quote.seats_to_reserve,
        })
    }
}
