//! Purchase validation.
//!
//! Structural checks run on the raw ticket lines; count rules run afterwards
//! on the aggregated [`CategoryTotals`]. Every check fails fast and the first
//! violation decides the single error returned.

use serde_json::Value;

use boxoffice_core::InvalidPurchase;

use crate::config::TicketServiceConfig;
use crate::line::TicketLine;
use crate::totals::CategoryTotals;

/// A single check over aggregated totals.
pub type CountRule = fn(&CategoryTotals, &TicketServiceConfig) -> Result<(), InvalidPurchase>;

/// Count rules in evaluation order. Append new rules at the end.
pub const COUNT_RULES: &[CountRule] = &[
    ensure_some_tickets,
    ensure_adult_present,
    ensure_infants_have_laps,
    ensure_within_cap,
];

/// Rejects an empty request.
pub fn ensure_lines_present<T>(lines: &[T]) -> Result<(), InvalidPurchase> {
    if lines.is_empty() {
        return Err(InvalidPurchase::InvalidTicketRequest);
    }
    Ok(())
}

/// Structural check for untyped ticket lines. Anything other than a
/// non-empty array of well-formed lines is an invalid ticket request.
pub fn validate_ticket_lines(raw: &Value) -> Result<Vec<TicketLine>, InvalidPurchase> {
    let Value::Array(items) = raw else {
        return Err(InvalidPurchase::InvalidTicketRequest);
    };
    ensure_lines_present(items)?;
    items.iter().map(TicketLine::from_value).collect()
}

/// Run every count rule in order, stopping at the first failure.
pub fn check_counts(
    totals: &CategoryTotals,
    config: &TicketServiceConfig,
) -> Result<(), InvalidPurchase> {
    COUNT_RULES.iter().try_for_each(|rule| rule(totals, config))
}

fn ensure_some_tickets(
    totals: &CategoryTotals,
    _config: &TicketServiceConfig,
) -> Result<(), InvalidPurchase> {
    if totals.total() == 0 {
        return Err(InvalidPurchase::NoTickets);
    }
    Ok(())
}

fn ensure_adult_present(
    totals: &CategoryTotals,
    _config: &TicketServiceConfig,
) -> Result<(), InvalidPurchase> {
    if totals.adult == 0 {
        return Err(InvalidPurchase::NoAdult);
    }
    Ok(())
}

// Each infant sits on an adult's lap.
fn ensure_infants_have_laps(
    totals: &CategoryTotals,
    _config: &TicketServiceConfig,
) -> Result<(), InvalidPurchase> {
    if totals.infant > totals.adult {
        return Err(InvalidPurchase::TooManyInfants);
    }
    Ok(())
}

fn ensure_within_cap(
    totals: &CategoryTotals,
    config: &TicketServiceConfig,
) -> Result<(), InvalidPurchase> {
    let max = config.max_tickets_per_purchase;
    if totals.total() > max {
        return Err(InvalidPurchase::TooManyTickets { max });
    }
    Ok(())
}
