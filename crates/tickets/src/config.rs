//! Purchase configuration: prices, seat exemptions and the per-purchase cap.
//!
//! Configuration is read once at startup and is immutable for the lifetime of
//! a [`crate::TicketService`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

use crate::category::TicketCategory;

/// Default cap on tickets per purchase.
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Unit price per ticket category, in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl ValueObject for PriceTable {}

impl PriceTable {
    pub const fn new(adult: u64, child: u64, infant: u64) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    pub fn unit_price(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(20, 10, 0)
    }
}

/// Categories whose tickets do not occupy a reservable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatExemptSet(BTreeSet<TicketCategory>);

impl ValueObject for SeatExemptSet {}

impl SeatExemptSet {
    /// No category is exempt: every ticket takes a seat.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, category: TicketCategory) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = TicketCategory> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SeatExemptSet {
    fn default() -> Self {
        [TicketCategory::Infant].into_iter().collect()
    }
}

impl FromIterator<TicketCategory> for SeatExemptSet {
    fn from_iter<I: IntoIterator<Item = TicketCategory>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_tickets_per_purchase must be at least 1")]
    ZeroTicketCap,
}

/// Full configuration for [`crate::TicketService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketServiceConfig {
    pub prices: PriceTable,
    pub seat_exempt: SeatExemptSet,
    pub max_tickets_per_purchase: u64,
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            seat_exempt: SeatExemptSet::default(),
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl TicketServiceConfig {
    /// A cap of zero would reject every purchase, so it is refused up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets_per_purchase == 0 {
            return Err(ConfigError::ZeroTicketCap);
        }
        Ok(())
    }
}
