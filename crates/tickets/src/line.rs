use serde::{Deserialize, Serialize};
use serde_json::Value;

use boxoffice_core::{InvalidPurchase, ValueObject};

use crate::category::TicketCategory;

/// One (category, quantity) entry of a purchase request.
///
/// A quantity of zero is structurally valid and contributes nothing to totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketLine {
    category: TicketCategory,
    quantity: u32,
}

impl ValueObject for TicketLine {}

impl TicketLine {
    pub fn new(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    pub fn adult(quantity: u32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    pub fn child(quantity: u32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    pub fn infant(quantity: u32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    /// Accept an untyped value only if it has exactly the ticket line shape:
    /// `{"category": "ADULT" | "CHILD" | "INFANT", "quantity": <non-negative integer>}`.
    pub fn from_value(value: &Value) -> Result<Self, InvalidPurchase> {
        Self::deserialize(value).map_err(|_| InvalidPurchase::InvalidTicketRequest)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
