//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidPurchase;

/// Largest integer a JSON float can carry without losing precision.
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Identifier of the purchasing account.
///
/// Always a positive integer; there is no way to build a zero or negative id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct AccountId(NonZeroU64);

impl AccountId {
    /// Validate a signed integer as an account id.
    pub fn new(raw: i64) -> Result<Self, InvalidPurchase> {
        u64::try_from(raw)
            .map_err(|_| InvalidPurchase::InvalidAccount)
            .and_then(Self::try_from)
    }

    /// Validate an untyped value as an account id.
    ///
    /// Only JSON numbers without a fractional part are accepted, so `10` and
    /// `10.0` pass while `10.11`, `"1"` and `null` do not.
    pub fn from_value(value: &Value) -> Result<Self, InvalidPurchase> {
        let Value::Number(n) = value else {
            return Err(InvalidPurchase::InvalidAccount);
        };

        if let Some(u) = n.as_u64() {
            return Self::try_from(u);
        }
        if let Some(i) = n.as_i64() {
            return Self::new(i);
        }
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 && (1.0..=MAX_EXACT_FLOAT_INTEGER).contains(&f) => {
                Self::try_from(f as u64)
            }
            _ => Err(InvalidPurchase::InvalidAccount),
        }
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(InvalidPurchase::InvalidAccount)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.get()
    }
}

impl FromStr for AccountId {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|_| InvalidPurchase::InvalidAccount)?;
        Self::try_from(raw)
    }
}
