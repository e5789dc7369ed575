//! `boxoffice-core` — shared building blocks for ticket purchasing.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{InvalidPurchase, PurchaseError, PurchaseResult};
pub use id::AccountId;
pub use value_object::ValueObject;
