//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket lines
/// with the same category and quantity are interchangeable. To "change" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PriceTable { adult: u64, child: u64, infant: u64 }
///
/// impl ValueObject for PriceTable {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
