//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Immutability
///
/// Value objects should be **immutable** - once created, they don't change. To "modify"
/// a value object, create a new one with the new values. This keeps them safe to share
/// across threads and gives them value semantics (copy, compare, pass around like
/// primitives).
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: Value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: Value objects are compared by their attribute values
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Order {
///     quantity: u32,
///     item_price: f64,
/// }
///
/// impl ValueObject for Order {}
///
/// // Two orders with the same values are equal
/// let a = Order { quantity: 400, item_price: 1.0 };
/// let b = Order { quantity: 400, item_price: 1.0 };
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
