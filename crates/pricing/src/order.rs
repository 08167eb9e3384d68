use serde::{Deserialize, Serialize};

use tally_core::{DomainError, DomainResult, ValueObject};

use crate::quote::{self, OrderRecord, Quote};

/// Value object: an order priced by the rules in [`crate::quote`].
///
/// Immutable once constructed; no identity beyond its field values. The
/// record is validated once at construction, so every accessor is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "OrderRecord", try_from = "OrderRecord")]
pub struct Order {
    record: OrderRecord,
}

impl Order {
    /// Build an order from a record, validating it up front.
    pub fn new(record: OrderRecord) -> DomainResult<Self> {
        record.validate()?;
        Ok(Self { record })
    }

    /// Units ordered, verbatim from the source record.
    pub fn quantity(&self) -> u32 {
        self.record.quantity
    }

    /// Per-unit price, verbatim from the source record.
    pub fn item_price(&self) -> f64 {
        self.record.item_price
    }

    /// Total charge for this order.
    ///
    /// Computed on each read (never cached) by delegating to [`crate::quote`].
    pub fn price(&self) -> f64 {
        self.quote().total
    }

    /// Itemized form of [`Order::price`].
    pub fn quote(&self) -> Quote {
        quote::compute(self.record.quantity, self.record.item_price)
    }
}

impl ValueObject for Order {}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        order.record
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> DomainResult<Self> {
        Self::new(record)
    }
}
