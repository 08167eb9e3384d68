use serde::{Deserialize, Serialize};

use tally_core::{DomainError, DomainResult};

/// Shipping surcharge rate applied to the base price.
pub const SHIPPING_RATE: f64 = 0.10;

/// Flat cap on the shipping surcharge, in currency units.
pub const SHIPPING_CAP: f64 = 100.0;

/// Unit count a quantity must exceed before the volume discount applies.
pub const DISCOUNT_THRESHOLD: u32 = 500;

/// Discount rate applied to the per-unit price of units beyond the threshold.
pub const DISCOUNT_RATE: f64 = 0.05;

/// Plain order record: the two inputs of the pricing calculation.
///
/// Serializes with camelCase field names (`quantity`, `itemPrice`), the wire
/// shape this module prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Units ordered.
    pub quantity: u32,
    /// Price per unit, in minor-unit-agnostic currency terms.
    pub item_price: f64,
}

impl OrderRecord {
    pub fn new(quantity: u32, item_price: f64) -> Self {
        Self {
            quantity,
            item_price,
        }
    }

    /// Check the record against the calculation's numeric domain.
    ///
    /// Policy: malformed input is rejected, never clamped.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.item_price.is_finite() {
            return Err(DomainError::validation("item_price must be finite"));
        }
        if self.item_price < 0.0 {
            return Err(DomainError::validation("item_price must be non-negative"));
        }
        Ok(())
    }
}

/// Itemized result of one pricing computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// `quantity * item_price`, before shipping and discount.
    pub base_price: f64,
    /// [`SHIPPING_RATE`] of the base price, capped at [`SHIPPING_CAP`].
    pub shipping: f64,
    /// [`DISCOUNT_RATE`] of the per-unit price, for units beyond
    /// [`DISCOUNT_THRESHOLD`].
    pub discount: f64,
    /// `base_price + shipping - discount`.
    pub total: f64,
}

/// Price an order record, itemized.
pub fn quote(record: &OrderRecord) -> DomainResult<Quote> {
    record.validate()?;

    let quote = compute(record.quantity, record.item_price);
    tracing::trace!(
        quantity = record.quantity,
        item_price = record.item_price,
        base_price = quote.base_price,
        shipping = quote.shipping,
        discount = quote.discount,
        total = quote.total,
        "priced order"
    );

    Ok(quote)
}

/// Price an order record, total only.
pub fn price(record: &OrderRecord) -> DomainResult<f64> {
    Ok(quote(record)?.total)
}

/// The pricing rule itself. Assumes a validated record.
pub(crate) fn compute(quantity: u32, item_price: f64) -> Quote {
    let base_price = f64::from(quantity) * item_price;
    let shipping = (base_price * SHIPPING_RATE).min(SHIPPING_CAP);
    let discount = if quantity > DISCOUNT_THRESHOLD {
        f64::from(quantity - DISCOUNT_THRESHOLD) * item_price * DISCOUNT_RATE
    } else {
        0.0
    };

    Quote {
        base_price,
        shipping,
        discount,
        total: base_price + shipping - discount,
    }
}
