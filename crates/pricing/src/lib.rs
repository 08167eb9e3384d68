//! Order pricing domain module.
//!
//! This crate contains the business rules for pricing a single order,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod order;
pub mod quote;

pub use order::Order;
pub use quote::{
    DISCOUNT_RATE, DISCOUNT_THRESHOLD, OrderRecord, Quote, SHIPPING_CAP, SHIPPING_RATE, price,
    quote,
};
