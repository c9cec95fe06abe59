//! Order domain module.
//!
//! This crate contains the order aggregate and its lifecycle rules,
//! implemented purely as deterministic domain logic (no IO, no prompts,
//! no storage).

pub mod order;
pub mod sequence;

pub use order::{DELIVERY_FEE, Order, OrderStatus, OrderType};
pub use sequence::{OrderId, OrderIdSequence};
