//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain values compared entirely by their
/// attributes: two `Topping { "Olives", $0.40 }` values are the same
/// topping. They move between catalog and order by cloning, never by
/// sharing, which is what keeps catalog prototypes independent of the
/// copies living inside orders.
///
/// Contrast with [`crate::Entity`], where identity persists across state
/// changes: an order stays the same order while its status moves.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
