use serde::{Deserialize, Serialize};

use slicepos_core::{Money, ValueObject};

/// A side dish. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideDish {
    name: String,
    base_price: Money,
    portion: String,
}

impl SideDish {
    pub fn new(name: impl Into<String>, base_price: Money, portion: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_price,
            portion: portion.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn portion(&self) -> &str {
        &self.portion
    }

    /// Base price plus $1.50 for the literal portion `"Large"`.
    ///
    /// The match is exact and case-sensitive: `"large"` or `"LARGE"` get no
    /// surcharge. Inherited quirk, kept as-is.
    pub fn price(&self) -> Money {
        let surcharge = if self.portion == "Large" {
            Money::from_cents(150)
        } else {
            Money::ZERO
        };
        self.base_price + surcharge
    }
}

impl ValueObject for SideDish {}

impl core::fmt::Display for SideDish {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Side Dish: {} | Portion: {} | Price: {}",
            self.name,
            self.portion,
            self.price()
        )
    }
}
