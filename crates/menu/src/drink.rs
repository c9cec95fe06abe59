use serde::{Deserialize, Serialize};

use slicepos_core::{Money, ValueObject};

/// A drink. Immutable once constructed: there is nothing to customize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    base_price: Money,
    /// Volume in litres; catalog data keeps this positive.
    volume_liters: f64,
    carbonated: bool,
}

impl Drink {
    pub fn new(
        name: impl Into<String>,
        base_price: Money,
        volume_liters: f64,
        carbonated: bool,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            volume_liters,
            carbonated,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn volume_liters(&self) -> f64 {
        self.volume_liters
    }

    pub fn carbonated(&self) -> bool {
        self.carbonated
    }

    /// Base price plus $1.00 for anything strictly over half a litre.
    /// Exactly 0.5 L gets no surcharge. Carbonation never affects price.
    pub fn price(&self) -> Money {
        let surcharge = if self.volume_liters > 0.5 {
            Money::from_cents(100)
        } else {
            Money::ZERO
        };
        self.base_price + surcharge
    }
}

impl ValueObject for Drink {}

impl core::fmt::Display for Drink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Drink: {} | Volume: {}L | {} | Price: {}",
            self.name,
            self.volume_liters,
            if self.carbonated { "Carbonated" } else { "Still" },
            self.price()
        )
    }
}
