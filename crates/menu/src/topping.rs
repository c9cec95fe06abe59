use serde::{Deserialize, Serialize};

use slicepos_core::{Money, ValueObject};

/// An extra that can be added to a pizza.
///
/// Immutable value: customizing a pizza clones toppings out of the catalog,
/// so every pizza carries its own independent topping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    name: String,
    price: Money,
}

impl Topping {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl ValueObject for Topping {}
