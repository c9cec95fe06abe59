use serde::{Deserialize, Serialize};

use slicepos_core::Money;

use crate::drink::Drink;
use crate::pizza::Pizza;
use crate::side_dish::SideDish;

/// Any purchasable catalog entry.
///
/// A tagged sum over the item kinds: pricing dispatches exhaustively, so
/// adding a new kind is a compile error until every match arm is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuItem {
    Pizza(Pizza),
    Drink(Drink),
    SideDish(SideDish),
}

impl MenuItem {
    pub fn name(&self) -> &str {
        match self {
            MenuItem::Pizza(p) => p.name(),
            MenuItem::Drink(d) => d.name(),
            MenuItem::SideDish(s) => s.name(),
        }
    }

    pub fn base_price(&self) -> Money {
        match self {
            MenuItem::Pizza(p) => p.base_price(),
            MenuItem::Drink(d) => d.base_price(),
            MenuItem::SideDish(s) => s.base_price(),
        }
    }

    /// The item's full price from its own attribute-driven rules.
    pub fn price(&self) -> Money {
        match self {
            MenuItem::Pizza(p) => p.price(),
            MenuItem::Drink(d) => d.price(),
            MenuItem::SideDish(s) => s.price(),
        }
    }
}

impl From<Pizza> for MenuItem {
    fn from(pizza: Pizza) -> Self {
        MenuItem::Pizza(pizza)
    }
}

impl From<Drink> for MenuItem {
    fn from(drink: Drink) -> Self {
        MenuItem::Drink(drink)
    }
}

impl From<SideDish> for MenuItem {
    fn from(side: SideDish) -> Self {
        MenuItem::SideDish(side)
    }
}

impl core::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MenuItem::Pizza(p) => p.fmt(f),
            MenuItem::Drink(d) => d.fmt(f),
            MenuItem::SideDish(s) => s.fmt(f),
        }
    }
}
