use serde::{Deserialize, Serialize};

use slicepos_core::{DomainError, DomainResult, Money};

use crate::drink::Drink;
use crate::pizza::Pizza;
use crate::side_dish::SideDish;
use crate::topping::Topping;

/// Catalog seed data.
///
/// The starter set is configuration, not logic: a deployment can load its
/// own menu from JSON instead of the built-in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub pizzas: Vec<Pizza>,
    pub drinks: Vec<Drink>,
    pub side_dishes: Vec<SideDish>,
    pub toppings: Vec<Topping>,
}

impl CatalogConfig {
    /// The built-in starter menu.
    pub fn standard() -> Self {
        Self {
            pizzas: vec![
                Pizza::new("Margherita", Money::from_cents(600)),
                Pizza::new("Pepperoni", Money::from_cents(750)),
                Pizza::new("Vegetarian", Money::from_cents(700)),
            ],
            drinks: vec![
                Drink::new("Cola", Money::from_cents(200), 0.5, true),
                Drink::new("Juice", Money::from_cents(250), 0.3, false),
            ],
            side_dishes: vec![
                SideDish::new("Fries", Money::from_cents(300), "Medium"),
                SideDish::new("Nuggets", Money::from_cents(400), "Large"),
            ],
            toppings: vec![
                Topping::new("Mushrooms", Money::from_cents(50)),
                Topping::new("Olives", Money::from_cents(40)),
                Topping::new("Bacon", Money::from_cents(80)),
            ],
        }
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog config: {e}")))
    }
}

/// The fixed set of purchasable prototype items.
///
/// Seeded once at construction and immutable for the process lifetime.
/// Consumers never get references into the catalog to mutate: the `*_copy`
/// accessors hand out independent clones, so customizing an order item can
/// never bleed back into a prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pizzas: Vec<Pizza>,
    drinks: Vec<Drink>,
    side_dishes: Vec<SideDish>,
    toppings: Vec<Topping>,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            pizzas: config.pizzas,
            drinks: config.drinks,
            side_dishes: config.side_dishes,
            toppings: config.toppings,
        }
    }

    /// Catalog seeded with the built-in starter menu.
    pub fn standard() -> Self {
        Self::new(CatalogConfig::standard())
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn side_dishes(&self) -> &[SideDish] {
        &self.side_dishes
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Independent copy of the pizza prototype at `index` (0-based).
    pub fn pizza_copy(&self, index: usize) -> DomainResult<Pizza> {
        Self::copy_at(&self.pizzas, index)
    }

    /// Independent copy of the drink prototype at `index` (0-based).
    pub fn drink_copy(&self, index: usize) -> DomainResult<Drink> {
        Self::copy_at(&self.drinks, index)
    }

    /// Independent copy of the side-dish prototype at `index` (0-based).
    pub fn side_dish_copy(&self, index: usize) -> DomainResult<SideDish> {
        Self::copy_at(&self.side_dishes, index)
    }

    /// Independent copy of the topping prototype at `index` (0-based).
    pub fn topping_copy(&self, index: usize) -> DomainResult<Topping> {
        Self::copy_at(&self.toppings, index)
    }

    fn copy_at<T: Clone>(items: &[T], index: usize) -> DomainResult<T> {
        items
            .get(index)
            .cloned()
            .ok_or_else(|| DomainError::out_of_range(index, items.len()))
    }
}
