use serde::{Deserialize, Serialize};

use slicepos_core::{Money, ValueObject};

use crate::topping::Topping;

/// Pizza size. The surcharge is applied on top of the base price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PizzaSize {
    /// Size adjustment: Large +$3, Small −$2, Medium unchanged.
    pub fn surcharge(self) -> Money {
        match self {
            PizzaSize::Small => Money::from_cents(-200),
            PizzaSize::Medium => Money::ZERO,
            PizzaSize::Large => Money::from_cents(300),
        }
    }
}

impl core::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        };
        f.write_str(label)
    }
}

/// Dough base. Informational: it never affects the price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaBase {
    Thin,
    #[default]
    Traditional,
    Thick,
}

impl core::fmt::Display for PizzaBase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            PizzaBase::Thin => "Thin",
            PizzaBase::Traditional => "Traditional",
            PizzaBase::Thick => "Thick",
        };
        f.write_str(label)
    }
}

/// A pizza: catalog prototype or a customized copy living inside an order.
///
/// Catalog prototypes start `Medium` / `Traditional` with no toppings; a
/// copy handed out by the catalog can then be customized freely before it
/// is added to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    name: String,
    base_price: Money,
    #[serde(default)]
    size: PizzaSize,
    #[serde(default)]
    base: PizzaBase,
    #[serde(default)]
    toppings: Vec<Topping>,
}

impl Pizza {
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        Self {
            name: name.into(),
            base_price,
            size: PizzaSize::default(),
            base: PizzaBase::default(),
            toppings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn size(&self) -> PizzaSize {
        self.size
    }

    pub fn base(&self) -> PizzaBase {
        self.base
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn set_size(&mut self, size: PizzaSize) {
        self.size = size;
    }

    pub fn set_base(&mut self, base: PizzaBase) {
        self.base = base;
    }

    /// Append a topping. Duplicates are allowed and each one is charged.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    /// Remove every topping whose name matches exactly (case-sensitive).
    /// No-op when nothing matches.
    pub fn remove_topping(&mut self, name: &str) {
        self.toppings.retain(|t| t.name() != name);
    }

    /// Base price, plus the size surcharge, plus every topping.
    ///
    /// Not floored at zero: a Small pizza with a base price under $2 prices
    /// negative.
    pub fn price(&self) -> Money {
        let toppings: Money = self.toppings.iter().map(Topping::price).sum();
        self.base_price + self.size.surcharge() + toppings
    }
}

impl ValueObject for Pizza {}

impl core::fmt::Display for Pizza {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Pizza: {} | Size: {} | Base: {} | Price: {}",
            self.name,
            self.size,
            self.base,
            self.price()
        )?;
        if !self.toppings.is_empty() {
            let names: Vec<&str> = self.toppings.iter().map(Topping::name).collect();
            write!(f, " | Toppings: {}", names.join(", "))?;
        }
        Ok(())
    }
}
