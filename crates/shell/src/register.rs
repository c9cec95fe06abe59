//! The interactive register loop: menu listings, order taking, receipts.
//!
//! Everything here is IO plumbing over the domain crates. Bad input is
//! reported and re-prompted; end of input unwinds cleanly.

use std::io::{BufRead, Write};

use chrono::Utc;

use slicepos_core::Entity;
use slicepos_menu::{Catalog, Pizza};
use slicepos_orders::{Order, OrderIdSequence, OrderType};

use crate::prompt::prompt;

/// One terminal session: the catalog, the id sequence and the orders
/// placed since startup.
pub struct Register {
    catalog: Catalog,
    ids: OrderIdSequence,
    placed: Vec<Order>,
}

impl Register {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ids: OrderIdSequence::new(),
            placed: Vec::new(),
        }
    }

    /// Orders placed this session, oldest first.
    pub fn placed(&self) -> &[Order] {
        &self.placed
    }

    /// Run the main loop until the operator exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        loop {
            let Some(choice) = prompt(input, out, "\n1. Create Order\n2. View Menu\n3. Exit\nChoice: ")?
            else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.take_order(input, out)?,
                "2" => self.print_menu(out)?,
                "3" => return Ok(()),
                other => writeln!(out, "Unrecognized choice '{other}', enter 1, 2 or 3.")?,
            }
        }
    }

    /// Numbered catalog listing with base prices.
    pub fn print_menu<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "--- Pizzas ---")?;
        for (i, pizza) in self.catalog.pizzas().iter().enumerate() {
            writeln!(out, "P{}. {} ({})", i + 1, pizza.name(), pizza.base_price())?;
        }
        writeln!(out, "--- Drinks ---")?;
        for (i, drink) in self.catalog.drinks().iter().enumerate() {
            writeln!(out, "D{}. {} ({})", i + 1, drink.name(), drink.base_price())?;
        }
        writeln!(out, "--- Side Dishes ---")?;
        for (i, side_dish) in self.catalog.side_dishes().iter().enumerate() {
            writeln!(out, "S{}. {} ({})", i + 1, side_dish.name(), side_dish.base_price())?;
        }
        Ok(())
    }

    fn print_toppings<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "--- Available Toppings ---")?;
        for (i, topping) in self.catalog.toppings().iter().enumerate() {
            writeln!(out, "{}. {} ({})", i + 1, topping.name(), topping.price())?;
        }
        Ok(())
    }

    fn take_order<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let mut order = Order::new(self.ids.next_id(), Utc::now());

        let Some(name) = prompt(input, out, "Customer name: ")? else {
            return Ok(());
        };
        order.set_customer_name(name);

        let Some(order_type) = self.ask_order_type(input, out)? else {
            return Ok(());
        };
        order.set_order_type(order_type);

        if order_type == OrderType::Delivery {
            let Some(address) = prompt(input, out, "Delivery Address: ")? else {
                return Ok(());
            };
            order.set_delivery_address(address);
        }

        loop {
            self.print_menu(out)?;
            let Some(category) = prompt(
                input,
                out,
                "Select item category: P - Pizza, D - Drink, S - Side Dish, X - Finish: ",
            )?
            else {
                break;
            };

            match category.to_ascii_lowercase().as_str() {
                "x" => break,
                "p" => {
                    let Some(index) = self.ask_index(input, out)? else {
                        break;
                    };
                    match self.catalog.pizza_copy(index) {
                        Ok(mut pizza) => {
                            self.customize_pizza(&mut pizza, input, out)?;
                            order.add_pizza(pizza);
                        }
                        Err(err) => writeln!(out, "{err}")?,
                    }
                }
                "d" => {
                    let Some(index) = self.ask_index(input, out)? else {
                        break;
                    };
                    match self.catalog.drink_copy(index) {
                        Ok(drink) => order.add_drink(drink),
                        Err(err) => writeln!(out, "{err}")?,
                    }
                }
                "s" => {
                    let Some(index) = self.ask_index(input, out)? else {
                        break;
                    };
                    match self.catalog.side_dish_copy(index) {
                        Ok(side_dish) => order.add_side_dish(side_dish),
                        Err(err) => writeln!(out, "{err}")?,
                    }
                }
                other => writeln!(out, "Unrecognized category '{other}', enter P, D, S or X.")?,
            }
        }

        let total = order.calculate_total();
        writeln!(out)?;
        writeln!(out, "{order}")?;

        tracing::info!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %total,
            "order placed"
        );
        self.placed.push(order);
        Ok(())
    }

    fn ask_order_type<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Option<OrderType>> {
        loop {
            let Some(reply) = prompt(
                input,
                out,
                "Order Type (0 - Dine In, 1 - Takeaway, 2 - Delivery): ",
            )?
            else {
                return Ok(None);
            };
            match reply.as_str() {
                "0" => return Ok(Some(OrderType::DineIn)),
                "1" => return Ok(Some(OrderType::Takeaway)),
                "2" => return Ok(Some(OrderType::Delivery)),
                other => writeln!(out, "Unrecognized order type '{other}', enter 0, 1 or 2.")?,
            }
        }
    }

    /// Ask for a 1-based menu position; returns the 0-based index.
    fn ask_index<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Option<usize>> {
        loop {
            let Some(reply) = prompt(input, out, "Enter index (starting from 1): ")? else {
                return Ok(None);
            };
            match reply.parse::<usize>() {
                Ok(n) if n >= 1 => return Ok(Some(n - 1)),
                _ => writeln!(out, "Enter a number from 1 upwards.")?,
            }
        }
    }

    fn customize_pizza<R: BufRead, W: Write>(
        &self,
        pizza: &mut Pizza,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<()> {
        self.print_toppings(out)?;
        loop {
            let Some(reply) = prompt(input, out, "Enter topping index to add (-1 to finish): ")?
            else {
                return Ok(());
            };
            if reply == "-1" {
                return Ok(());
            }
            let index = match reply.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(out, "Enter a topping number or -1 to finish.")?;
                    continue;
                }
            };
            match self.catalog.topping_copy(index) {
                Ok(topping) => pizza.add_topping(topping),
                Err(err) => writeln!(out, "{err}")?,
            }
        }
    }
}
