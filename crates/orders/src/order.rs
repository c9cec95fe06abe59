use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use slicepos_core::{DomainError, DomainResult, Entity, Money};
use slicepos_menu::{Drink, Pizza, SideDish};

use crate::sequence::OrderId;

/// Flat fee added to the total of delivery orders.
pub const DELIVERY_FEE: Money = Money::from_cents(300);

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    DineIn,
    Takeaway,
    Delivery,
}

impl core::fmt::Display for OrderType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            OrderType::DineIn => "Dine-in",
            OrderType::Takeaway => "Takeaway",
            OrderType::Delivery => "Delivery",
        };
        f.write_str(label)
    }
}

/// Order status lifecycle.
///
/// Valid edges: `Pending → Preparing → Ready → Delivered`, plus
/// `Cancelled` from any non-terminal state. `Delivered` and `Cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The validated transition table.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Preparing)
            | (OrderStatus::Preparing, OrderStatus::Ready)
            | (OrderStatus::Ready, OrderStatus::Delivered) => true,
            (from, OrderStatus::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// One customer transaction: owned item copies plus metadata.
///
/// The order exclusively owns its items. They are deep copies taken from
/// the catalog, so mutating them (or the catalog) never affects the other
/// side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    order_type: OrderType,
    status: OrderStatus,
    delivery_address: Option<String>,
    pizzas: Vec<Pizza>,
    drinks: Vec<Drink>,
    side_dishes: Vec<SideDish>,
    delivery_fee: Money,
    total_amount: Money,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// New empty order: `Pending`, dine-in, zero fee and total.
    ///
    /// `placed_at` is business time supplied by the caller, which keeps the
    /// aggregate deterministic under test.
    pub fn new(id: OrderId, placed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: String::new(),
            order_type: OrderType::default(),
            status: OrderStatus::Pending,
            delivery_address: None,
            pizzas: Vec::new(),
            drinks: Vec::new(),
            side_dishes: Vec::new(),
            delivery_fee: Money::ZERO,
            total_amount: Money::ZERO,
            placed_at,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn delivery_address(&self) -> Option<&str> {
        self.delivery_address.as_deref()
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

    /// Fee last computed by [`Order::calculate_total`]. Zero unless the
    /// order was a delivery at that point.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Total last computed by [`Order::calculate_total`].
    ///
    /// Cached: valid immediately after that call, stale if items are
    /// mutated afterwards without recomputation. Callers that mutate must
    /// recompute before rendering.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn item_count(&self) -> usize {
        self.pizzas.len() + self.drinks.len() + self.side_dishes.len()
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = Some(address.into());
    }

    /// Append an owned pizza copy. No limit on quantity or duplicates.
    pub fn add_pizza(&mut self, pizza: Pizza) {
        self.pizzas.push(pizza);
    }

    pub fn add_drink(&mut self, drink: Drink) {
        self.drinks.push(drink);
    }

    pub fn add_side_dish(&mut self, side_dish: SideDish) {
        self.side_dishes.push(side_dish);
    }

    /// Move the order along its lifecycle.
    ///
    /// Only the edges in [`OrderStatus::can_transition_to`] are accepted;
    /// anything else (including self-transitions and moves out of a
    /// terminal state) is an invariant violation and leaves the status
    /// unchanged.
    pub fn update_status(&mut self, next: OrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "illegal status transition: {} -> {}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    /// Recompute the cached total from scratch.
    ///
    /// Sums every owned item's price, then sets the delivery fee from the
    /// *current* order type: $3.00 for deliveries, zero otherwise, so a
    /// type change away from delivery drops the fee on the next call.
    /// Idempotent absent intervening mutation.
    pub fn calculate_total(&mut self) -> Money {
        let items: Money = self.pizzas.iter().map(Pizza::price).sum::<Money>()
            + self.drinks.iter().map(Drink::price).sum::<Money>()
            + self.side_dishes.iter().map(SideDish::price).sum::<Money>();

        self.delivery_fee = if self.order_type == OrderType::Delivery {
            DELIVERY_FEE
        } else {
            Money::ZERO
        };
        self.total_amount = items + self.delivery_fee;
        self.total_amount
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

/// Receipt-style rendering. Read-only: shows the cached total and fee
/// without recomputing them.
impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order #{} for {} [{} | {}]",
            self.id, self.customer_name, self.order_type, self.status
        )?;
        for pizza in &self.pizzas {
            write!(f, "\n{pizza}")?;
        }
        for drink in &self.drinks {
            write!(f, "\n{drink}")?;
        }
        for side in &self.side_dishes {
            write!(f, "\n{side}")?;
        }
        if self.order_type == OrderType::Delivery {
            write!(
                f,
                "\nDelivery Address: {} | Fee: {}",
                self.delivery_address.as_deref().unwrap_or("(not set)"),
                self.delivery_fee
            )?;
        }
        write!(f, "\nTotal: {}", self.total_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicepos_menu::{PizzaSize, Topping};

    fn test_time() -> DateTime<Utc> {
        "2025-03-01T12:00:00Z".parse().unwrap()
    }

    fn test_order() -> Order {
        Order::new(OrderId::new(1), test_time())
    }

    fn pepperoni() -> Pizza {
        Pizza::new("Pepperoni", Money::from_cents(750))
    }

    fn cola() -> Drink {
        Drink::new("Cola", Money::from_cents(200), 0.5, true)
    }

    fn nuggets() -> SideDish {
        SideDish::new("Nuggets", Money::from_cents(400), "Large")
    }

    #[test]
    fn new_order_is_pending_and_empty() {
        let order = test_order();
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.order_type(), OrderType::DineIn);
        assert_eq!(order.item_count(), 0);
        assert_eq!(order.total_amount(), Money::ZERO);
        assert_eq!(order.delivery_fee(), Money::ZERO);
        assert_eq!(order.placed_at(), test_time());
    }

    #[test]
    fn delivery_order_adds_the_flat_fee() {
        let mut order = test_order();
        order.set_customer_name("Alice");
        order.set_order_type(OrderType::Delivery);
        order.set_delivery_address("1 Main St");
        order.add_pizza(pepperoni());

        // $7.50 + $3.00
        assert_eq!(order.calculate_total(), Money::from_cents(1050));
        assert_eq!(order.delivery_fee(), DELIVERY_FEE);
        assert_eq!(order.total_amount(), Money::from_cents(1050));
    }

    #[test]
    fn non_delivery_order_has_no_fee() {
        let mut order = test_order();
        order.set_order_type(OrderType::Takeaway);
        order.add_pizza(pepperoni());
        order.add_drink(cola());
        order.add_side_dish(nuggets());

        // $7.50 + $2.00 + $5.50
        assert_eq!(order.calculate_total(), Money::from_cents(1500));
        assert_eq!(order.delivery_fee(), Money::ZERO);
    }

    #[test]
    fn calculate_total_is_idempotent() {
        let mut order = test_order();
        order.set_order_type(OrderType::Delivery);
        order.add_pizza(pepperoni());

        let first = order.calculate_total();
        let second = order.calculate_total();
        assert_eq!(first, second);
        assert_eq!(order.total_amount(), first);
    }

    #[test]
    fn switching_away_from_delivery_drops_the_fee_on_recompute() {
        let mut order = test_order();
        order.set_order_type(OrderType::Delivery);
        order.add_pizza(pepperoni());
        order.calculate_total();
        assert_eq!(order.delivery_fee(), DELIVERY_FEE);

        order.set_order_type(OrderType::DineIn);
        assert_eq!(order.calculate_total(), Money::from_cents(750));
        assert_eq!(order.delivery_fee(), Money::ZERO);
    }

    #[test]
    fn total_goes_stale_until_recomputed() {
        let mut order = test_order();
        order.add_pizza(pepperoni());
        order.calculate_total();
        assert_eq!(order.total_amount(), Money::from_cents(750));

        order.add_drink(cola());
        // Cached value is now stale; rendering would still show $7.50.
        assert_eq!(order.total_amount(), Money::from_cents(750));

        order.calculate_total();
        assert_eq!(order.total_amount(), Money::from_cents(950));
    }

    #[test]
    fn customized_pizza_prices_flow_into_the_total() {
        let mut pizza = pepperoni();
        pizza.set_size(PizzaSize::Large);
        pizza.add_topping(Topping::new("Bacon", Money::from_cents(80)));

        let mut order = test_order();
        order.add_pizza(pizza);

        // $7.50 + $3.00 + $0.80
        assert_eq!(order.calculate_total(), Money::from_cents(1130));
    }

    #[test]
    fn happy_path_lifecycle() {
        let mut order = test_order();
        order.update_status(OrderStatus::Preparing).unwrap();
        order.update_status(OrderStatus::Ready).unwrap();
        order.update_status(OrderStatus::Delivered).unwrap();
        assert_eq!(order.status(), OrderStatus::Delivered);
    }

    #[test]
    fn cancel_is_reachable_from_every_non_terminal_state() {
        for advance in 0..3usize {
            let mut order = test_order();
            let path = [OrderStatus::Preparing, OrderStatus::Ready];
            for next in path.iter().take(advance) {
                order.update_status(*next).unwrap();
            }
            order.update_status(OrderStatus::Cancelled).unwrap();
            assert_eq!(order.status(), OrderStatus::Cancelled);
        }
    }

    #[test]
    fn illegal_transition_is_rejected_and_leaves_status_unchanged() {
        let mut order = test_order();
        let err = order.update_status(OrderStatus::Ready).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => {
                assert!(msg.contains("Pending -> Ready"));
            }
            _ => panic!("Expected InvariantViolation for illegal transition"),
        }
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn self_transition_is_rejected() {
        let mut order = test_order();
        assert!(order.update_status(OrderStatus::Pending).is_err());
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn terminal_states_admit_no_exit() {
        let mut delivered = test_order();
        delivered.update_status(OrderStatus::Preparing).unwrap();
        delivered.update_status(OrderStatus::Ready).unwrap();
        delivered.update_status(OrderStatus::Delivered).unwrap();
        assert!(delivered.update_status(OrderStatus::Cancelled).is_err());
        assert!(delivered.update_status(OrderStatus::Pending).is_err());

        let mut cancelled = test_order();
        cancelled.update_status(OrderStatus::Cancelled).unwrap();
        assert!(cancelled.update_status(OrderStatus::Preparing).is_err());
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn display_renders_the_cached_total_without_recomputing() {
        let mut order = test_order();
        order.set_customer_name("Bob");
        order.set_order_type(OrderType::Delivery);
        order.set_delivery_address("1 Main St");
        order.add_pizza(pepperoni());
        order.calculate_total();

        let rendered = order.to_string();
        assert_eq!(
            rendered,
            "Order #1 for Bob [Delivery | Pending]\n\
             Pizza: Pepperoni | Size: Medium | Base: Traditional | Price: $7.50\n\
             Delivery Address: 1 Main St | Fee: $3.00\n\
             Total: $10.50"
        );

        // Mutation without recomputation: the rendering stays on the
        // cached value.
        order.add_drink(cola());
        assert!(order.to_string().ends_with("Total: $10.50"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_order_type() -> impl Strategy<Value = OrderType> {
            prop_oneof![
                Just(OrderType::DineIn),
                Just(OrderType::Takeaway),
                Just(OrderType::Delivery),
            ]
        }

        fn arb_status() -> impl Strategy<Value = OrderStatus> {
            prop_oneof![
                Just(OrderStatus::Pending),
                Just(OrderStatus::Preparing),
                Just(OrderStatus::Ready),
                Just(OrderStatus::Delivered),
                Just(OrderStatus::Cancelled),
            ]
        }

        proptest! {
            /// Property: total == Σ item prices + fee, fee == $3.00 iff delivery.
            #[test]
            fn total_is_item_sum_plus_fee(
                order_type in arb_order_type(),
                pizza_prices in prop::collection::vec(-500i64..5_000, 0..6),
                drink_prices in prop::collection::vec(0i64..1_000, 0..6),
                side_prices in prop::collection::vec(0i64..1_000, 0..6),
            ) {
                let mut order = Order::new(OrderId::new(7), test_time());
                order.set_order_type(order_type);

                let mut expected = 0i64;
                for cents in &pizza_prices {
                    order.add_pizza(Pizza::new("P", Money::from_cents(*cents)));
                    expected += cents;
                }
                for cents in &drink_prices {
                    order.add_drink(Drink::new("D", Money::from_cents(*cents), 0.3, false));
                    expected += cents;
                }
                for cents in &side_prices {
                    order.add_side_dish(SideDish::new("S", Money::from_cents(*cents), "Medium"));
                    expected += cents;
                }

                let total = order.calculate_total();

                let fee = if order_type == OrderType::Delivery { 300 } else { 0 };
                prop_assert_eq!(order.delivery_fee().cents(), fee);
                prop_assert_eq!(total.cents(), expected + fee);
                prop_assert_eq!(order.calculate_total(), total);
            }

            /// Property: no sequence of transition attempts escapes a
            /// terminal state, and every accepted move is a table edge.
            #[test]
            fn transitions_never_escape_terminal_states(
                attempts in prop::collection::vec(arb_status(), 0..12)
            ) {
                let mut order = Order::new(OrderId::new(7), test_time());
                for next in attempts {
                    let before = order.status();
                    let moved = order.update_status(next).is_ok();
                    if before.is_terminal() {
                        prop_assert!(!moved);
                        prop_assert_eq!(order.status(), before);
                    } else if moved {
                        prop_assert!(before.can_transition_to(next));
                        prop_assert_eq!(order.status(), next);
                    } else {
                        prop_assert_eq!(order.status(), before);
                    }
                }
            }
        }
    }
}
