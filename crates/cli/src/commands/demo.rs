//! The full restaurant walkthrough.
//!
//! Exercises every part of the domain once, in the order a shift would:
//! menu upkeep, a guest's order, table bookings, the staff chain, queued
//! kitchen commands, stock, payments, loyalty, and the closing reports.

use std::path::Path;

use bistro_core::{
    AutoReplenish, BasicLoyalty, COOK_DISH, Console, InventoryItem, InventoryReport,
    LoyaltyAccount, LoyaltyBundle, MenuItem, OrderInvoker, OrderReport, OrderStatus,
    PaymentMethod, PaymentSystem, Period, PremiumLoyalty, PrepareOrder, Price, RegularReplenish,
    Report, ReservationKind, Restaurant, RestaurantError, SalesReport, Sink, StaffRole,
    Statistics, Supplier, TAKE_ORDER, TakeOrder,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::menu::menu_or_default;
use crate::config::BistroConfig;

/// Run the walkthrough against stdout.
///
/// # Errors
///
/// Returns an error if the menu file cannot be loaded or a step that must
/// succeed fails.
pub fn run(
    config: &BistroConfig,
    menu_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut restaurant = Restaurant::with_default_staff();
    restaurant.set_menu(menu_or_default(menu_file)?);

    let mut console = Console::new(config.locale, config.currency.clone());
    scenario(&mut restaurant, config, Utc::now(), &mut console)?;
    Ok(())
}

/// Play the shift on `restaurant`, emitting everything into `sink`.
///
/// # Errors
///
/// Returns [`RestaurantError`] if a step that must succeed fails. Expected
/// refusals (the unknown booking type, the oversized redemption) are logged
/// and the walkthrough continues.
pub fn scenario(
    restaurant: &mut Restaurant,
    config: &BistroConfig,
    now: DateTime<Utc>,
    sink: &mut dyn Sink,
) -> Result<(), RestaurantError> {
    info!("Starting walkthrough");

    // Menu upkeep
    let special = MenuItem::dish("Tiramisu", Price::from_cents(650)).of_kind("dessert");
    restaurant.menu_mut().add(special.clone());
    restaurant.menu().announce(sink);
    restaurant.menu_mut().remove(&special, sink);
    restaurant.menu_mut().remove(&special, sink);
    restaurant.menu().announce(sink);

    // A guest orders
    let anna = restaurant.add_client("Anna", "anna@example.com");
    let mut items: Vec<MenuItem> = restaurant
        .menu()
        .list()
        .into_iter()
        .take(2)
        .cloned()
        .collect();
    if let Some(first) = items.first_mut() {
        *first = first.clone().with_option("Extra cheese", Price::from_cents(150));
    }

    let order = restaurant.open_order(anna, now, sink)?;
    for item in items {
        order.add_item(item);
    }
    let order_id = order.id();
    let total = order.total();
    for status in [
        OrderStatus::in_progress(),
        OrderStatus::ready(),
        OrderStatus::served(),
    ] {
        order.change_status(status, sink);
    }

    // Bookings, one of each type and one the factory refuses
    for kind in ReservationKind::ALL {
        restaurant.reserve(anna, &kind.to_string(), now, 4, sink)?;
    }
    if let Err(e) = restaurant.reserve(anna, "Brunch", now, 2, sink) {
        warn!(error = %e, "Booking refused");
    }
    if let Some(client) = restaurant.client(anna) {
        client.receive_notification("Your tables are booked", sink);
    }

    // Staff chain
    for task in [TAKE_ORDER, COOK_DISH, "Inventory audit"] {
        restaurant.staff().handle_task(task, sink);
    }

    // Queued kitchen work
    let mut invoker = OrderInvoker::new();
    if let Some(waiter) = restaurant.staff().first_with_role(StaffRole::Waiter) {
        invoker.add(Box::new(TakeOrder::new(waiter.clone(), order_id)));
    }
    if let Some(chef) = restaurant.staff().first_with_role(StaffRole::Chef) {
        invoker.add(Box::new(PrepareOrder::new(chef.clone(), order_id)));
    }
    invoker.execute_all(sink);

    // Stock
    restaurant.add_inventory(InventoryItem::new("Tomatoes", 50));
    restaurant.add_inventory(InventoryItem::new("Cheese", 10));
    let supplier = Supplier::new("FreshFarm", "orders@freshfarm.example");
    if let Some(tomatoes) = restaurant.inventory_item_mut("Tomatoes") {
        tomatoes.check_stock(20, sink);
    }
    if let Some(cheese) = restaurant.inventory_item_mut("Cheese") {
        cheese.check_stock(20, sink);
        supplier.supply(cheese, 5, sink);
        cheese.replenish(&RegularReplenish { batch: 10 }, sink);
        cheese.replenish(&AutoReplenish { target: 40 }, sink);
    }

    // Payment
    let mut payments = PaymentSystem::new(PaymentMethod::Cash);
    payments.pay(total, sink);
    for method in [PaymentMethod::Card, PaymentMethod::Online] {
        payments.set_method(method);
        payments.pay(Price::from_cents(1000), sink);
    }
    payments.refund(Price::from_cents(1000), sink);
    if let Some(order) = restaurant
        .client_mut(anna)
        .and_then(|client| client.order_mut(order_id))
    {
        order.change_status(OrderStatus::paid(), sink);
    }

    // Loyalty
    let mut bundle = LoyaltyBundle::new();
    bundle.add(Box::new(BasicLoyalty));
    bundle.add(Box::new(PremiumLoyalty));
    let mut account = LoyaltyAccount::new("Anna");
    account.award(&bundle, sink);
    if let Err(e) = account.redeem(20, sink) {
        warn!(error = %e, "Redemption refused");
    }
    if let Err(e) = account.redeem(1000, sink) {
        warn!(error = %e, "Redemption refused");
    }

    // Closing reports
    let orders = restaurant.all_orders();
    let period = Period::day(now.date_naive());
    SalesReport::new(Statistics::new(&orders), period).generate(sink);
    InventoryReport::new(restaurant.inventory())
        .with_threshold(config.stock_threshold)
        .generate(sink);
    OrderReport::new(&orders).generate(sink);

    info!("Walkthrough finished");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::{Message, Transcript};

    use super::*;
    use crate::commands::menu::default_menu;

    fn play() -> (Restaurant, Transcript) {
        let mut restaurant = Restaurant::with_default_staff();
        restaurant.set_menu(default_menu());
        let mut out = Transcript::new();
        scenario(&mut restaurant, &BistroConfig::default(), Utc::now(), &mut out).unwrap();
        (restaurant, out)
    }

    #[test]
    fn test_scenario_leaves_menu_unchanged() {
        let (restaurant, out) = play();
        assert_eq!(restaurant.menu().len(), 4);
        assert_eq!(out.count(|m| matches!(m, Message::ItemNotFound { .. })), 1);
    }

    #[test]
    fn test_scenario_books_each_kind_once() {
        let (restaurant, _) = play();
        let kinds: Vec<ReservationKind> =
            restaurant.reservations().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ReservationKind::ALL);
    }

    #[test]
    fn test_scenario_notifies_guest_of_every_status() {
        let (restaurant, out) = play();
        assert_eq!(out.count(|m| matches!(m, Message::ClientNotified { .. })), 4);
        let orders = restaurant.all_orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first().unwrap().status(), &OrderStatus::paid());
    }

    #[test]
    fn test_scenario_refuses_large_redemption() {
        let (_, out) = play();
        assert!(out.contains(|m| matches!(
            m,
            Message::PointsInsufficient { requested: 1000, available: 40, .. }
        )));
    }

    #[test]
    fn test_scenario_confirms_bookings() {
        let (_, out) = play();
        assert!(out.contains(|m| matches!(
            m,
            Message::Notification { client, text } if client == "Anna" && text == "Your tables are booked"
        )));
    }

    #[test]
    fn test_scenario_runs_all_reports() {
        let (_, out) = play();
        assert_eq!(out.count(|m| matches!(m, Message::ReportFinished { .. })), 3);
    }
}
