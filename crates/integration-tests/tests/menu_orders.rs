//! Integration tests for the menu and order listeners.

#![allow(clippy::unwrap_used)]

use bistro_core::{
    Category, ClientNotifier, Locale, MenuItem, MenuManager, Message, Order, OrderId,
    OrderStatus, Price, Transcript,
};
use chrono::Utc;
use rust_decimal::Decimal;

fn pizza() -> MenuItem {
    MenuItem::dish("Pizza", Price::new(Decimal::new(125, 1)).unwrap())
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_pizza_add_then_remove() {
    let mut menu = MenuManager::new();
    let mut out = Transcript::new();
    assert!(menu.list().is_empty());

    menu.add(pizza());
    let names: Vec<&str> = menu.list().iter().map(|item| item.name()).collect();
    assert_eq!(names, ["Pizza"]);

    assert!(menu.remove(&pizza(), &mut out));
    assert!(menu.list().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_add_remove_restores_contents() {
    let mut menu = MenuManager::new();
    let mut out = Transcript::new();
    menu.add(MenuItem::dish("Soup", Price::from_cents(450)));
    menu.add(MenuItem::drink("Juice", Price::from_cents(300)));
    let before: Vec<MenuItem> = menu.list().into_iter().cloned().collect();

    let extra = MenuItem::drink("Lemonade", Price::from_cents(250));
    menu.add(extra.clone());
    menu.remove(&extra, &mut out);

    let after: Vec<MenuItem> = menu.list().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut menu = MenuManager::new();
    let mut out = Transcript::new();
    menu.add(MenuItem::dish("Soup", Price::from_cents(450)));

    assert!(!menu.remove(&pizza(), &mut out));

    assert_eq!(menu.len(), 1);
    assert_eq!(
        out.messages(),
        [Message::ItemNotFound {
            name: "Pizza".to_owned()
        }]
    );
}

#[test]
fn test_list_puts_dishes_before_drinks() {
    let mut menu = MenuManager::new();
    menu.add(MenuItem::drink("Cola", Price::from_cents(199)));
    menu.add(MenuItem::dish("Salad", Price::from_cents(599)));

    let categories: Vec<Category> = menu.list().iter().map(|item| item.category()).collect();
    assert_eq!(categories, [Category::Dish, Category::Drink]);
}

#[test]
fn test_menu_json_shape() {
    let mut menu = MenuManager::new();
    menu.add(pizza().with_option("Extra cheese", Price::from_cents(150)));

    let json = serde_json::to_value(&menu).unwrap();
    let first = &json["dishes"][0];
    assert_eq!(first["name"], "Pizza");
    assert_eq!(first["price"], "12.5");
    assert_eq!(first["options"][0]["extra"], "1.50");
    assert_eq!(json["drinks"].as_array().unwrap().len(), 0);
}

// =============================================================================
// Decorated Item Tests
// =============================================================================

#[test]
fn test_options_stack_on_cost() {
    let item = MenuItem::dish("Burger", Price::from_cents(800))
        .with_option("Bacon", Price::from_cents(200))
        .with_option("Egg", Price::from_cents(100));

    assert_eq!(item.cost(), Price::from_cents(1100));
    assert_eq!(item.price(), Price::from_cents(800));
    assert_eq!(item.display_name(), "Burger + Bacon + Egg");
}

// =============================================================================
// Order Listener Tests
// =============================================================================

#[test]
fn test_listener_follows_status_changes() {
    let mut order = Order::new(OrderId::new(7), Utc::now());
    let mut out = Transcript::new();
    order.attach(Box::new(ClientNotifier::new("Anna")));

    order.change_status(OrderStatus::ready(), &mut out);
    order.change_status(OrderStatus::served(), &mut out);

    let rendered = out.render(Locale::En, "$");
    assert_eq!(rendered.len(), 4);
    assert_eq!(
        out.count(|m| matches!(m, Message::ClientNotified { client, .. } if client == "Anna")),
        2
    );
    assert_eq!(order.status(), &OrderStatus::served());
}

#[test]
fn test_detached_listener_is_silent() {
    let mut order = Order::new(OrderId::new(1), Utc::now());
    let mut out = Transcript::new();
    order.attach(Box::new(ClientNotifier::new("Anna")));
    assert!(order.detach().is_some());

    order.change_status(OrderStatus::paid(), &mut out);

    assert!(!out.contains(|m| matches!(m, Message::ClientNotified { .. })));
    assert_eq!(out.len(), 1);
}

#[test]
fn test_order_total_includes_options() {
    let mut order = Order::new(OrderId::new(1), Utc::now());
    order.add_item(pizza().with_option("Olives", Price::from_cents(50)));
    order.add_item(MenuItem::drink("Water", Price::from_cents(99)));

    assert_eq!(order.total(), Price::from_cents(1399));
}
