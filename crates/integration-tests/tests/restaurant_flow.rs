//! A whole shift driven through the restaurant state.

#![allow(clippy::unwrap_used)]

use bistro_core::report::ReportKind;
use bistro_core::{
    InventoryItem, InventoryReport, Locale, MenuItem, Message, OrderReport, OrderStatus, Period,
    Price, Report, ReservationError, ReservationKind, Restaurant, RestaurantError, SalesReport,
    Statistics, TAKE_ORDER, Transcript,
};
use chrono::{Duration, TimeZone, Utc};

fn stocked_restaurant() -> Restaurant {
    let mut restaurant = Restaurant::with_default_staff();
    let menu = restaurant.menu_mut();
    menu.add(MenuItem::dish("Spaghetti", Price::from_cents(1299)).of_kind("pasta"));
    menu.add(MenuItem::dish("Salad", Price::from_cents(599)));
    menu.add(MenuItem::drink("Cola", Price::from_cents(199)));
    restaurant.add_inventory(InventoryItem::new("Tomatoes", 50));
    restaurant.add_inventory(InventoryItem::new("Cheese", 10));
    restaurant
}

// =============================================================================
// Orders
// =============================================================================

#[test]
fn test_order_lifecycle_notifies_client() {
    let mut restaurant = stocked_restaurant();
    let mut out = Transcript::new();
    let anna = restaurant.add_client("Anna", "anna@example.com");
    let spaghetti = restaurant.menu().find("Spaghetti").cloned().unwrap();

    let order = restaurant.open_order(anna, Utc::now(), &mut out).unwrap();
    order.add_item(spaghetti);
    for status in [
        OrderStatus::in_progress(),
        OrderStatus::ready(),
        OrderStatus::served(),
        OrderStatus::paid(),
    ] {
        order.change_status(status, &mut out);
    }

    let notified: Vec<&str> = out
        .messages()
        .iter()
        .filter_map(|m| match m {
            Message::ClientNotified { status, .. } => Some(status.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(notified, ["In progress", "Ready", "Served", "Paid"]);
    assert_eq!(restaurant.client(anna).unwrap().orders().len(), 1);
}

#[test]
fn test_orders_for_unknown_client_fail() {
    let mut restaurant = stocked_restaurant();
    let mut out = Transcript::new();
    let stranger = restaurant.add_client("Anna", "").next();

    let result = restaurant.open_order(stranger, Utc::now(), &mut out).map(|o| o.id());

    assert_eq!(result, Err(RestaurantError::UnknownClient(stranger)));
    assert!(out.is_empty());
}

// =============================================================================
// Reservations
// =============================================================================

#[test]
fn test_reservations_through_restaurant() {
    let mut restaurant = stocked_restaurant();
    let mut out = Transcript::new();
    let boris = restaurant.add_client("Boris", "");
    let time = Utc.with_ymd_and_hms(2026, 12, 31, 20, 0, 0).unwrap();

    restaurant.reserve(boris, "VIP", time, 2, &mut out).unwrap();
    let refused = restaurant.reserve(boris, "Picnic", time, 2, &mut out).map(|r| r.id);
    let empty = restaurant.reserve(boris, "Standard", time, 0, &mut out).map(|r| r.id);

    assert_eq!(
        refused,
        Err(RestaurantError::Reservation(ReservationError::UnknownKind(
            "Picnic".to_owned()
        )))
    );
    assert_eq!(
        empty,
        Err(RestaurantError::Reservation(ReservationError::EmptyParty))
    );
    assert_eq!(restaurant.reservations().len(), 1);
    let booked = restaurant.reservations().first().unwrap();
    assert_eq!(booked.kind, ReservationKind::Vip);
    assert_eq!(booked.client, Some(boris));
    assert_eq!(out.count(|m| matches!(m, Message::ReservationCreated { .. })), 1);
}

// =============================================================================
// Staff
// =============================================================================

#[test]
fn test_default_staff_takes_orders() {
    let restaurant = stocked_restaurant();
    let mut out = Transcript::new();

    let outcome = restaurant.staff().handle_task(TAKE_ORDER, &mut out);

    assert_eq!(outcome.passed_over, 0);
    assert_eq!(
        out.render(Locale::En, "$").len(),
        1,
        "exactly one employee reports the task"
    );
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_reports_over_a_shift() {
    let mut restaurant = stocked_restaurant();
    let mut out = Transcript::new();
    let anna = restaurant.add_client("Anna", "");
    let boris = restaurant.add_client("Boris", "");
    let today = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let salad = restaurant.menu().find("Salad").cloned().unwrap();
    let cola = restaurant.menu().find("Cola").cloned().unwrap();

    let first = restaurant.open_order(anna, today, &mut out).unwrap();
    first.add_item(salad);
    first.change_status(OrderStatus::paid(), &mut out);
    let second = restaurant.open_order(boris, today, &mut out).unwrap();
    second.add_item(cola.clone());
    let old = restaurant
        .open_order(boris, today - Duration::days(3), &mut out)
        .unwrap();
    old.add_item(cola);
    out.clear();

    let orders = restaurant.all_orders();
    SalesReport::new(Statistics::new(&orders), Period::day(today.date_naive())).generate(&mut out);

    assert!(matches!(out.messages().first(), Some(Message::ReportPreparing { report: ReportKind::Sales })));
    assert!(out.contains(|m| matches!(
        m,
        Message::SalesSummary { orders: 2, revenue, .. } if *revenue == Price::from_cents(798)
    )));
    assert!(out.contains(|m| matches!(
        m,
        Message::StatusCount { status, count: 1 } if status == "Paid"
    )));
    assert!(matches!(out.messages().last(), Some(Message::ReportFinished { report: ReportKind::Sales })));

    out.clear();
    InventoryReport::new(restaurant.inventory())
        .with_threshold(30)
        .generate(&mut out);
    assert!(out.contains(|m| matches!(
        m,
        Message::InventoryLine { item, sufficient: true, .. } if item == "Tomatoes"
    )));
    assert!(out.contains(|m| matches!(
        m,
        Message::InventoryLine { item, sufficient: false, .. } if item == "Cheese"
    )));

    out.clear();
    OrderReport::new(&orders).generate(&mut out);
    assert!(out.contains(|m| *m == Message::OrderCount { orders: 3 }));
    assert_eq!(out.count(|m| matches!(m, Message::OrderLine { .. })), 3);
}
