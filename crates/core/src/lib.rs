//! Bistro Core - restaurant domain model.
//!
//! This crate models a small restaurant: the menu, guests and their orders,
//! the staff who pass tasks along, reservations, stock, payments, loyalty
//! points, and the reports built from all of it.
//!
//! # Architecture
//!
//! Domain types never print. Everything that would be shown to a person is
//! emitted as an [`output::Message`] into an [`output::Sink`]; the
//! [`output::Console`] sink renders to stdout and [`output::Transcript`]
//! records for tests. Diagnostics go through `tracing`.
//!
//! All state lives in a [`Restaurant`] that the caller creates once and
//! passes by reference.
//!
//! # Modules
//!
//! - [`types`] - IDs, prices, statuses, and kinds
//! - [`output`] - messages, locales, and sinks
//! - [`menu`] - menu items, options, and the menu manager
//! - [`order`] - orders and their status listener
//! - [`client`] - guests
//! - [`reservation`] - table bookings
//! - [`staff`] - employees and the task chain
//! - [`command`] - queued kitchen actions
//! - [`inventory`] - stock, suppliers, and restocking strategies
//! - [`payment`] - payment methods
//! - [`loyalty`] - loyalty tiers and point accounts
//! - [`statistics`] - order aggregates
//! - [`report`] - three-phase reports
//! - [`restaurant`] - the top-level state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod command;
pub mod inventory;
pub mod loyalty;
pub mod menu;
pub mod order;
pub mod output;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod restaurant;
pub mod staff;
pub mod statistics;
pub mod types;

pub use client::Client;
pub use command::{Command, OrderInvoker, PrepareOrder, TakeOrder};
pub use inventory::{
    AutoReplenish, InventoryItem, RegularReplenish, ReplenishStrategy, Supplier,
};
pub use loyalty::{
    BasicLoyalty, LoyaltyAccount, LoyaltyBundle, LoyaltyComponent, LoyaltyError, PremiumLoyalty,
};
pub use menu::{Category, MenuItem, MenuManager};
pub use order::{ClientNotifier, Order, OrderObserver};
pub use output::{Console, Locale, Message, Sink, Transcript};
pub use payment::{PaymentMethod, PaymentSystem, Receipt};
pub use report::{InventoryReport, OrderReport, Report, SalesReport};
pub use reservation::{Reservation, ReservationError};
pub use restaurant::{Restaurant, RestaurantError};
pub use staff::{COOK_DISH, Employee, StaffChain, TAKE_ORDER, TaskOutcome};
pub use statistics::{Period, Statistics};
pub use types::*;
