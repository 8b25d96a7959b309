//! Integration tests for Bistro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `menu_orders` - Menu upkeep, decorated items, and order listeners
//! - `reservations_staff` - Booking factory, staff chain, and kitchen commands
//! - `stock_payments_loyalty` - Restocking, payments, and loyalty accounts
//! - `restaurant_flow` - A whole shift through [`bistro_core::Restaurant`]
