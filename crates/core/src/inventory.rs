//! Stock levels, suppliers, and restocking strategies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::{Message, Sink};

/// Which restocking policy ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplenishMode {
    Regular,
    Auto,
}

/// A stocked ingredient or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: u32,
}

impl InventoryItem {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Whether at least `required` units are on hand, reported either way.
    pub fn check_stock(&self, required: u32, sink: &mut dyn Sink) -> bool {
        if self.quantity >= required {
            sink.emit(Message::StockSufficient {
                item: self.name.clone(),
                quantity: self.quantity,
            });
            true
        } else {
            sink.emit(Message::StockInsufficient {
                item: self.name.clone(),
                available: self.quantity,
                required,
            });
            false
        }
    }

    /// Restock with `strategy`, then report the new level.
    pub fn replenish(&mut self, strategy: &dyn ReplenishStrategy, sink: &mut dyn Sink) {
        let before = self.quantity;
        strategy.replenish(self, sink);
        debug!(
            item = %self.name,
            mode = ?strategy.mode(),
            before,
            after = self.quantity,
            "Replenished"
        );
        sink.emit(Message::StockLevel {
            item: self.name.clone(),
            quantity: self.quantity,
        });
    }
}

/// A restocking policy.
pub trait ReplenishStrategy {
    fn mode(&self) -> ReplenishMode;

    /// Raise `item`'s quantity according to the policy.
    fn replenish(&self, item: &mut InventoryItem, sink: &mut dyn Sink);
}

/// Adds the same batch every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularReplenish {
    pub batch: u32,
}

impl ReplenishStrategy for RegularReplenish {
    fn mode(&self) -> ReplenishMode {
        ReplenishMode::Regular
    }

    fn replenish(&self, item: &mut InventoryItem, sink: &mut dyn Sink) {
        let before = item.quantity;
        item.quantity = before.saturating_add(self.batch);
        sink.emit(Message::Replenished {
            mode: ReplenishMode::Regular,
            item: item.name.clone(),
            added: item.quantity - before,
        });
    }
}

/// Tops the item up to a target level; does nothing at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoReplenish {
    pub target: u32,
}

impl ReplenishStrategy for AutoReplenish {
    fn mode(&self) -> ReplenishMode {
        ReplenishMode::Auto
    }

    fn replenish(&self, item: &mut InventoryItem, sink: &mut dyn Sink) {
        let added = self.target.saturating_sub(item.quantity);
        item.quantity += added;
        sink.emit(Message::Replenished {
            mode: ReplenishMode::Auto,
            item: item.name.clone(),
            added,
        });
    }
}

/// Delivers goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub contact: String,
}

impl Supplier {
    #[must_use]
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Deliver up to `quantity` units of `item`; the message reports what
    /// actually fit.
    pub fn supply(&self, item: &mut InventoryItem, quantity: u32, sink: &mut dyn Sink) {
        let before = item.quantity;
        item.quantity = before.saturating_add(quantity);
        sink.emit(Message::Supplied {
            supplier: self.name.clone(),
            item: item.name.clone(),
            quantity: item.quantity - before,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::output::Transcript;

    #[test]
    fn test_check_stock_boundary() {
        let item = InventoryItem::new("Tomatoes", 30);
        let mut out = Transcript::new();
        assert!(item.check_stock(30, &mut out));
        assert!(!item.check_stock(31, &mut out));
        assert_eq!(
            out.messages().last(),
            Some(&Message::StockInsufficient {
                item: "Tomatoes".to_owned(),
                available: 30,
                required: 31,
            })
        );
    }

    #[test]
    fn test_regular_adds_batch() {
        let mut item = InventoryItem::new("Flour", 5);
        let mut out = Transcript::new();
        item.replenish(&RegularReplenish { batch: 20 }, &mut out);
        assert_eq!(item.quantity, 25);
        assert_eq!(
            out.messages().last(),
            Some(&Message::StockLevel {
                item: "Flour".to_owned(),
                quantity: 25,
            })
        );
    }

    #[test]
    fn test_auto_tops_up_to_target() {
        let mut item = InventoryItem::new("Milk", 12);
        let mut out = Transcript::new();
        item.replenish(&AutoReplenish { target: 40 }, &mut out);
        assert_eq!(item.quantity, 40);
        assert!(out.contains(|m| matches!(m, Message::Replenished { added: 28, .. })));
    }

    #[test]
    fn test_auto_never_lowers_stock() {
        let mut item = InventoryItem::new("Milk", 70);
        let mut out = Transcript::new();
        item.replenish(&AutoReplenish { target: 40 }, &mut out);
        assert_eq!(item.quantity, 70);
    }

    #[test]
    fn test_supplier_adds_quantity() {
        let supplier = Supplier::new("Green Farm", "+7 900 000-00-00");
        let mut item = InventoryItem::new("Tomatoes", 10);
        let mut out = Transcript::new();
        supplier.supply(&mut item, 50, &mut out);
        assert_eq!(item.quantity, 60);
    }

    #[test]
    fn test_supply_saturates() {
        let supplier = Supplier::new("Green Farm", "");
        let mut item = InventoryItem::new("Salt", u32::MAX - 1);
        let mut out = Transcript::new();
        supplier.supply(&mut item, 10, &mut out);
        assert_eq!(item.quantity, u32::MAX);
        assert!(out.contains(|m| matches!(m, Message::Supplied { quantity: 1, .. })));
    }

    #[test]
    fn test_regular_reports_actual_increase_when_full() {
        let mut item = InventoryItem::new("Salt", u32::MAX - 1);
        let mut out = Transcript::new();
        item.replenish(&RegularReplenish { batch: 10 }, &mut out);
        assert_eq!(item.quantity, u32::MAX);
        assert!(out.contains(|m| matches!(
            m,
            Message::Replenished { mode: ReplenishMode::Regular, added: 1, .. }
        )));
    }
}
