//! Orders and status notifications.

use core::fmt;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::menu::MenuItem;
use crate::output::{Message, Sink};
use crate::types::{OrderId, OrderStatus, Price};

/// Listener told about every status change of one order.
pub trait OrderObserver {
    /// Called synchronously after the order's status was overwritten.
    fn status_changed(&self, order: OrderId, status: &OrderStatus, sink: &mut dyn Sink);
}

/// Forwards status changes to the client who placed the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientNotifier {
    client_name: String,
}

impl ClientNotifier {
    #[must_use]
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }

    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl OrderObserver for ClientNotifier {
    fn status_changed(&self, order: OrderId, status: &OrderStatus, sink: &mut dyn Sink) {
        debug!(order = %order, client = %self.client_name, "Notifying client");
        sink.emit(Message::ClientNotified {
            client: self.client_name.clone(),
            status: status.to_string(),
        });
    }
}

/// An ordered list of menu items with a free-text status.
pub struct Order {
    id: OrderId,
    items: Vec<MenuItem>,
    created_at: DateTime<Utc>,
    status: OrderStatus,
    observer: Option<Box<dyn OrderObserver>>,
}

impl Order {
    /// Create an empty order in the pending status.
    #[must_use]
    pub fn new(id: OrderId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            items: Vec::new(),
            created_at,
            status: OrderStatus::pending(),
            observer: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Append an item.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Attach the order's listener, replacing any previous one.
    pub fn attach(&mut self, observer: Box<dyn OrderObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the listener, returning it.
    pub fn detach(&mut self) -> Option<Box<dyn OrderObserver>> {
        self.observer.take()
    }

    #[must_use]
    pub const fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Overwrite the status unconditionally and notify the listener, if any.
    pub fn change_status(&mut self, status: OrderStatus, sink: &mut dyn Sink) {
        debug!(order = %self.id, from = %self.status, to = %status, "Order status changed");
        self.status = status;
        sink.emit(Message::StatusChanged {
            order: self.id,
            status: self.status.to_string(),
        });
        if let Some(observer) = &self.observer {
            observer.status_changed(self.id, &self.status, sink);
        }
    }

    /// Sum of the items' costs, options included.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(MenuItem::cost).sum()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("created_at", &self.created_at)
            .field("status", &self.status)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
