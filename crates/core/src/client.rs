//! Guests of the restaurant.

use chrono::{DateTime, Utc};
use tracing::error;

use crate::order::{ClientNotifier, Order};
use crate::output::{Message, Sink};
use crate::reservation::{Reservation, ReservationError};
use crate::types::{ClientId, OrderId, ReservationId};

/// A guest with their orders.
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    name: String,
    contact: String,
    orders: Vec<Order>,
}

impl Client {
    #[must_use]
    pub fn new(id: ClientId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            orders: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    /// Open a new order that notifies this client of status changes.
    #[allow(clippy::indexing_slicing)] // index of the order just pushed
    pub fn create_order(
        &mut self,
        id: OrderId,
        created_at: DateTime<Utc>,
        sink: &mut dyn Sink,
    ) -> &mut Order {
        let mut order = Order::new(id, created_at);
        order.attach(Box::new(ClientNotifier::new(self.name.clone())));
        sink.emit(Message::OrderCreated {
            client: self.name.clone(),
            order: id,
        });
        let index = self.orders.len();
        self.orders.push(order);
        &mut self.orders[index]
    }

    /// Book a table of the named type for this client.
    ///
    /// # Errors
    ///
    /// Returns the factory's [`ReservationError`] unchanged after logging it.
    pub fn create_reservation(
        &self,
        id: ReservationId,
        kind: &str,
        time: DateTime<Utc>,
        party_size: u32,
        sink: &mut dyn Sink,
    ) -> Result<Reservation, ReservationError> {
        let reservation = Reservation::book(id, kind, time, party_size, Some(self.id))
            .inspect_err(|e| error!(client = %self.name, kind, error = %e, "Reservation failed"))?;
        sink.emit(Message::ReservationCreated {
            client: self.name.clone(),
            kind: reservation.kind,
            party_size,
        });
        Ok(reservation)
    }

    /// Deliver a free-text notification to this client.
    pub fn receive_notification(&self, text: &str, sink: &mut dyn Sink) {
        sink.emit(Message::Notification {
            client: self.name.clone(),
            text: text.to_owned(),
        });
    }
}
