//! The restaurant: all process-wide state in one place.
//!
//! Create one [`Restaurant`] at startup and pass it by reference to whatever
//! needs the menu, staff, stock, or guests.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::client::Client;
use crate::inventory::InventoryItem;
use crate::menu::MenuManager;
use crate::order::Order;
use crate::output::Sink;
use crate::reservation::{Reservation, ReservationError};
use crate::staff::{Employee, StaffChain};
use crate::types::{ClientId, EmployeeId, OrderId, ReservationId};

/// Errors from restaurant-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestaurantError {
    /// No client with this ID.
    #[error("unknown client: {0}")]
    UnknownClient(ClientId),

    /// The reservation factory refused the request.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Menu, staff, stock, guests, and bookings.
#[derive(Debug, Default)]
pub struct Restaurant {
    menu: MenuManager,
    staff: StaffChain,
    inventory: Vec<InventoryItem>,
    clients: Vec<Client>,
    reservations: Vec<Reservation>,
    last_client: ClientId,
    last_order: OrderId,
    last_reservation: ReservationId,
}

impl Restaurant {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A restaurant staffed by a waiter, a chef, and a manager, in that
    /// forwarding order.
    #[must_use]
    pub fn with_default_staff() -> Self {
        let staff = StaffChain::new()
            .then(Employee::waiter(EmployeeId::new(1), "Alice").with_experience(2))
            .then(Employee::chef(EmployeeId::new(2), "Charlie").with_experience(10))
            .then(Employee::manager(EmployeeId::new(3), "Bob").with_experience(6));
        Self {
            staff,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn menu(&self) -> &MenuManager {
        &self.menu
    }

    pub const fn menu_mut(&mut self) -> &mut MenuManager {
        &mut self.menu
    }

    /// Replace the whole menu.
    pub fn set_menu(&mut self, menu: MenuManager) {
        self.menu = menu;
    }

    #[must_use]
    pub const fn staff(&self) -> &StaffChain {
        &self.staff
    }

    pub const fn staff_mut(&mut self) -> &mut StaffChain {
        &mut self.staff
    }

    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn add_inventory(&mut self, item: InventoryItem) {
        self.inventory.push(item);
    }

    /// Stocked item by name.
    pub fn inventory_item_mut(&mut self, name: &str) -> Option<&mut InventoryItem> {
        self.inventory.iter_mut().find(|item| item.name == name)
    }

    /// Register a guest and return their ID.
    pub fn add_client(&mut self, name: impl Into<String>, contact: impl Into<String>) -> ClientId {
        let id = self.last_client.next();
        self.last_client = id;
        let client = Client::new(id, name, contact);
        info!(client = %id, name = %client.name(), "Client registered");
        self.clients.push(client);
        id
    }

    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id() == id)
    }

    /// Open an order for a client; the order notifies them on status changes.
    ///
    /// # Errors
    ///
    /// Returns [`RestaurantError::UnknownClient`] if no such client exists.
    pub fn open_order(
        &mut self,
        client: ClientId,
        created_at: DateTime<Utc>,
        sink: &mut dyn Sink,
    ) -> Result<&mut Order, RestaurantError> {
        let id = self.last_order.next();
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id() == client)
            .ok_or(RestaurantError::UnknownClient(client))?;
        self.last_order = id;
        Ok(client.create_order(id, created_at, sink))
    }

    /// Book a table of the named type for a client and keep the booking.
    ///
    /// # Errors
    ///
    /// Returns [`RestaurantError::UnknownClient`] for an unknown client and
    /// [`RestaurantError::Reservation`] when the factory refuses the type or
    /// party size.
    #[allow(clippy::indexing_slicing)] // index of the booking just pushed
    pub fn reserve(
        &mut self,
        client: ClientId,
        kind: &str,
        time: DateTime<Utc>,
        party_size: u32,
        sink: &mut dyn Sink,
    ) -> Result<&Reservation, RestaurantError> {
        let id = self.last_reservation.next();
        let client = self
            .client(client)
            .ok_or(RestaurantError::UnknownClient(client))?;
        let reservation = client.create_reservation(id, kind, time, party_size, sink)?;
        self.last_reservation = id;
        let index = self.reservations.len();
        self.reservations.push(reservation);
        Ok(&self.reservations[index])
    }

    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Every client's orders, clients in registration order.
    #[must_use]
    pub fn all_orders(&self) -> Vec<&Order> {
        self.clients.iter().flat_map(Client::orders).collect()
    }
}
