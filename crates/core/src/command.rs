//! Queued kitchen actions.
//!
//! Commands are collected in an [`OrderInvoker`] and run together, in the
//! order they were added. A run empties the queue; there is no retry and
//! nothing is undone if a command's employee declines.

use tracing::{debug, instrument};

use crate::output::{Message, Sink};
use crate::staff::{COOK_DISH, Employee, TAKE_ORDER};
use crate::types::OrderId;

/// A deferred action.
pub trait Command {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Carry out the action.
    fn execute(&self, sink: &mut dyn Sink);
}

/// A waiter takes an order.
#[derive(Debug, Clone)]
pub struct TakeOrder {
    waiter: Employee,
    order: OrderId,
}

impl TakeOrder {
    #[must_use]
    pub const fn new(waiter: Employee, order: OrderId) -> Self {
        Self { waiter, order }
    }
}

impl Command for TakeOrder {
    fn name(&self) -> &'static str {
        "take_order"
    }

    fn execute(&self, sink: &mut dyn Sink) {
        sink.emit(Message::CommandStarted {
            role: self.waiter.role,
            name: self.waiter.name.clone(),
            order: self.order,
        });
        self.waiter.perform(TAKE_ORDER, sink);
    }
}

/// A chef prepares an order.
#[derive(Debug, Clone)]
pub struct PrepareOrder {
    chef: Employee,
    order: OrderId,
}

impl PrepareOrder {
    #[must_use]
    pub const fn new(chef: Employee, order: OrderId) -> Self {
        Self { chef, order }
    }
}

impl Command for PrepareOrder {
    fn name(&self) -> &'static str {
        "prepare_order"
    }

    fn execute(&self, sink: &mut dyn Sink) {
        sink.emit(Message::CommandStarted {
            role: self.chef.role,
            name: self.chef.name.clone(),
            order: self.order,
        });
        self.chef.perform(COOK_DISH, sink);
    }
}

/// Holds commands until they are run.
#[derive(Default)]
pub struct OrderInvoker {
    pending: Vec<Box<dyn Command>>,
}

impl OrderInvoker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command.
    pub fn add(&mut self, command: Box<dyn Command>) {
        debug!(command = command.name(), "Command queued");
        self.pending.push(command);
    }

    /// Number of queued commands.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run every queued command in insertion order, then clear the queue.
    ///
    /// Returns how many commands ran.
    #[instrument(skip_all, fields(pending = self.pending.len()))]
    pub fn execute_all(&mut self, sink: &mut dyn Sink) -> usize {
        let commands = std::mem::take(&mut self.pending);
        for command in &commands {
            debug!(command = command.name(), "Executing command");
            command.execute(sink);
        }
        commands.len()
    }
}

impl core::fmt::Debug for OrderInvoker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderInvoker")
            .field(
                "pending",
                &self.pending.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
