//! Reports built from three fixed phases: prepare, analyze, output.
//!
//! [`Report::generate`] runs the phases in that order; implementors only
//! fill in the phases.

use tracing::instrument;

use crate::inventory::InventoryItem;
use crate::order::Order;
use crate::output::{Locale, Message, Sink};
use crate::statistics::{Period, Statistics};

/// Stock level the inventory report treats as sufficient by default.
pub const DEFAULT_STOCK_THRESHOLD: u32 = 30;

/// Which report is talking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Sales,
    Inventory,
    Orders,
}

impl ReportKind {
    #[must_use]
    pub const fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Sales, Locale::Ru) => "Детализированный отчет о продажах",
            (Self::Sales, Locale::En) => "Detailed sales report",
            (Self::Inventory, Locale::Ru) => "Отчет о запасах",
            (Self::Inventory, Locale::En) => "Inventory report",
            (Self::Orders, Locale::Ru) => "Отчет о заказах",
            (Self::Orders, Locale::En) => "Order report",
        }
    }
}

/// A report with a fixed generation procedure.
pub trait Report {
    fn kind(&self) -> ReportKind;

    fn prepare(&self, sink: &mut dyn Sink) {
        sink.emit(Message::ReportPreparing { report: self.kind() });
    }

    fn analyze(&self, sink: &mut dyn Sink);

    fn output(&self, sink: &mut dyn Sink) {
        sink.emit(Message::ReportFinished { report: self.kind() });
    }

    /// Run prepare, analyze, and output, in that order.
    #[instrument(skip_all, fields(report = ?self.kind()))]
    fn generate(&self, sink: &mut dyn Sink) {
        self.prepare(sink);
        self.analyze(sink);
        self.output(sink);
    }
}

/// Order count, revenue, and per-status breakdown over a period.
#[derive(Debug, Clone, Copy)]
pub struct SalesReport<'a> {
    statistics: Statistics<'a>,
    period: Period,
}

impl<'a> SalesReport<'a> {
    #[must_use]
    pub const fn new(statistics: Statistics<'a>, period: Period) -> Self {
        Self { statistics, period }
    }
}

impl Report for SalesReport<'_> {
    fn kind(&self) -> ReportKind {
        ReportKind::Sales
    }

    fn analyze(&self, sink: &mut dyn Sink) {
        sink.emit(Message::ReportAnalyzing { report: self.kind() });
        sink.emit(Message::SalesSummary {
            start: self.period.start,
            end: self.period.end,
            orders: self.statistics.count_orders(self.period),
            revenue: self.statistics.total_revenue(self.period),
        });
        for (status, count) in self.statistics.count_by_status(self.period) {
            sink.emit(Message::StatusCount { status, count });
        }
    }
}

/// Stock of every item against a threshold.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReport<'a> {
    items: &'a [InventoryItem],
    threshold: u32,
}

impl<'a> InventoryReport<'a> {
    #[must_use]
    pub const fn new(items: &'a [InventoryItem]) -> Self {
        Self {
            items,
            threshold: DEFAULT_STOCK_THRESHOLD,
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Report for InventoryReport<'_> {
    fn kind(&self) -> ReportKind {
        ReportKind::Inventory
    }

    fn analyze(&self, sink: &mut dyn Sink) {
        sink.emit(Message::ReportAnalyzing { report: self.kind() });
        for item in self.items {
            let sufficient = item.check_stock(self.threshold, sink);
            sink.emit(Message::InventoryLine {
                item: item.name.clone(),
                quantity: item.quantity,
                sufficient,
            });
        }
    }
}

/// Every order with its status and total.
#[derive(Debug, Clone, Copy)]
pub struct OrderReport<'a> {
    orders: &'a [&'a Order],
}

impl<'a> OrderReport<'a> {
    #[must_use]
    pub const fn new(orders: &'a [&'a Order]) -> Self {
        Self { orders }
    }
}

impl Report for OrderReport<'_> {
    fn kind(&self) -> ReportKind {
        ReportKind::Orders
    }

    fn analyze(&self, sink: &mut dyn Sink) {
        sink.emit(Message::ReportAnalyzing { report: self.kind() });
        sink.emit(Message::OrderCount {
            orders: self.orders.len(),
        });
        for order in self.orders {
            sink.emit(Message::OrderLine {
                order: order.id(),
                status: order.status().to_string(),
                total: order.total(),
            });
        }
    }
}
