//! Aggregates over a set of orders.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::order::Order;
use crate::types::Price;

/// Calendar date range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single day.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Read-only view over orders for reporting.
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    orders: &'a [&'a Order],
}

impl<'a> Statistics<'a> {
    #[must_use]
    pub const fn new(orders: &'a [&'a Order]) -> Self {
        Self { orders }
    }

    fn in_period(&self, period: Period) -> impl Iterator<Item = &'a Order> + use<'a> {
        self.orders
            .iter()
            .copied()
            .filter(move |order| period.contains(order.created_at().date_naive()))
    }

    /// Orders created within `period`.
    #[must_use]
    pub fn count_orders(&self, period: Period) -> usize {
        self.in_period(period).count()
    }

    /// Sum of order totals within `period`.
    #[must_use]
    pub fn total_revenue(&self, period: Period) -> Price {
        self.in_period(period).map(Order::total).sum()
    }

    /// Orders within `period` grouped by status text.
    #[must_use]
    pub fn count_by_status(&self, period: Period) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for order in self.in_period(period) {
            *counts.entry(order.status().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
