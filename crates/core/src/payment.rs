//! Payments and refunds.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::output::{Locale, Message, Sink};
use crate::types::Price;

/// How the guest pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    /// Phrase used after "paid by" in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Cash, Locale::Ru) => "наличных",
            (Self::Card, Locale::Ru) => "карты",
            (Self::Online, Locale::Ru) => "онлайн-оплаты",
            (Self::Cash, Locale::En) => "cash",
            (Self::Card, Locale::En) => "card",
            (Self::Online, Locale::En) => "online payment",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
            Self::Online => write!(f, "online"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "online" => Ok(Self::Online),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Record of one money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub amount: Price,
    pub refund: bool,
}

/// Takes and returns money through the currently selected method.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentSystem {
    method: PaymentMethod,
}

impl PaymentSystem {
    #[must_use]
    pub const fn new(method: PaymentMethod) -> Self {
        Self { method }
    }

    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        self.method
    }

    pub const fn set_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn pay(&self, amount: Price, sink: &mut dyn Sink) -> Receipt {
        info!(method = %self.method, amount = %amount, "Payment processed");
        sink.emit(Message::PaymentProcessed {
            method: self.method,
            amount,
        });
        Receipt {
            method: self.method,
            amount,
            refund: false,
        }
    }

    pub fn refund(&self, amount: Price, sink: &mut dyn Sink) -> Receipt {
        info!(method = %self.method, amount = %amount, "Refund issued");
        sink.emit(Message::Refunded {
            method: self.method,
            amount,
        });
        Receipt {
            method: self.method,
            amount,
            refund: true,
        }
    }
}
