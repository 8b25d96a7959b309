//! User-facing output.
//!
//! Every operation that "says" something to the dining room emits a
//! [`Message`] into a [`Sink`] instead of printing. The CLI renders messages
//! to stdout through [`Console`]; tests record them with [`Transcript`].
//!
//! Diagnostics are a separate channel and go through `tracing`.

use core::fmt;

use chrono::NaiveDate;

use crate::inventory::ReplenishMode;
use crate::payment::PaymentMethod;
use crate::report::ReportKind;
use crate::types::{OrderId, Price, ReservationKind, StaffRole};

/// Language used when rendering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ru => write!(f, "ru"),
            Self::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(format!("unsupported locale: {s} (expected ru or en)")),
        }
    }
}

/// Something worth telling the dining room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    MenuLine { name: String, price: Price },
    ItemNotFound { name: String },
    OrderCreated { client: String, order: OrderId },
    StatusChanged { order: OrderId, status: String },
    ClientNotified { client: String, status: String },
    Notification { client: String, text: String },
    ReservationCreated { client: String, kind: ReservationKind, party_size: u32 },
    TaskPerformed { role: StaffRole, name: String, task: String },
    CommandStarted { role: StaffRole, name: String, order: OrderId },
    StockSufficient { item: String, quantity: u32 },
    StockInsufficient { item: String, available: u32, required: u32 },
    Supplied { supplier: String, item: String, quantity: u32 },
    Replenished { mode: ReplenishMode, item: String, added: u32 },
    StockLevel { item: String, quantity: u32 },
    PaymentProcessed { method: PaymentMethod, amount: Price },
    Refunded { method: PaymentMethod, amount: Price },
    PointsEarned { owner: String, points: u32, balance: u32 },
    PointsRedeemed { owner: String, points: u32, balance: u32 },
    PointsInsufficient { owner: String, requested: u32, available: u32 },
    ReportPreparing { report: ReportKind },
    ReportAnalyzing { report: ReportKind },
    ReportFinished { report: ReportKind },
    SalesSummary { start: NaiveDate, end: NaiveDate, orders: usize, revenue: Price },
    StatusCount { status: String, count: usize },
    InventoryLine { item: String, quantity: u32, sufficient: bool },
    OrderCount { orders: usize },
    OrderLine { order: OrderId, status: String, total: Price },
    Note(String),
}

impl Message {
    /// Render the message as a single line of text.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn render(&self, locale: Locale, currency: &str) -> String {
        match (self, locale) {
            (Self::MenuLine { name, price }, Locale::Ru) => {
                format!("Товар: {name}, Цена: {currency}{price}")
            }
            (Self::MenuLine { name, price }, Locale::En) => {
                format!("Item: {name}, Price: {currency}{price}")
            }
            (Self::ItemNotFound { name }, Locale::Ru) => {
                format!("Позиция {name} не найдена в меню.")
            }
            (Self::ItemNotFound { name }, Locale::En) => {
                format!("Item {name} was not found in the menu.")
            }
            (Self::OrderCreated { client, order }, Locale::Ru) => {
                format!("Клиент {client} создал новый заказ №{order}.")
            }
            (Self::OrderCreated { client, order }, Locale::En) => {
                format!("Client {client} created new order #{order}.")
            }
            (Self::StatusChanged { order, status }, Locale::Ru) => {
                format!("Статус заказа №{order}: {status}")
            }
            (Self::StatusChanged { order, status }, Locale::En) => {
                format!("Order #{order} status: {status}")
            }
            (Self::ClientNotified { client, status }, Locale::Ru) => format!(
                "Клиент {client} получил уведомление: Статус вашего заказа изменён на: {status}"
            ),
            (Self::ClientNotified { client, status }, Locale::En) => format!(
                "Client {client} received a notification: your order status changed to: {status}"
            ),
            (Self::Notification { client, text }, Locale::Ru) => {
                format!("Клиент {client} получил уведомление: {text}")
            }
            (Self::Notification { client, text }, Locale::En) => {
                format!("Client {client} received a notification: {text}")
            }
            (
                Self::ReservationCreated {
                    client,
                    kind,
                    party_size,
                },
                Locale::Ru,
            ) => format!(
                "Клиент {client} создал резервацию типа {} на {party_size} человек.",
                kind.label(locale)
            ),
            (
                Self::ReservationCreated {
                    client,
                    kind,
                    party_size,
                },
                Locale::En,
            ) => format!(
                "Client {client} booked a {} reservation for {party_size} guests.",
                kind.label(locale)
            ),
            (Self::TaskPerformed { role, name, task }, Locale::Ru) => {
                format!("{} {name} выполняет задачу: {task}", role.title(locale))
            }
            (Self::TaskPerformed { role, name, task }, Locale::En) => {
                format!("{} {name} performs task: {task}", role.title(locale))
            }
            (Self::CommandStarted { role, name, order }, Locale::Ru) => match role {
                StaffRole::Chef => format!("Шеф-повар {name} готовит заказ №{order}."),
                _ => format!("{} {name} принимает заказ №{order}.", role.title(locale)),
            },
            (Self::CommandStarted { role, name, order }, Locale::En) => match role {
                StaffRole::Chef => format!("Chef {name} prepares order #{order}."),
                _ => format!("{} {name} takes order #{order}.", role.title(locale)),
            },
            (Self::StockSufficient { item, quantity }, Locale::Ru) => {
                format!("Достаточно {item} на складе: {quantity} единиц.")
            }
            (Self::StockSufficient { item, quantity }, Locale::En) => {
                format!("Enough {item} in stock: {quantity} units.")
            }
            (
                Self::StockInsufficient {
                    item,
                    available,
                    required,
                },
                Locale::Ru,
            ) => format!(
                "Недостаточно {item} на складе. Доступно: {available}, требуется: {required}."
            ),
            (
                Self::StockInsufficient {
                    item,
                    available,
                    required,
                },
                Locale::En,
            ) => format!(
                "Not enough {item} in stock. Available: {available}, required: {required}."
            ),
            (
                Self::Supplied {
                    supplier,
                    item,
                    quantity,
                },
                Locale::Ru,
            ) => format!("{supplier} поставил {quantity} единиц {item}."),
            (
                Self::Supplied {
                    supplier,
                    item,
                    quantity,
                },
                Locale::En,
            ) => format!("{supplier} delivered {quantity} units of {item}."),
            (Self::Replenished { mode, item, added }, Locale::Ru) => match mode {
                ReplenishMode::Regular => {
                    format!("Выполнено регулярное пополнение запасов {item}: +{added}.")
                }
                ReplenishMode::Auto => {
                    format!("Выполнено автоматическое пополнение запасов {item}: +{added}.")
                }
            },
            (Self::Replenished { mode, item, added }, Locale::En) => match mode {
                ReplenishMode::Regular => format!("Regular restock of {item} done: +{added}."),
                ReplenishMode::Auto => format!("Automatic restock of {item} done: +{added}."),
            },
            (Self::StockLevel { item, quantity }, Locale::Ru) => {
                format!("{item} теперь имеет {quantity} единиц.")
            }
            (Self::StockLevel { item, quantity }, Locale::En) => {
                format!("{item} now has {quantity} units.")
            }
            (Self::PaymentProcessed { method, amount }, Locale::Ru) => format!(
                "Оплачено {currency}{amount} с использованием {}.",
                method.label(locale)
            ),
            (Self::PaymentProcessed { method, amount }, Locale::En) => {
                format!("Paid {currency}{amount} by {}.", method.label(locale))
            }
            (Self::Refunded { method, amount }, Locale::Ru) => {
                format!("Возврат {currency}{amount} через {}.", method.label(locale))
            }
            (Self::Refunded { method, amount }, Locale::En) => {
                format!("Refunded {currency}{amount} via {}.", method.label(locale))
            }
            (
                Self::PointsEarned {
                    owner,
                    points,
                    balance,
                },
                Locale::Ru,
            ) => format!("{owner} заработал {points} очков. Всего: {balance} очков."),
            (
                Self::PointsEarned {
                    owner,
                    points,
                    balance,
                },
                Locale::En,
            ) => format!("{owner} earned {points} points. Total: {balance} points."),
            (
                Self::PointsRedeemed {
                    owner,
                    points,
                    balance,
                },
                Locale::Ru,
            ) => format!("{owner} использовал {points} очков. Осталось: {balance} очков."),
            (
                Self::PointsRedeemed {
                    owner,
                    points,
                    balance,
                },
                Locale::En,
            ) => format!("{owner} redeemed {points} points. Remaining: {balance} points."),
            (
                Self::PointsInsufficient {
                    owner,
                    requested,
                    available,
                },
                Locale::Ru,
            ) => format!(
                "{owner} недостаточно очков для использования (запрошено {requested}, доступно {available})."
            ),
            (
                Self::PointsInsufficient {
                    owner,
                    requested,
                    available,
                },
                Locale::En,
            ) => format!(
                "{owner} does not have enough points (requested {requested}, available {available})."
            ),
            (Self::ReportPreparing { report }, Locale::Ru) => {
                format!("Подготовка данных: {}...", report.title(locale))
            }
            (Self::ReportPreparing { report }, Locale::En) => {
                format!("Preparing data: {}...", report.title(locale))
            }
            (Self::ReportAnalyzing { report }, Locale::Ru) => {
                format!("Анализ данных: {}...", report.title(locale))
            }
            (Self::ReportAnalyzing { report }, Locale::En) => {
                format!("Analyzing data: {}...", report.title(locale))
            }
            (Self::ReportFinished { report }, Locale::Ru) => {
                format!("{} сгенерирован.", report.title(locale))
            }
            (Self::ReportFinished { report }, Locale::En) => {
                format!("{} generated.", report.title(locale))
            }
            (
                Self::SalesSummary {
                    start,
                    end,
                    orders,
                    revenue,
                },
                Locale::Ru,
            ) => format!(
                "Период: {start} - {end}; количество заказов: {orders}; общий доход: {currency}{revenue}"
            ),
            (
                Self::SalesSummary {
                    start,
                    end,
                    orders,
                    revenue,
                },
                Locale::En,
            ) => format!(
                "Period: {start} - {end}; orders: {orders}; total revenue: {currency}{revenue}"
            ),
            (Self::StatusCount { status, count }, _) => format!("  - {status}: {count}"),
            (
                Self::InventoryLine {
                    item,
                    quantity,
                    sufficient,
                },
                Locale::Ru,
            ) => format!(
                "- Позиция: {item}; доступно: {quantity}; состояние: {}",
                if *sufficient { "Достаточно" } else { "Недостаточно" }
            ),
            (
                Self::InventoryLine {
                    item,
                    quantity,
                    sufficient,
                },
                Locale::En,
            ) => format!(
                "- Item: {item}; available: {quantity}; state: {}",
                if *sufficient { "sufficient" } else { "insufficient" }
            ),
            (Self::OrderCount { orders }, Locale::Ru) => format!("Всего заказов: {orders}"),
            (Self::OrderCount { orders }, Locale::En) => format!("Total orders: {orders}"),
            (Self::OrderLine { order, status, total }, Locale::Ru) => {
                format!("- Заказ №{order}: {status}, сумма {currency}{total}")
            }
            (Self::OrderLine { order, status, total }, Locale::En) => {
                format!("- Order #{order}: {status}, total {currency}{total}")
            }
            (Self::Note(text), _) => text.clone(),
        }
    }
}

/// Destination for user-facing messages.
pub trait Sink {
    /// Accept one message.
    fn emit(&mut self, message: Message);
}

/// Prints rendered messages to stdout, one per line.
#[derive(Debug, Clone)]
pub struct Console {
    locale: Locale,
    currency: String,
}

impl Console {
    /// Create a console sink rendering in `locale` with the given currency symbol.
    #[must_use]
    pub fn new(locale: Locale, currency: impl Into<String>) -> Self {
        Self {
            locale,
            currency: currency.into(),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

impl Sink for Console {
    #[allow(clippy::print_stdout)]
    fn emit(&mut self, message: Message) {
        println!("{}", message.render(self.locale, &self.currency));
    }
}

/// Records messages in emission order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// All recorded messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of recorded messages matching `pred`.
    pub fn count(&self, pred: impl Fn(&Message) -> bool) -> usize {
        self.messages.iter().filter(|m| pred(m)).count()
    }

    /// Returns true if any recorded message matches `pred`.
    pub fn contains(&self, pred: impl Fn(&Message) -> bool) -> bool {
        self.messages.iter().any(pred)
    }

    /// Render every recorded message.
    #[must_use]
    pub fn render(&self, locale: Locale, currency: &str) -> Vec<String> {
        self.messages
            .iter()
            .map(|m| m.render(locale, currency))
            .collect()
    }

    /// Drop all recorded messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Sink for Transcript {
    fn emit(&mut self, message: Message) {
        self.messages.push(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_render_menu_line() {
        let msg = Message::MenuLine {
            name: "Pizza".to_owned(),
            price: Price::from_cents(1250),
        };
        assert_eq!(msg.render(Locale::En, "$"), "Item: Pizza, Price: $12.50");
        assert_eq!(msg.render(Locale::Ru, "$"), "Товар: Pizza, Цена: $12.50");
    }

    #[test]
    fn test_render_command_started_by_role() {
        let chef = Message::CommandStarted {
            role: StaffRole::Chef,
            name: "Charlie".to_owned(),
            order: OrderId::new(1),
        };
        let waiter = Message::CommandStarted {
            role: StaffRole::Waiter,
            name: "Alice".to_owned(),
            order: OrderId::new(1),
        };
        assert_eq!(chef.render(Locale::En, "$"), "Chef Charlie prepares order #1.");
        assert_eq!(waiter.render(Locale::En, "$"), "Waiter Alice takes order #1.");
    }

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.emit(Message::Note("first".to_owned()));
        transcript.emit(Message::Note("second".to_owned()));

        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.render(Locale::En, "$"),
            vec!["first".to_owned(), "second".to_owned()]
        );
        assert_eq!(
            transcript.count(|m| matches!(m, Message::Note(t) if t == "second")),
            1
        );
    }

    #[test]
    fn test_transcript_clear() {
        let mut transcript = Transcript::new();
        transcript.emit(Message::Note("x".to_owned()));
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
