//! Status and kind enums for restaurant entities.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::output::Locale;

/// Errors that can occur when parsing an [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// The status text is empty or only whitespace.
    #[error("order status cannot be empty")]
    Empty,
}

/// Free-text order status.
///
/// Statuses do not form a state machine: any status may follow any other.
/// The well-known constructors cover the statuses the dining room uses,
/// but callers may set arbitrary text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Parse a status from text.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Empty`] if the trimmed text is empty.
    pub fn parse(s: &str) -> Result<Self, StatusError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatusError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Initial status of every new order.
    #[must_use]
    pub fn pending() -> Self {
        Self("Pending".to_owned())
    }

    #[must_use]
    pub fn in_progress() -> Self {
        Self("In progress".to_owned())
    }

    #[must_use]
    pub fn ready() -> Self {
        Self("Ready".to_owned())
    }

    #[must_use]
    pub fn served() -> Self {
        Self("Served".to_owned())
    }

    #[must_use]
    pub fn paid() -> Self {
        Self("Paid".to_owned())
    }

    /// Returns the status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reservation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationKind {
    Standard,
    #[serde(rename = "VIP")]
    Vip,
    Banquet,
}

impl ReservationKind {
    /// All reservation kinds, in the order they are offered.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Vip, Self::Banquet];

    /// Human-readable label in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Standard, Locale::En) => "Standard",
            (Self::Standard, Locale::Ru) => "Стандартная",
            (Self::Vip, _) => "VIP",
            (Self::Banquet, Locale::En) => "Banquet",
            (Self::Banquet, Locale::Ru) => "Банкет",
        }
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Vip => write!(f, "VIP"),
            Self::Banquet => write!(f, "Banquet"),
        }
    }
}

impl std::str::FromStr for ReservationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "VIP" => Ok(Self::Vip),
            "Banquet" => Ok(Self::Banquet),
            _ => Err(format!("unknown reservation type: {s}")),
        }
    }
}

/// Role of a staff member in the task chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Waiter,
    Chef,
    /// Catch-all handler; accepts any task.
    Manager,
}

impl StaffRole {
    /// Human-readable title in the given locale.
    #[must_use]
    pub const fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Waiter, Locale::En) => "Waiter",
            (Self::Waiter, Locale::Ru) => "Официант",
            (Self::Chef, Locale::En) => "Chef",
            (Self::Chef, Locale::Ru) => "Шеф-повар",
            (Self::Manager, Locale::En) => "Manager",
            (Self::Manager, Locale::Ru) => "Менеджер",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiter => write!(f, "waiter"),
            Self::Chef => write!(f, "chef"),
            Self::Manager => write!(f, "manager"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_trims() {
        assert_eq!(OrderStatus::parse("  Ready ").unwrap().as_str(), "Ready");
    }

    #[test]
    fn test_status_parse_empty() {
        assert_eq!(OrderStatus::parse("   "), Err(StatusError::Empty));
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::pending());
    }

    #[test]
    fn test_reservation_kind_from_str() {
        assert_eq!("Standard".parse(), Ok(ReservationKind::Standard));
        assert_eq!("VIP".parse(), Ok(ReservationKind::Vip));
        assert_eq!("Banquet".parse(), Ok(ReservationKind::Banquet));
    }

    #[test]
    fn test_reservation_kind_is_case_sensitive() {
        assert!("vip".parse::<ReservationKind>().is_err());
        assert!("Birthday".parse::<ReservationKind>().is_err());
    }

    #[test]
    fn test_reservation_kind_display_roundtrip() {
        for kind in ReservationKind::ALL {
            assert_eq!(kind.to_string().parse::<ReservationKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_reservation_kind_serde() {
        let json = serde_json::to_string(&ReservationKind::Vip).unwrap();
        assert_eq!(json, "\"VIP\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ReservationKind::Banquet.label(Locale::Ru), "Банкет");
        assert_eq!(StaffRole::Chef.title(Locale::En), "Chef");
    }
}
