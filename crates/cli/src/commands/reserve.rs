//! Book a single table.
//!
//! # Usage
//!
//! ```bash
//! bistro reserve --kind VIP --party 4 --client Anna --at 2026-05-01T19:00:00Z
//! ```

use bistro_core::{Console, Restaurant};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::config::BistroConfig;

/// Errors from the reserve command.
#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("Invalid time {0}: {1}")]
    InvalidTime(String, chrono::ParseError),

    #[error(transparent)]
    Restaurant(#[from] bistro_core::RestaurantError),
}

/// Parse an RFC 3339 timestamp, or take the current time when absent.
///
/// # Errors
///
/// Returns [`ReserveError::InvalidTime`] if the text is not RFC 3339.
pub fn parse_time(at: Option<&str>) -> Result<DateTime<Utc>, ReserveError> {
    at.map_or_else(
        || Ok(Utc::now()),
        |text| {
            DateTime::parse_from_rfc3339(text)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| ReserveError::InvalidTime(text.to_owned(), e))
        },
    )
}

/// Book a table of `kind` for `client`.
///
/// # Errors
///
/// Returns an error if the time is malformed, the type is unknown, or the
/// party is empty.
pub fn run(
    config: &BistroConfig,
    kind: &str,
    party: u32,
    client: &str,
    at: Option<&str>,
) -> Result<(), ReserveError> {
    let time = parse_time(at)?;
    let mut restaurant = Restaurant::new();
    let guest = restaurant.add_client(client, "");
    let mut console = Console::new(config.locale, config.currency.clone());

    let reservation = restaurant.reserve(guest, kind, time, party, &mut console)?;
    info!(id = %reservation.id, kind = %reservation.kind, %time, "Table booked");
    Ok(())
}
