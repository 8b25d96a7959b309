//! Table reservations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ClientId, ReservationId, ReservationKind};

/// Errors that can occur when creating a [`Reservation`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The requested type is not one of Standard, VIP, Banquet.
    #[error("unknown reservation type: {0}")]
    UnknownKind(String),
    /// A reservation needs at least one guest.
    #[error("reservation party size must be at least 1")]
    EmptyParty,
}

/// A booked table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub kind: ReservationKind,
    pub time: DateTime<Utc>,
    pub party_size: u32,
    /// The client who booked, by ID.
    pub client: Option<ClientId>,
}

impl Reservation {
    /// Factory: build a blank reservation of the named type.
    ///
    /// Accepts exactly `"Standard"`, `"VIP"`, and `"Banquet"`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::UnknownKind`] for any other string.
    ///
    /// ```
    /// use bistro_core::{Reservation, ReservationKind};
    ///
    /// assert_eq!(Reservation::create("VIP").unwrap().kind, ReservationKind::Vip);
    /// assert!(Reservation::create("Birthday").is_err());
    /// ```
    pub fn create(kind: &str) -> Result<Self, ReservationError> {
        let kind = kind
            .parse::<ReservationKind>()
            .map_err(|_| ReservationError::UnknownKind(kind.to_owned()))?;
        Ok(Self::of_kind(kind))
    }

    /// A blank reservation of a known type.
    #[must_use]
    pub fn of_kind(kind: ReservationKind) -> Self {
        Self {
            id: ReservationId::new(0),
            kind,
            time: DateTime::<Utc>::UNIX_EPOCH,
            party_size: 1,
            client: None,
        }
    }

    /// Factory plus details in one step.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::UnknownKind`] for an unknown type and
    /// [`ReservationError::EmptyParty`] when `party_size` is zero.
    pub fn book(
        id: ReservationId,
        kind: &str,
        time: DateTime<Utc>,
        party_size: u32,
        client: Option<ClientId>,
    ) -> Result<Self, ReservationError> {
        let mut reservation = Self::create(kind)?;
        if party_size == 0 {
            return Err(ReservationError::EmptyParty);
        }
        reservation.id = id;
        reservation.time = time;
        reservation.party_size = party_size;
        reservation.client = client;
        Ok(reservation)
    }
}
