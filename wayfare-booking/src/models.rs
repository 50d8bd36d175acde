use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wayfare_core::wire::RawReservation;

/// Reservation status as recorded by the backend. Later transitions (a
/// partner cancelling, say) happen server-side; this subsystem never
/// mutates a committed reservation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl ReservationStatus {
    fn from_label(label: Option<&str>) -> Self {
        match label.unwrap_or_default() {
            "pending" => ReservationStatus::Pending,
            "cancelled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Confirmed,
        }
    }
}

/// The committed booking, created exactly once per successful commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub listing_id: String,
    pub slot_id: i64,
    pub date: String,
    pub time: String,
    pub participants: u32,
    pub status: ReservationStatus,
    /// Listing price × participants.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Build the outcome from the server response. The total falls back
    /// to the client-computed figure when the backend omits it.
    pub fn from_raw(raw: RawReservation, computed_total: f64) -> Self {
        Self {
            id: raw.id.to_string(),
            listing_id: raw.listing_id,
            slot_id: raw.slot_id,
            date: raw.date,
            time: raw.time,
            participants: raw.participants,
            status: ReservationStatus::from_label(raw.status.as_deref()),
            total_price: raw.total_price.unwrap_or(computed_total),
            created_at: raw.created_at.unwrap_or_else(Utc::now),
        }
    }
}
