use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listing exactly as the backend returns it. Field names mirror the
/// backend schema and pass through untouched; everything is optional or
/// defaulted so deserialization is total over sparse records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawListing {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub category: Option<String>,
    pub price_per_person: Option<f64>,
    pub rating: Option<f32>,
    pub review_count: Option<i64>,
    /// JSON-encoded array of image URLs, as stored by the backend.
    pub images: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address_en: Option<String>,
    pub address_ar: Option<String>,
    pub host_name: Option<String>,
    pub host_avatar: Option<String>,
    pub host_verified: Option<bool>,
    pub date_slots: Vec<RawSlot>,
}

/// One raw inventory record: a single time-stamped slot with its
/// capacity-derived availability flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSlot {
    pub slot_id: i64,
    /// Combined date-time start, e.g. `2024-01-15T09:00:00`.
    pub date_slot_start: Option<String>,
    pub is_available: Option<bool>,
}

/// Paginated response envelope from the listing-query service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPage {
    pub data: Vec<RawListing>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

/// Outgoing listing query. Optional dimensions are skipped entirely when
/// absent, so `min_price: Some(0.0)` reaches the wire while `None` never
/// does. Inclusion is decided by presence, not by falsiness.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub page: u32,
    pub per_page: u32,
}

/// Payload for the reservation-creation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub listing_id: String,
    pub slot_id: i64,
    pub date: String,
    pub time: String,
    pub participants: u32,
    pub total_price: f64,
    pub payment_token: String,
}

/// A committed reservation as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawReservation {
    pub id: i64,
    pub listing_id: String,
    pub slot_id: i64,
    pub date: String,
    pub time: String,
    pub participants: u32,
    pub status: Option<String>,
    pub total_price: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_listing_deserializes_with_defaults() {
        let raw: RawListing = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(raw.id, 42);
        assert!(raw.title_en.is_none());
        assert!(raw.date_slots.is_empty());
    }

    #[test]
    fn absent_dimensions_never_reach_the_wire() {
        let query = QueryDescriptor {
            min_price: Some(0.0),
            page: 1,
            per_page: 12,
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["min_price"], 0.0);
        assert!(encoded.get("category").is_none());
        assert!(encoded.get("max_price").is_none());
        assert_eq!(encoded["page"], 1);
    }
}
