use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Placeholder shown when a listing arrives with no usable images.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=wayfare";

/// Placeholder shown when a host has no avatar.
pub const PLACEHOLDER_AVATAR: &str = "https://placehold.co/96x96?text=host";

/// An English/Arabic text pair as the storefront displays it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Bilingual {
    pub en: String,
    pub ar: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self { en: en.into(), ar: ar.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub name: String,
    pub avatar: String,
    pub verified: bool,
}

/// One bookable time instance on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub id: i64,
    /// Zero-padded `HH:MM`, so lexicographic order is chronological.
    pub time: String,
}

/// All bookable slots for a single date, time-sorted ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityDay {
    pub date: String,
    pub slots: Vec<Slot>,
}

/// Canonical listing shape consumed by every display surface and by the
/// booking flow. Produced once per fetch and treated as immutable; a data
/// change means a re-fetch, never an in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: Bilingual,
    pub description: Bilingual,
    pub category: Category,
    /// Per-person price.
    pub price: f64,
    pub rating: f32,
    pub review_count: u32,
    /// Never empty; falls back to a single placeholder.
    pub images: Vec<String>,
    pub location: GeoPoint,
    pub address: Bilingual,
    pub host: Host,
    pub availability: Vec<AvailabilityDay>,
}

impl Listing {
    pub fn cover_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Slots for one date, if that date has any availability.
    pub fn slots_for(&self, date: &str) -> Option<&[Slot]> {
        self.availability
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
    }
}
