use wayfare_core::wire::RawListing;

use crate::category::Category;
use crate::listing::{Bilingual, GeoPoint, Host, Listing, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE};
use crate::slots::group_slots;

/// Normalize a raw backend record into the canonical listing shape.
///
/// Total over well-formed records: missing numerics become 0, missing
/// strings become empty, and a missing or unparsable image list becomes a
/// single placeholder. Never panics, never errors: malformed optional
/// fields are absorbed here so no consumer sees them.
pub fn normalize(raw: &RawListing) -> Listing {
    Listing {
        id: raw.id.to_string(),
        title: Bilingual::new(
            raw.title_en.clone().unwrap_or_default(),
            raw.title_ar.clone().unwrap_or_default(),
        ),
        description: Bilingual::new(
            raw.description_en.clone().unwrap_or_default(),
            raw.description_ar.clone().unwrap_or_default(),
        ),
        category: Category::resolve(raw.category.as_deref().unwrap_or_default()),
        price: raw.price_per_person.unwrap_or(0.0),
        rating: raw.rating.unwrap_or(0.0).clamp(0.0, 5.0),
        review_count: raw
            .review_count
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        images: parse_images(raw.images.as_deref()),
        location: GeoPoint {
            lat: raw.latitude.unwrap_or(0.0),
            lng: raw.longitude.unwrap_or(0.0),
        },
        address: Bilingual::new(
            raw.address_en.clone().unwrap_or_default(),
            raw.address_ar.clone().unwrap_or_default(),
        ),
        host: Host {
            name: raw.host_name.clone().unwrap_or_default(),
            avatar: raw
                .host_avatar
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            verified: raw.host_verified.unwrap_or(false),
        },
        availability: group_slots(&raw.date_slots),
    }
}

/// The backend stores images as a JSON-encoded array string. Parse
/// failures and empty arrays both collapse to the placeholder so the
/// listing never ends up with zero images.
fn parse_images(encoded: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = encoded
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();
    if parsed.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_core::wire::RawSlot;

    #[test]
    fn empty_record_normalizes_to_defaults() {
        let listing = normalize(&RawListing { id: 9, ..Default::default() });

        assert_eq!(listing.id, "9");
        assert_eq!(listing.title.en, "");
        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.rating, 0.0);
        assert_eq!(listing.review_count, 0);
        assert_eq!(listing.category, Category::Cultural);
        assert_eq!(listing.host.avatar, PLACEHOLDER_AVATAR);
        assert!(listing.availability.is_empty());
    }

    #[test]
    fn out_of_range_numerics_are_contained() {
        let raw = RawListing {
            id: 1,
            rating: Some(7.5),
            review_count: Some(-3),
            ..Default::default()
        };
        let listing = normalize(&raw);
        assert_eq!(listing.rating, 5.0);
        assert_eq!(listing.review_count, 0);

        let raw = RawListing {
            id: 1,
            rating: Some(-1.0),
            review_count: Some(i64::from(u32::MAX) + 1),
            ..Default::default()
        };
        let listing = normalize(&raw);
        assert_eq!(listing.rating, 0.0);
        assert_eq!(listing.review_count, 0);
    }

    #[test]
    fn images_parse_from_encoded_array() {
        let raw = RawListing {
            id: 1,
            images: Some(r#"["https://cdn.example/a.jpg","https://cdn.example/b.jpg"]"#.to_string()),
            ..Default::default()
        };
        let listing = normalize(&raw);
        assert_eq!(listing.images.len(), 2);
        assert_eq!(listing.cover_image(), "https://cdn.example/a.jpg");
    }

    #[test]
    fn unparsable_or_empty_images_fall_back_to_placeholder() {
        for encoded in [None, Some("not json"), Some("[]")] {
            let raw = RawListing {
                id: 1,
                images: encoded.map(str::to_string),
                ..Default::default()
            };
            let listing = normalize(&raw);
            assert_eq!(listing.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        }
    }

    #[test]
    fn availability_comes_from_the_slot_grouper() {
        let raw = RawListing {
            id: 1,
            date_slots: vec![
                RawSlot {
                    slot_id: 2,
                    date_slot_start: Some("2024-01-15T14:00:00".to_string()),
                    is_available: Some(true),
                },
                RawSlot {
                    slot_id: 1,
                    date_slot_start: Some("2024-01-15T09:00:00".to_string()),
                    is_available: Some(true),
                },
            ],
            ..Default::default()
        };
        let listing = normalize(&raw);
        let slots = listing.slots_for("2024-01-15").unwrap();
        assert_eq!(slots[0].time, "09:00");
        assert_eq!(slots[1].time, "14:00");
    }

    #[test]
    fn category_label_resolves_at_the_boundary() {
        let raw = RawListing {
            id: 1,
            category: Some("Restaurants".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).category, Category::Restaurant);
    }
}
