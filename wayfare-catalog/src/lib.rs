pub mod category;
pub mod feed;
pub mod listing;
pub mod normalizer;
pub mod query;
pub mod slots;

pub use category::{Category, CategoryBadgeCache};
pub use feed::{lookup_listing, ListingFeed};
pub use listing::{AvailabilityDay, Bilingual, GeoPoint, Host, Listing, Slot};
pub use normalizer::normalize;
pub use query::{active_filter_count, build_query, build_search_query, FilterCriteria, LocationFilter};
pub use slots::group_slots;
