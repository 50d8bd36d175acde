use serde::{Deserialize, Serialize};
use wayfare_core::wire::QueryDescriptor;

use crate::category::Category;

/// Bounded page size for the single-shot free-text search query.
pub const SEARCH_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocationFilter {
    pub lat: f64,
    pub lng: f64,
    /// Radius in kilometers; the backend does the geometry.
    pub radius: f64,
}

/// User-selected filter criteria. Every dimension is optional; an absent
/// dimension means "no constraint", while a present zero (e.g. a minimum
/// price of 0) is a real constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f32>,
    /// ISO date (`YYYY-MM-DD`).
    pub date: Option<String>,
    pub location: Option<LocationFilter>,
}

/// Translate filter criteria plus a pagination cursor into a query
/// descriptor. Inclusion is presence-based; string dimensions must also
/// be non-empty. Pagination is always present, with `page` floored at 1.
pub fn build_query(filters: &FilterCriteria, page: u32, per_page: u32) -> QueryDescriptor {
    QueryDescriptor {
        search: None,
        category: filters.category.map(|c| c.as_str().to_string()),
        min_price: filters.min_price,
        max_price: filters.max_price,
        min_rating: filters.min_rating,
        date: filters.date.clone().filter(|d| !d.is_empty()),
        lat: filters.location.map(|l| l.lat),
        lng: filters.location.map(|l| l.lng),
        radius: filters.location.map(|l| l.radius),
        page: page.max(1),
        per_page,
    }
}

/// Free-text search is a distinct mode, not an extra AND-ed dimension: a
/// present term issues one bounded, unpaginated query and structured
/// filters do not ride along.
pub fn build_search_query(term: &str) -> QueryDescriptor {
    QueryDescriptor {
        search: Some(term.to_string()),
        page: 1,
        per_page: SEARCH_PAGE_SIZE,
        ..Default::default()
    }
}

/// Number of set filter dimensions, for UI feedback ("3 filters active").
pub fn active_filter_count(filters: &FilterCriteria) -> usize {
    let mut count = 0;
    if filters.category.is_some() {
        count += 1;
    }
    if filters.min_price.is_some() {
        count += 1;
    }
    if filters.max_price.is_some() {
        count += 1;
    }
    if filters.min_rating.is_some() {
        count += 1;
    }
    if filters.date.as_deref().is_some_and(|d| !d.is_empty()) {
        count += 1;
    }
    if filters.location.is_some() {
        count += 1;
    }
    count
}
