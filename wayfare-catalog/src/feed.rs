use std::sync::Arc;

use wayfare_core::error::ServiceResult;
use wayfare_core::services::ListingService;
use wayfare_core::wire::ListingPage;

use crate::listing::Listing;
use crate::normalizer::normalize;
use crate::query::{build_query, build_search_query, FilterCriteria};

/// Accumulates paginated query results for an infinite-scroll surface.
///
/// A filter change replaces the accumulated listings; `load_more` appends
/// the next page while the server reports more. A free-text search
/// replaces the accumulation with one bounded query and turns paging off.
pub struct ListingFeed {
    service: Arc<dyn ListingService>,
    filters: FilterCriteria,
    per_page: u32,
    listings: Vec<Listing>,
    page: u32,
    total: u64,
    has_more: bool,
}

impl ListingFeed {
    pub fn new(service: Arc<dyn ListingService>, per_page: u32) -> Self {
        Self {
            service,
            filters: FilterCriteria::default(),
            per_page,
            listings: Vec::new(),
            page: 1,
            total: 0,
            has_more: false,
        }
    }

    /// Replace the accumulated results with page 1 of a fresh query.
    pub async fn refresh(&mut self, filters: FilterCriteria) -> ServiceResult<()> {
        let descriptor = build_query(&filters, 1, self.per_page);
        let response = self.service.query(&descriptor).await?;
        self.filters = filters;
        self.apply(response, true);
        Ok(())
    }

    /// Fetch and append the next page. Returns whether anything was
    /// appended; a feed with no further pages is a no-op, not an error.
    pub async fn load_more(&mut self) -> ServiceResult<bool> {
        if !self.has_more {
            return Ok(false);
        }
        let descriptor = build_query(&self.filters, self.page + 1, self.per_page);
        let response = self.service.query(&descriptor).await?;
        let appended = !response.data.is_empty();
        self.apply(response, false);
        Ok(appended)
    }

    /// One-shot free-text search. Replaces the accumulation and disables
    /// further paging; structured filters do not combine with the term.
    pub async fn search(&mut self, term: &str) -> ServiceResult<()> {
        let descriptor = build_search_query(term);
        let response = self.service.query(&descriptor).await?;
        tracing::debug!(term, hits = response.data.len(), "search results replaced feed");
        self.apply(response, true);
        self.has_more = false;
        Ok(())
    }

    fn apply(&mut self, response: ListingPage, replace: bool) {
        let normalized = response.data.iter().map(normalize);
        if replace {
            self.listings = normalized.collect();
        } else {
            self.listings.extend(normalized);
        }
        // Echo the server's pagination back rather than trusting the
        // requested cursor.
        self.page = response.page.max(1);
        self.total = response.total;
        self.has_more = response.has_more;
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Fetch and normalize one listing. A stale or invalid id is `None`;
/// callers render a not-found state instead of crashing.
pub async fn lookup_listing(
    service: &dyn ListingService,
    id: &str,
) -> ServiceResult<Option<Listing>> {
    Ok(service.lookup(id).await?.as_ref().map(normalize))
}
