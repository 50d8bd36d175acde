use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::wire::{ListingPage, QueryDescriptor, RawListing, RawReservation, ReservationRequest};

/// Service trait for the paginated listing store.
#[async_trait]
pub trait ListingService: Send + Sync {
    async fn query(&self, descriptor: &QueryDescriptor) -> ServiceResult<ListingPage>;

    /// Single-listing lookup. A stale or invalid id yields `None`, not an
    /// error; callers render a not-found state.
    async fn lookup(&self, id: &str) -> ServiceResult<Option<RawListing>>;
}

/// Service trait for committing a reservation.
#[async_trait]
pub trait ReservationService: Send + Sync {
    async fn create(&self, request: &ReservationRequest) -> ServiceResult<RawReservation>;
}

/// Service trait for the remote favorites store.
#[async_trait]
pub trait FavoritesService: Send + Sync {
    async fn list(&self) -> ServiceResult<Vec<String>>;

    async fn add(&self, listing_id: &str) -> ServiceResult<()>;

    async fn remove(&self, listing_id: &str) -> ServiceResult<()>;
}
