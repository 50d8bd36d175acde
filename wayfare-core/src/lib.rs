pub mod auth;
pub mod error;
pub mod services;
pub mod wire;

pub use auth::AuthGate;
pub use error::{ServiceError, ServiceResult};
pub use services::{FavoritesService, ListingService, ReservationService};
pub use wire::{ListingPage, QueryDescriptor, RawListing, RawReservation, RawSlot, ReservationRequest};
