pub mod coordinator;

pub use coordinator::{FavoritesCoordinator, FavoritesError, ToggleOutcome};
