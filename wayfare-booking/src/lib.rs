pub mod draft;
pub mod flow;
pub mod models;
pub mod payment;

pub use draft::ReservationDraft;
pub use flow::{BookingError, BookingFlow, BookingStep};
pub use models::{Reservation, ReservationStatus};
pub use payment::{CardForm, PAYMENT_SIMULATION_DELAY, PLACEHOLDER_PAYMENT_TOKEN};
