use std::sync::Arc;
use std::time::Duration;

use wayfare_catalog::listing::Listing;
use wayfare_core::error::ServiceError;
use wayfare_core::services::ReservationService;
use wayfare_core::wire::ReservationRequest;

use crate::draft::ReservationDraft;
use crate::models::Reservation;
use crate::payment::{CardForm, PAYMENT_SIMULATION_DELAY, PLACEHOLDER_PAYMENT_TOKEN};

/// Booking flow steps. Strictly forward: Selecting → Paying → Confirmed.
/// There is no way back from Paying; closing the flow discards it, and
/// the next open constructs a fresh `BookingFlow` at Selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Selecting,
    Paying,
    Confirmed,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("a date and slot must be chosen before payment")]
    IncompleteSelection,

    #[error("card details are incomplete")]
    CardNotReady,

    #[error("a submission is already pending")]
    SubmissionPending,

    #[error("reservation commit failed: {0}")]
    CommitFailed(#[from] ServiceError),
}

/// Drives a single booking attempt for one listing.
///
/// One instance per opened flow; the UI opens at most one at a time, and
/// transitions within an instance are strictly sequential. The busy flag
/// mirrors the disabled submit control: a second submission while one is
/// outstanding is refused, not queued.
pub struct BookingFlow {
    listing: Listing,
    service: Arc<dyn ReservationService>,
    payment_delay: Duration,
    step: BookingStep,
    draft: ReservationDraft,
    card: CardForm,
    pending: bool,
    outcome: Option<Reservation>,
}

impl BookingFlow {
    pub fn new(listing: Listing, service: Arc<dyn ReservationService>) -> Self {
        Self::with_payment_delay(listing, service, PAYMENT_SIMULATION_DELAY)
    }

    pub fn with_payment_delay(
        listing: Listing,
        service: Arc<dyn ReservationService>,
        payment_delay: Duration,
    ) -> Self {
        Self {
            listing,
            service,
            payment_delay,
            step: BookingStep::Selecting,
            draft: ReservationDraft::new(),
            card: CardForm::default(),
            pending: false,
            outcome: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn outcome(&self) -> Option<&Reservation> {
        self.outcome.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Selection mutators. Only meaningful while Selecting; the rendered
    /// controls disappear afterwards, so later calls are ignored.
    pub fn select_date(&mut self, date: &str) {
        if self.step == BookingStep::Selecting {
            self.draft.select_date(date);
        }
    }

    pub fn select_slot(&mut self, slot_id: i64, time: &str) {
        if self.step == BookingStep::Selecting {
            self.draft.select_slot(slot_id, time);
        }
    }

    pub fn set_participants(&mut self, count: u32) {
        if self.step == BookingStep::Selecting {
            self.draft.set_participants(count);
        }
    }

    /// Whether the Selecting → Paying transition is currently unblocked.
    pub fn can_proceed_to_payment(&self) -> bool {
        self.step == BookingStep::Selecting && self.draft.is_complete()
    }

    /// Selecting → Paying. Gated on a complete selection.
    pub fn proceed_to_payment(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Selecting {
            return Err(self.invalid_transition(BookingStep::Paying));
        }
        if !self.draft.is_complete() {
            return Err(BookingError::IncompleteSelection);
        }
        self.step = BookingStep::Paying;
        Ok(())
    }

    pub fn set_card(&mut self, number: &str, expiry: &str, cvc: &str) {
        if self.step == BookingStep::Paying {
            self.card = CardForm {
                number: number.to_string(),
                expiry: expiry.to_string(),
                cvc: cvc.to_string(),
            };
        }
    }

    pub fn card_ready(&self) -> bool {
        self.card.is_ready()
    }

    /// Client-side display total: listing price × participants.
    pub fn total_price(&self) -> f64 {
        self.listing.price * f64::from(self.draft.participants)
    }

    /// Paying → Confirmed. Waits the simulated payment round-trip, then
    /// commits the reservation. On failure the flow stays in Paying with
    /// the busy flag cleared, so the user may correct the card fields and
    /// retry; nothing is retried automatically.
    pub async fn submit_payment(&mut self) -> Result<&Reservation, BookingError> {
        if self.step != BookingStep::Paying {
            return Err(self.invalid_transition(BookingStep::Confirmed));
        }
        if self.pending {
            return Err(BookingError::SubmissionPending);
        }
        if !self.card.is_ready() {
            return Err(BookingError::CardNotReady);
        }
        // The draft was validated on entry to Paying and cannot change
        // afterwards, so the slot id is present here.
        let Some(slot_id) = self.draft.slot_id else {
            return Err(BookingError::IncompleteSelection);
        };

        self.pending = true;
        tokio::time::sleep(self.payment_delay).await;

        let request = ReservationRequest {
            listing_id: self.listing.id.clone(),
            slot_id,
            date: self.draft.date.clone(),
            time: self.draft.time.clone(),
            participants: self.draft.participants,
            total_price: self.total_price(),
            payment_token: PLACEHOLDER_PAYMENT_TOKEN.to_string(),
        };

        match self.service.create(&request).await {
            Ok(raw) => {
                self.pending = false;
                let reservation = Reservation::from_raw(raw, request.total_price);
                tracing::info!(
                    reservation_id = %reservation.id,
                    listing_id = %reservation.listing_id,
                    "reservation confirmed"
                );
                self.step = BookingStep::Confirmed;
                Ok(self.outcome.insert(reservation))
            }
            Err(err) => {
                self.pending = false;
                tracing::error!(listing_id = %self.listing.id, error = %err, "reservation commit failed");
                Err(BookingError::CommitFailed(err))
            }
        }
    }

    fn invalid_transition(&self, to: BookingStep) -> BookingError {
        BookingError::InvalidTransition {
            from: format!("{:?}", self.step),
            to: format!("{:?}", to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wayfare_core::error::ServiceResult;
    use wayfare_core::wire::RawReservation;

    /// Fails the first `failures` commits, then echoes the request back.
    struct FlakyReservationService {
        failures: Mutex<u32>,
        requests: Mutex<Vec<ReservationRequest>>,
    }

    impl FlakyReservationService {
        fn new(failures: u32) -> Self {
            Self {
                failures: Mutex::new(failures),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReservationService for FlakyReservationService {
        async fn create(&self, request: &ReservationRequest) -> ServiceResult<RawReservation> {
            self.requests.lock().unwrap().push(request.clone());
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(ServiceError::Transport("boom".to_string()));
            }
            Ok(RawReservation {
                id: 501,
                listing_id: request.listing_id.clone(),
                slot_id: request.slot_id,
                date: request.date.clone(),
                time: request.time.clone(),
                participants: request.participants,
                status: Some("confirmed".to_string()),
                total_price: Some(request.total_price),
                ..Default::default()
            })
        }
    }

    fn listing(price: f64) -> Listing {
        use wayfare_core::wire::RawListing;
        wayfare_catalog::normalize(&RawListing {
            id: 9,
            price_per_person: Some(price),
            ..Default::default()
        })
    }

    fn ready_flow(service: Arc<FlakyReservationService>) -> BookingFlow {
        let mut flow =
            BookingFlow::with_payment_delay(listing(300.0), service, Duration::ZERO);
        flow.select_date("2024-01-15");
        flow.select_slot(7, "09:00");
        flow.set_participants(2);
        flow.proceed_to_payment().unwrap();
        flow.set_card("4242 4242 4242 4242", "12/29", "123");
        flow
    }

    #[tokio::test]
    async fn full_flow_commits_with_computed_total() {
        let service = Arc::new(FlakyReservationService::new(0));
        let mut flow = ready_flow(service.clone());

        let outcome = flow.submit_payment().await.unwrap();
        assert_eq!(outcome.total_price, 600.0);
        assert_eq!(flow.step(), BookingStep::Confirmed);

        let sent = service.requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].total_price, 600.0);
        assert_eq!(sent[0].participants, 2);
        assert_eq!(sent[0].payment_token, PLACEHOLDER_PAYMENT_TOKEN);
    }

    #[tokio::test]
    async fn incomplete_selection_blocks_payment() {
        let service = Arc::new(FlakyReservationService::new(0));
        let mut flow =
            BookingFlow::with_payment_delay(listing(300.0), service, Duration::ZERO);

        assert!(!flow.can_proceed_to_payment());
        assert!(matches!(
            flow.proceed_to_payment(),
            Err(BookingError::IncompleteSelection)
        ));

        // Choosing a new date after a slot was picked re-blocks the
        // transition.
        flow.select_date("2024-01-15");
        flow.select_slot(7, "09:00");
        assert!(flow.can_proceed_to_payment());
        flow.select_date("2024-01-16");
        assert!(!flow.can_proceed_to_payment());
    }

    #[tokio::test]
    async fn submit_is_refused_outside_paying() {
        let service = Arc::new(FlakyReservationService::new(0));
        let mut flow =
            BookingFlow::with_payment_delay(listing(300.0), service, Duration::ZERO);

        let err = flow.submit_payment().await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn unready_card_blocks_submission() {
        let service = Arc::new(FlakyReservationService::new(0));
        let mut flow = ready_flow(service.clone());
        flow.set_card("4242 4242 4242 4242", "12/29", "12");

        let err = flow.submit_payment().await.unwrap_err();
        assert!(matches!(err, BookingError::CardNotReady));
        assert!(service.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn commit_failure_stays_in_paying_and_allows_retry() {
        let service = Arc::new(FlakyReservationService::new(1));
        let mut flow = ready_flow(service.clone());

        let err = flow.submit_payment().await.unwrap_err();
        assert!(matches!(err, BookingError::CommitFailed(_)));
        assert_eq!(flow.step(), BookingStep::Paying);
        assert!(!flow.is_pending());
        assert!(flow.outcome().is_none());

        flow.submit_payment().await.unwrap();
        assert_eq!(flow.step(), BookingStep::Confirmed);
        assert_eq!(service.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn selection_is_frozen_after_leaving_selecting() {
        let service = Arc::new(FlakyReservationService::new(0));
        let mut flow = ready_flow(service);

        flow.select_date("2024-02-01");
        assert_eq!(flow.draft().date, "2024-01-15");
        assert_eq!(flow.draft().slot_id, Some(7));
    }
}
