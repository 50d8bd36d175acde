use serde::{Deserialize, Serialize};

/// In-progress booking selection, scoped to one flow instance. A fresh
/// draft is created every time the flow opens; nothing survives a close.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationDraft {
    pub date: String,
    pub slot_id: Option<i64>,
    pub time: String,
    pub participants: u32,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            slot_id: None,
            time: String::new(),
            participants: 1,
        }
    }
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choosing a date clears any previously chosen slot, so a stale
    /// slot can never be paired with a new date.
    pub fn select_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        self.slot_id = None;
        self.time.clear();
    }

    pub fn select_slot(&mut self, slot_id: i64, time: impl Into<String>) {
        self.slot_id = Some(slot_id);
        self.time = time.into();
    }

    /// Participant count is clamped to a minimum of 1 on every change.
    pub fn set_participants(&mut self, count: u32) {
        self.participants = count.max(1);
    }

    pub fn increment_participants(&mut self) {
        self.participants += 1;
    }

    /// Decrements below 1 are no-ops.
    pub fn decrement_participants(&mut self) {
        if self.participants > 1 {
            self.participants -= 1;
        }
    }

    /// Whether the selection is complete enough to move to payment.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && self.slot_id.is_some()
    }
}
