use wayfare_core::wire::RawSlot;

use crate::listing::{AvailabilityDay, Slot};

/// Collapse raw time-stamped inventory records into a date-grouped slot
/// calendar.
///
/// Unavailable records are dropped first, so a date whose slots are all
/// unavailable never appears as a group. Dates keep the order in which
/// their first slot occurs in the input; within a date, slots sort
/// ascending by `HH:MM` time string. Duplicate slot ids pass through
/// untouched; the backend owns id uniqueness.
pub fn group_slots(raw: &[RawSlot]) -> Vec<AvailabilityDay> {
    let mut days: Vec<AvailabilityDay> = Vec::new();

    for record in raw {
        if !record.is_available.unwrap_or(false) {
            continue;
        }
        let Some((date, time)) = split_start(record.date_slot_start.as_deref()) else {
            continue;
        };
        let slot = Slot { id: record.slot_id, time };
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.slots.push(slot),
            None => days.push(AvailabilityDay { date, slots: vec![slot] }),
        }
    }

    for day in &mut days {
        day.slots.sort_by(|a, b| a.time.cmp(&b.time));
    }

    days
}

/// Split a combined `date_slot_start` into its date and `HH:MM` parts.
/// Records without a recognizable separator or a zero-padded `HH:MM`
/// prefix are unusable and get dropped; this path must never panic, so
/// the time slice is taken with `get` rather than indexing.
fn split_start(start: Option<&str>) -> Option<(String, String)> {
    let start = start?;
    let (date, rest) = start.split_once('T').or_else(|| start.split_once(' '))?;
    let time = rest.get(..5)?;
    if date.is_empty() || !is_hh_mm(time) {
        return None;
    }
    Some((date.to_string(), time.to_string()))
}

fn is_hh_mm(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}
