//! Remove reserved windows from a court's candidate set.
//!
//! The upstream source records reservations on a fixed 60-second step with
//! one-hour blocks, independent of the court's own interval. A reservation is
//! only applied when every hour block it covers is a current candidate; one
//! that does not fit the court's grid leaves the set untouched.

use crate::slots::{Slot, SlotSet};
use crate::snapshot::Reservation;
use crate::timegrid::{to_label, TimeOffset};

/// Step unit of reservation data, in seconds.
pub const RESERVATION_STEP: TimeOffset = 60;

/// Number of reservation steps per reserved block.
pub const RESERVATION_BLOCK_STEPS: TimeOffset = 60;

/// The hour blocks a reservation covers, as slots.
///
/// A reservation whose end does not lie past its start covers nothing.
/// Returns `None` when a block end falls outside the offset range.
pub fn reserved_slots(reservation: &Reservation) -> Option<SlotSet> {
    let first = reservation.start_time / RESERVATION_STEP;
    let last = reservation.end_time / RESERVATION_STEP;

    (first..last)
        .step_by(RESERVATION_BLOCK_STEPS as usize)
        .map(|i| {
            let start = i.checked_mul(RESERVATION_STEP)?;
            let end = i
                .checked_add(RESERVATION_BLOCK_STEPS)?
                .checked_mul(RESERVATION_STEP)?;
            Some(Slot::new(to_label(start), to_label(end)))
        })
        .collect()
}

/// Subtract a court's reservations from its candidate set.
///
/// `reservations` must already be filtered to the court. The result is never
/// larger than `candidates`.
pub fn subtract<'a, I>(mut candidates: SlotSet, reservations: I) -> SlotSet
where
    I: IntoIterator<Item = &'a Reservation>,
{
    for reservation in reservations {
        match reserved_slots(reservation) {
            Some(reserved) if reserved.is_subset(&candidates) => {
                candidates.retain(|slot| !reserved.contains(slot));
            }
            _ => {
                tracing::warn!(
                    court_id = reservation.court_id,
                    start_time = reservation.start_time,
                    end_time = reservation.end_time,
                    "reservation does not fit the court grid, ignoring it"
                );
            }
        }
    }
    candidates
}
