//! Candidate slot enumeration over a court's opening grid.
//!
//! Every allowed duration walks the grid from opening to closing in strides of
//! its own length, so a 2-step duration on a 30-minute grid yields 13:00-14:00,
//! 14:00-15:00, ... and never 13:30-14:30. Slot identity is the label pair, so
//! different (duration, step) combinations producing the same window collapse.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::snapshot::CourtSchedule;
use crate::timegrid::to_label;

/// A labeled (start, end) booking window.
///
/// Ordering is lexicographic on `(start, end)`; with zero-padded labels that is
/// chronological within a day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slot {
    pub start: String,
    pub end: String,
}

impl Slot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Deterministically ordered set of slots.
pub type SlotSet = BTreeSet<Slot>;

/// Lowest grid step index a candidate may start on.
///
/// The value is compared raw against the step index of the court's grid.
/// [`MinStartStep::from_hour`] stores `hour * 60`, which only reads as "not
/// before `hour`:00" on a 60-second grid (the GotCourts default). On coarser
/// grids the same number is a far later cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinStartStep(pub u32);

impl MinStartStep {
    /// No cutoff.
    pub const NONE: Self = Self(0);

    pub fn from_hour(hour: u32) -> Self {
        Self(hour.saturating_mul(60))
    }

    pub fn steps(self) -> u32 {
        self.0
    }
}

/// Build the full candidate set for one court.
///
/// Returns an empty set when closing does not lie past opening on the grid,
/// when the court declares no durations, or when the interval is zero.
/// Zero-length durations are skipped.
pub fn build_candidates(court: &CourtSchedule, min_start: MinStartStep) -> SlotSet {
    let mut slots = SlotSet::new();
    let interval = court.interval;
    if interval == 0 {
        return slots;
    }

    let open_step = court.opening_time / interval;
    let close_step = court.closing_time / interval;

    for &duration in &court.durations {
        if duration == 0 {
            continue;
        }
        for step in (open_step..close_step).step_by(duration as usize) {
            if step < min_start.steps() {
                continue;
            }
            let (Some(start), Some(end)) = (
                step.checked_mul(interval),
                step.checked_add(duration)
                    .and_then(|s| s.checked_mul(interval)),
            ) else {
                continue;
            };
            slots.insert(Slot::new(to_label(start), to_label(end)));
        }
    }

    slots
}
