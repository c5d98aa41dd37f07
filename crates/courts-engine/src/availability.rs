//! Per-snapshot reduction: court name → sorted free start times.
//!
//! Courts keep their payload order. Courts with nothing left are dropped. Two
//! courts sharing a display name collapse to one entry: the later court's
//! starts win, the earlier court's position is kept.

use crate::reservations::subtract;
use crate::slots::{build_candidates, MinStartStep, SlotSet};
use crate::snapshot::{ClubSnapshot, CourtId};

/// Free start labels per court name, in court order.
///
/// Stored as `Vec<(String, Vec<String>)>` to keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtAvailability {
    entries: Vec<(String, Vec<String>)>,
}

impl CourtAvailability {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, court: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == court)
            .map(|(_, starts)| starts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, starts)| (name.as_str(), starts.as_slice()))
    }

    fn insert(&mut self, court: String, starts: Vec<String>) {
        match self.entries.iter_mut().find(|(name, _)| *name == court) {
            Some(entry) => entry.1 = starts,
            None => self.entries.push((court, starts)),
        }
    }
}

/// Reduce one snapshot to the courts that still have free slots.
///
/// Start labels are sorted lexicographically, which for zero-padded `HH:MM`
/// is chronological. A start shared by several durations appears once per
/// distinct slot. Reservations on courts missing from the payload are skipped.
pub fn reduce(snapshot: &ClubSnapshot, min_start: MinStartStep) -> CourtAvailability {
    // Later courts with a repeated id replace earlier ones.
    let mut courts: Vec<(CourtId, &str, SlotSet)> = Vec::with_capacity(snapshot.courts.len());
    for court in &snapshot.courts {
        let candidates = build_candidates(court, min_start);
        match courts.iter_mut().find(|(id, _, _)| *id == court.id) {
            Some(entry) => *entry = (court.id, court.label.as_str(), candidates),
            None => courts.push((court.id, court.label.as_str(), candidates)),
        }
    }

    for reservation in &snapshot.reservations {
        if !courts.iter().any(|(id, _, _)| *id == reservation.court_id) {
            tracing::warn!(
                court_id = reservation.court_id,
                "reservation references an unknown court, skipping it"
            );
        }
    }

    let mut availability = CourtAvailability::default();
    for (id, label, candidates) in courts {
        let free = subtract(candidates, snapshot.reservations_for(id));
        if free.is_empty() {
            continue;
        }
        let mut starts: Vec<String> = free.into_iter().map(|slot| slot.start).collect();
        starts.sort();
        availability.insert(label.to_string(), starts);
    }

    availability
}
