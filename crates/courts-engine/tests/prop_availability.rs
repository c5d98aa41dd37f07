//! Property-based tests for the availability engine using proptest.
//!
//! These tests verify invariants that should hold for *any* well-formed court
//! grid and reservation list, not just the examples in the other test files.

use courts_engine::availability::reduce;
use courts_engine::error::CourtsError;
use courts_engine::report::aggregate;
use courts_engine::reservations::subtract;
use courts_engine::slots::{build_candidates, MinStartStep};
use courts_engine::snapshot::{ClubSnapshot, CourtSchedule, Reservation};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_interval() -> impl Strategy<Value = u32> {
    prop_oneof![Just(60u32), Just(300), Just(900), Just(1800), Just(3600)]
}

/// A court open for at least one hour between 06:00 and 23:00 whose durations
/// all fit inside the opening span.
fn arb_court() -> impl Strategy<Value = CourtSchedule> {
    (arb_interval(), 6u32..=20, 1u32..=3)
        .prop_flat_map(|(interval, open_hour, span_hours)| {
            let span_steps = span_hours * 3600 / interval;
            (
                Just(interval),
                Just(open_hour),
                Just(span_hours),
                prop::collection::vec(1u32..=span_steps, 1..4),
            )
        })
        .prop_map(|(interval, open_hour, span_hours, durations)| CourtSchedule {
            id: 1,
            label: "Court 1".to_string(),
            opening_time: open_hour * 3600,
            closing_time: (open_hour + span_hours) * 3600,
            interval,
            durations,
        })
}

/// Whole-hour reservations anywhere in the day, including off-grid and empty ones.
fn arb_reservations() -> impl Strategy<Value = Vec<Reservation>> {
    prop::collection::vec(
        (0u32..24, 0u32..4, prop_oneof![Just(0u32), Just(1800)]).prop_map(
            |(start_hour, hours, shift)| Reservation {
                court_id: 1,
                start_time: start_hour * 3600 + shift,
                end_time: (start_hour + hours) * 3600 + shift,
            },
        ),
        0..6,
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn candidates_are_non_empty_and_well_ordered(court in arb_court()) {
        let candidates = build_candidates(&court, MinStartStep::NONE);
        prop_assert!(!candidates.is_empty());
        for slot in &candidates {
            prop_assert!(slot.start < slot.end, "{:?}", slot);
        }
    }

    #[test]
    fn subtract_never_adds_slots(court in arb_court(), reservations in arb_reservations()) {
        let candidates = build_candidates(&court, MinStartStep::NONE);
        let result = subtract(candidates.clone(), &reservations);
        prop_assert!(result.len() <= candidates.len());
        prop_assert!(result.is_subset(&candidates));
    }

    #[test]
    fn reduce_is_idempotent(court in arb_court(), reservations in arb_reservations()) {
        let snapshot = ClubSnapshot { courts: vec![court], reservations };
        prop_assert_eq!(
            reduce(&snapshot, MinStartStep::NONE),
            reduce(&snapshot, MinStartStep::NONE)
        );
    }

    #[test]
    fn reduced_start_lists_are_sorted(court in arb_court(), reservations in arb_reservations()) {
        let snapshot = ClubSnapshot { courts: vec![court], reservations };
        for (_, starts) in reduce(&snapshot, MinStartStep::NONE).iter() {
            prop_assert!(!starts.is_empty());
            prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn mismatched_lengths_always_fail(dates in 0usize..5, snapshots in 0usize..5) {
        prop_assume!(dates != snapshots);
        let date_list: Vec<String> = (0..dates).map(|i| format!("2026-10-{:02}", i + 1)).collect();
        let snapshot_list: Vec<ClubSnapshot> = (0..snapshots).map(|_| ClubSnapshot::default()).collect();
        let err = aggregate("lengg", &date_list, &snapshot_list, MinStartStep::NONE).unwrap_err();
        let is_mismatch = matches!(err, CourtsError::LengthMismatch { .. });
        prop_assert!(is_mismatch);
    }
}
