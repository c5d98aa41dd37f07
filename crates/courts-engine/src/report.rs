//! Multi-date availability report and its chat-friendly text rendering.
//!
//! Text layout, one section per date in input order:
//!
//! ```text
//! *2026-10-17* (lengg)
//! Court 1:  13:00, 14:00
//! Court 3:  16:00
//!
//! *2026-10-18* (lengg)
//! -- all reserved
//!
//! ```

use crate::availability::{reduce, CourtAvailability};
use crate::error::{CourtsError, Result};
use crate::slots::MinStartStep;
use crate::snapshot::ClubSnapshot;

/// Availability of one club on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAvailability {
    pub date: String,
    pub club: String,
    pub courts: CourtAvailability,
}

/// Ordered per-date sections. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub sections: Vec<DateAvailability>,
}

impl AvailabilityReport {
    /// Reduce each (date, snapshot) pair, keeping the caller's date order.
    ///
    /// # Errors
    /// Returns `CourtsError::LengthMismatch` if `dates` and `snapshots` differ
    /// in length.
    pub fn build(
        club: &str,
        dates: &[String],
        snapshots: &[ClubSnapshot],
        min_start: MinStartStep,
    ) -> Result<Self> {
        if dates.len() != snapshots.len() {
            return Err(CourtsError::LengthMismatch {
                dates: dates.len(),
                snapshots: snapshots.len(),
            });
        }

        let sections = dates
            .iter()
            .zip(snapshots)
            .map(|(date, snapshot)| DateAvailability {
                date: date.clone(),
                club: club.to_string(),
                courts: reduce(snapshot, min_start),
            })
            .collect();

        Ok(Self { sections })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("*{}* ({})\n", section.date, section.club));
            if section.courts.is_empty() {
                out.push_str("-- all reserved\n\n");
                continue;
            }
            let lines: Vec<String> = section
                .courts
                .iter()
                .map(|(name, starts)| format!("{}:  {}", name, starts.join(", ")))
                .collect();
            out.push_str(&lines.join("\n"));
            out.push_str("\n\n");
        }
        out
    }
}

/// Build and render the report in one step.
pub fn aggregate(
    club: &str,
    dates: &[String],
    snapshots: &[ClubSnapshot],
    min_start: MinStartStep,
) -> Result<String> {
    AvailabilityReport::build(club, dates, snapshots, min_start).map(|report| report.render())
}
