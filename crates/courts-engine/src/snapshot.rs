//! Per-date club payload: court schedules plus the reservations on them.
//!
//! The GotCourts reservations endpoint wraps everything in a
//! `{"response": {"club": {"courts": [...]}, "reservations": [...]}}` envelope;
//! [`ClubSnapshot::from_api_json`] unwraps it. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timegrid::TimeOffset;

/// Opaque court identifier assigned by the upstream source.
pub type CourtId = u64;

/// A court's static opening-hours grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSchedule {
    pub id: CourtId,
    /// Display name shown in reports.
    pub label: String,
    pub opening_time: TimeOffset,
    pub closing_time: TimeOffset,
    /// Grid step in seconds.
    pub interval: TimeOffset,
    /// Allowed match lengths, each a count of `interval` steps.
    #[serde(default)]
    pub durations: Vec<u32>,
}

/// An existing booking on one court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub court_id: CourtId,
    pub start_time: TimeOffset,
    pub end_time: TimeOffset,
}

/// Everything the upstream source reports for one (club, date) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSnapshot {
    pub courts: Vec<CourtSchedule>,
    pub reservations: Vec<Reservation>,
}

#[derive(Deserialize)]
struct Envelope {
    response: EnvelopeResponse,
}

#[derive(Deserialize)]
struct EnvelopeResponse {
    club: EnvelopeClub,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

#[derive(Deserialize)]
struct EnvelopeClub {
    #[serde(default)]
    courts: Vec<CourtSchedule>,
}

impl ClubSnapshot {
    /// Decode a raw reservations-endpoint body.
    ///
    /// # Errors
    /// Returns `CourtsError::Decode` if the body is not valid JSON or lacks the
    /// `response.club` envelope.
    pub fn from_api_json(body: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(body)?;
        Ok(Self {
            courts: envelope.response.club.courts,
            reservations: envelope.response.reservations,
        })
    }

    /// Reservations booked on the given court, in payload order.
    pub fn reservations_for(&self, court_id: CourtId) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |r| r.court_id == court_id)
    }
}
