//! # courts-engine
//!
//! Deterministic tennis court availability from a club's opening grid and its
//! reservations.
//!
//! Everything from [`timegrid`] through [`report`] is pure: the same snapshots
//! always produce the same report. [`source`] and [`request`] add the async
//! fetch fan-out and the chat command front end on top.
//!
//! ## Modules
//!
//! - [`timegrid`] - second offsets → `HH:MM` labels
//! - [`slots`] - candidate slot enumeration per court
//! - [`reservations`] - reservation subtraction with a subset guard
//! - [`availability`] - per-snapshot court → free start times
//! - [`report`] - multi-date report and text rendering
//! - [`snapshot`] - upstream payload types
//! - [`club`] - club registry
//! - [`calendar`] - weekday parsing and date selection
//! - [`source`] - fetch seam and concurrent batch fetch
//! - [`request`] - `<club> [weekday ...]` command processing
//! - [`error`] - Error types

pub mod availability;
pub mod calendar;
pub mod club;
pub mod error;
pub mod report;
pub mod request;
pub mod reservations;
pub mod slots;
pub mod snapshot;
pub mod source;
pub mod timegrid;

pub use availability::{reduce, CourtAvailability};
pub use calendar::{dates_for_weekdays, parse_weekday, parse_weekday_list};
pub use club::Club;
pub use error::CourtsError;
pub use report::{aggregate, AvailabilityReport};
pub use request::{ProcessorConfig, RequestProcessor};
pub use reservations::subtract;
pub use slots::{build_candidates, MinStartStep, Slot, SlotSet};
pub use snapshot::{ClubSnapshot, CourtSchedule, Reservation};
pub use source::{fetch_batch, SnapshotSource};
pub use timegrid::{to_label, to_label_with_seconds};
