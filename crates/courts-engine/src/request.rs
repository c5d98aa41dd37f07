//! Free-text command handling: `<club> [weekday ...]` → report text.
//!
//! Every outcome is a plain string suitable for a chat reply. Configuration
//! problems (unknown club, bad weekday) come back as diagnostics; upstream and
//! precondition failures abort the request and are rendered from the error.

use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use chrono_tz::Tz;

use crate::calendar::{dates_for_weekdays, parse_weekday_list, today_in, DEFAULT_WEEKDAYS};
use crate::club::Club;
use crate::error::Result;
use crate::report::aggregate;
use crate::slots::MinStartStep;
use crate::source::{fetch_batch, SnapshotSource};

/// Reply to a command with no content.
pub const EMPTY_REQUEST: &str = "empty request";

/// Prepended when the command names no weekdays.
pub const DEFAULT_WEEKDAYS_NOTICE: &str = "Unspecified dates, checking Weekend\n\n";

/// Immutable per-process settings for request handling.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Days ahead of the anchor date (inclusive) searched for weekdays.
    pub window_days: u32,
    /// Wall clock used to determine the anchor date.
    pub timezone: Tz,
    pub min_start: MinStartStep,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            timezone: chrono_tz::Europe::Zurich,
            min_start: MinStartStep::from_hour(13),
        }
    }
}

/// A parsed `<club> [weekday ...]` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub club: Club,
    pub weekdays: Vec<Weekday>,
    /// True when no weekdays were given and the weekend was assumed.
    pub defaulted: bool,
}

/// Parse a non-empty command. Weekday tokens may also be comma-separated.
pub fn parse_command(raw: &str) -> Result<Command> {
    let mut tokens = raw.split_whitespace();
    let club: Club = tokens.next().unwrap_or_default().parse()?;
    let rest: Vec<&str> = tokens.collect();
    let weekdays = parse_weekday_list(&rest.join(" "))?;

    Ok(if weekdays.is_empty() {
        Command {
            club,
            weekdays: DEFAULT_WEEKDAYS.to_vec(),
            defaulted: true,
        }
    } else {
        Command {
            club,
            weekdays,
            defaulted: false,
        }
    })
}

pub struct RequestProcessor {
    source: Arc<dyn SnapshotSource>,
    config: ProcessorConfig,
}

impl RequestProcessor {
    pub fn new(source: Arc<dyn SnapshotSource>, config: ProcessorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Answer a command relative to today's date in the configured timezone.
    pub async fn process(&self, raw: &str) -> String {
        self.process_on(raw, today_in(self.config.timezone)).await
    }

    /// Answer a command relative to `anchor`.
    pub async fn process_on(&self, raw: &str, anchor: NaiveDate) -> String {
        match self.try_process(raw, anchor).await {
            Ok(text) => text,
            Err(err) => {
                if !err.is_configuration() {
                    tracing::error!(error = %err, command = raw, "request failed");
                }
                err.to_string()
            }
        }
    }

    /// Like [`process_on`](Self::process_on) but surfaces errors typed.
    pub async fn try_process(&self, raw: &str, anchor: NaiveDate) -> Result<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(EMPTY_REQUEST.to_string());
        }

        let command = parse_command(raw)?;
        let dates = dates_for_weekdays(&command.weekdays, anchor, self.config.window_days);
        let report = self.report(command.club, &dates).await?;

        Ok(if command.defaulted {
            format!("{}{}", DEFAULT_WEEKDAYS_NOTICE, report)
        } else {
            report
        })
    }

    /// Fetch every date for `club` and render the availability report.
    pub async fn report(&self, club: Club, dates: &[String]) -> Result<String> {
        let snapshots = fetch_batch(Arc::clone(&self.source), club, dates).await?;
        aggregate(club.name(), dates, &snapshots, self.config.min_start)
    }
}
