//! Error types for courts-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourtsError {
    /// The club name is not in the registry. Carries the offending name and
    /// the comma-joined list of valid names.
    #[error("Unknown club: '{name}'. Available options are: {available}")]
    UnknownClub { name: String, available: String },

    #[error("Unknown weekday: '{0}'. Use three-letter names such as mon, sat, sun")]
    UnknownWeekday(String),

    /// Dates and snapshots must pair up one-to-one.
    #[error("Length mismatch: {dates} dates but {snapshots} snapshots")]
    LengthMismatch { dates: usize, snapshots: usize },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Fetch task failed: {0}")]
    Task(String),
}

impl CourtsError {
    /// Configuration errors are answered with a diagnostic; everything else
    /// aborts the request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CourtsError::UnknownClub { .. } | CourtsError::UnknownWeekday(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CourtsError>;
