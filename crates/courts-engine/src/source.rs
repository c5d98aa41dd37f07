//! The snapshot fetch seam and the per-date fan-out over it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinSet;

use crate::club::Club;
use crate::error::{CourtsError, Result};
use crate::snapshot::ClubSnapshot;

/// Anything that can produce a [`ClubSnapshot`] for a (club, date) pair.
///
/// Implementations own their timeout and retry policy; the engine does not
/// retry.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch one day's payload. `date` is `YYYY-MM-DD`.
    async fn fetch(&self, club: Club, date: &str) -> Result<ClubSnapshot>;
}

/// Fetch every date concurrently, one task per date.
///
/// Results come back in `dates` order regardless of completion order. The
/// first failure fails the whole batch and the remaining tasks are aborted.
pub async fn fetch_batch(
    source: Arc<dyn SnapshotSource>,
    club: Club,
    dates: &[String],
) -> Result<Vec<ClubSnapshot>> {
    let mut join_set = JoinSet::new();
    for (index, date) in dates.iter().cloned().enumerate() {
        let source = Arc::clone(&source);
        join_set.spawn(async move {
            tracing::debug!(%club, %date, "fetching snapshot");
            (index, source.fetch(club, &date).await)
        });
    }

    let mut results: Vec<Option<ClubSnapshot>> = (0..dates.len()).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let (index, result) = joined.map_err(|e| CourtsError::Task(e.to_string()))?;
        results[index] = Some(result?);
    }

    results
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| CourtsError::Task("fetch task finished without a result".to_string()))
}
