//! Pieces shared by every repository: simulated latency and id assignment.

use std::collections::BTreeSet;
use std::time::Duration;

use academy_core::types::DbId;
use rand::Rng;

// ---------------------------------------------------------------------------
// Latency
// ---------------------------------------------------------------------------

/// Default inclusive lower bound of the simulated delay.
pub const DEFAULT_LATENCY_MIN_MS: u64 = 200;

/// Default exclusive upper bound of the simulated delay.
pub const DEFAULT_LATENCY_MAX_MS: u64 = 500;

/// Artificial delay applied before every store operation.
///
/// Each call samples uniformly from `[min, max)`. When `min >= max` the
/// delay is exactly `min`. Delays are independent per call, so operations
/// issued concurrently complete in delay order rather than call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    min: Duration,
    max: Duration,
}

impl Latency {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw one delay from the configured window.
    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        let span = u64::try_from((self.max - self.min).as_nanos()).unwrap_or(u64::MAX);
        self.min + Duration::from_nanos(rand::rng().random_range(0..span))
    }

    /// Sleep for one sampled delay.
    pub async fn wait(&self) {
        let delay = self.sample();
        tracing::trace!(delay_ms = delay.as_millis() as u64, "Simulating store latency");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LATENCY_MIN_MS, DEFAULT_LATENCY_MAX_MS)
    }
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Next id for a collection: one past the largest surviving id, or `1` for
/// an empty collection.
///
/// Computed from survivors, so deleting the current maximum lets its id be
/// handed out again. If the maximum is `DbId::MAX`, falls back to the
/// lowest unused positive id.
pub fn next_id(ids: impl IntoIterator<Item = DbId>) -> DbId {
    let ids: BTreeSet<DbId> = ids.into_iter().collect();
    let Some(&max) = ids.last() else {
        return 1;
    };
    match max.checked_add(1) {
        Some(id) => id,
        None => {
            let id = lowest_free_id(&ids);
            tracing::warn!(id, "Id sequence exhausted, reusing lowest free id");
            id
        }
    }
}

fn lowest_free_id(ids: &BTreeSet<DbId>) -> DbId {
    let mut candidate: DbId = 1;
    for &id in ids.range(1..) {
        if id != candidate {
            break;
        }
        candidate = candidate.saturating_add(1);
    }
    candidate
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
