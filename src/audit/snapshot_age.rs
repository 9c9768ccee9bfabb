use crate::audit::SnapshotTime;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// How long ago a snapshot was created, relative to some "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotAge {
    created_at: DateTime<Utc>,
    elapsed: Duration,
}

impl SnapshotAge {
    pub fn measure(created_at: &SnapshotTime, now: DateTime<Utc>) -> Self {
        let created_at = created_at.to_utc();

        Self {
            created_at,
            elapsed: now - created_at,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Negative for snapshots that claim to come from the future.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the age in hours, rounded to two decimal places.
    pub fn hours(&self) -> f64 {
        let seconds = match self.elapsed.num_microseconds() {
            Some(us) => us as f64 / 1_000_000.0,
            None => self.elapsed.num_seconds() as f64,
        };

        (seconds / 3600.0 * 100.0).round() / 100.0
    }
}

/// Minimum age a snapshot must reach to get reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgeThreshold(u32);

impl AgeThreshold {
    pub fn hours(hours: u32) -> Self {
        Self(hours)
    }

    pub fn as_hours(&self) -> u32 {
        self.0
    }

    /// Inclusive: a snapshot exactly as old as the threshold is reported.
    pub fn includes(&self, age: &SnapshotAge) -> bool {
        age.elapsed() >= Duration::hours(self.0.into())
    }
}

impl fmt::Display for AgeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
