use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Snapshot's creation time, as reported by the inventory.
///
/// Timestamps without an offset are taken to be UTC already; they are never
/// shifted by the local time zone.
#[derive(Clone, Debug, PartialEq, Eq, DeserializeFromStr)]
pub enum SnapshotTime {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl SnapshotTime {
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            SnapshotTime::Naive(time) => Utc.from_utc_datetime(time),
            SnapshotTime::Offset(time) => time.with_timezone(&Utc),
        }
    }
}

impl FromStr for SnapshotTime {
    type Err = InvalidSnapshotTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(time) = DateTime::parse_from_rfc3339(s) {
            return Ok(SnapshotTime::Offset(time));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(SnapshotTime::Naive)
            .ok_or_else(|| InvalidSnapshotTime(s.into()))
    }
}

impl fmt::Display for SnapshotTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SnapshotTime::Naive(time) => write!(f, "{}", time.format("%Y-%m-%dT%H:%M:%S%.f")),
            SnapshotTime::Offset(time) => write!(f, "{}", time.to_rfc3339()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid snapshot creation time: {0}")]
pub struct InvalidSnapshotTime(String);
