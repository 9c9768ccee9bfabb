use crate::audit::{AgeThreshold, Report, ReportStats, SnapshotAge};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// A single stale snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnapshotRecord {
    pub vm: String,
    pub snapshot: String,

    #[serde(rename = "created_utc", serialize_with = "serialize_created_at")]
    pub created_at: DateTime<Utc>,

    pub age_hours: f64,
}

impl SnapshotRecord {
    pub fn new(vm: impl Into<String>, snapshot: impl Into<String>, age: &SnapshotAge) -> Self {
        Self {
            vm: vm.into(),
            snapshot: snapshot.into(),
            created_at: age.created_at(),
            age_hours: age.hours(),
        }
    }
}

fn serialize_created_at<S>(created_at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&created_at.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

/// Collects records and turns them into a [`Report`].
///
/// Doesn't decide what gets included - that happens before records are pushed
/// here.
#[derive(Debug, Default)]
pub struct ReportAssembler {
    records: Vec<SnapshotRecord>,
}

impl ReportAssembler {
    pub fn push(&mut self, record: SnapshotRecord) {
        self.records.push(record);
    }

    pub fn finish(
        mut self,
        threshold: AgeThreshold,
        exclude_pattern: &str,
        stats: ReportStats,
    ) -> Report {
        // Oldest first; `sort_by` is stable, so ties stay in encounter order
        self.records.sort_by(|a, b| b.age_hours.total_cmp(&a.age_hours));

        Report {
            count: self.records.len(),
            threshold,
            exclude_pattern: exclude_pattern.into(),
            records: self.records,
            stats,
        }
    }
}
