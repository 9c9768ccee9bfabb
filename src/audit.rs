mod assembler;
mod flatten;
mod snapshot_age;
mod snapshot_time;
mod tree;
mod vm_filter;

pub use self::{
    assembler::*, flatten::*, snapshot_age::*, snapshot_time::*, tree::*, vm_filter::*,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Snapshots older than the threshold, across all non-excluded machines,
/// sorted oldest-first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    count: usize,

    #[serde(rename = "age_hours_threshold")]
    threshold: AgeThreshold,

    #[serde(rename = "exclude_vm_regex")]
    exclude_pattern: String,

    #[serde(rename = "snapshots")]
    records: Vec<SnapshotRecord>,

    #[serde(skip)]
    stats: ReportStats,
}

impl Report {
    pub fn generate<V>(
        vms: &[V],
        filter: &VmFilter,
        threshold: AgeThreshold,
        now: DateTime<Utc>,
    ) -> Self
    where
        V: VirtualMachine,
    {
        let mut assembler = ReportAssembler::default();
        let mut stats = ReportStats::default();

        for vm in vms {
            stats.scanned_vms += 1;

            if filter.excludes(vm.name()) {
                debug!(vm = vm.name(), "VM excluded by pattern");
                stats.excluded_vms += 1;
                continue;
            }

            if vm.root_snapshots().is_none() {
                debug!(vm = vm.name(), "VM has no snapshots");
                stats.vms_without_snapshots += 1;
                continue;
            }

            for (snapshot, created_at) in flatten(vm.root_snapshots()) {
                stats.inspected_snapshots += 1;

                let age = SnapshotAge::measure(created_at, now);

                if threshold.includes(&age) {
                    assembler.push(SnapshotRecord::new(vm.name(), snapshot, &age));
                }
            }
        }

        assembler.finish(threshold, filter.pattern(), stats)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn threshold(&self) -> AgeThreshold {
        self.threshold
    }

    pub fn exclude_pattern(&self) -> &str {
        &self.exclude_pattern
    }

    pub fn records(&self) -> &[SnapshotRecord] {
        &self.records
    }

    pub fn stats(&self) -> &ReportStats {
        &self.stats
    }
}

/// What the audit went through to produce a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub scanned_vms: usize,
    pub excluded_vms: usize,
    pub vms_without_snapshots: usize,
    pub inspected_snapshots: usize,
}
