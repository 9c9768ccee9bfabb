use crate::audit::ReportStats;
use colored::Colorize;
use std::fmt;

pub struct Summary<'a> {
    title: &'static str,
    stats: &'a ReportStats,
    reported_snapshots: usize,
}

impl<'a> Summary<'a> {
    pub fn new(stats: &'a ReportStats, reported_snapshots: usize) -> Self {
        Self {
            title: "Summary",
            stats,
            reported_snapshots,
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title.bold())?;
        writeln!(f, "{}", "-".repeat(self.title.chars().count()))?;
        writeln!(f, "  scanned VMs: {}", self.stats.scanned_vms)?;
        writeln!(f, "  excluded VMs: {}", self.stats.excluded_vms)?;

        if self.stats.vms_without_snapshots > 0 {
            writeln!(
                f,
                "  VMs without snapshots: {}",
                self.stats.vms_without_snapshots
            )?;
        }

        writeln!(f, "  inspected snapshots: {}", self.stats.inspected_snapshots)?;
        writeln!(f, "  reported snapshots: {}", self.reported_snapshots)?;

        Ok(())
    }
}
