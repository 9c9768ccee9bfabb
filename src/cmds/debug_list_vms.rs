use crate::prelude::*;
use prettytable::{row, Table};

pub struct DebugListVms<'a, 'b> {
    env: &'a mut Environment<'b>,
}

impl<'a, 'b> DebugListVms<'a, 'b> {
    pub fn new(env: &'a mut Environment<'b>) -> Self {
        Self { env }
    }

    pub fn run(self) -> Result<()> {
        let filter = VmFilter::new(self.env.config.exclude_vm_regex())?;
        let now = self.env.time();

        let vms = self
            .env
            .vsphere
            .virtual_machines()
            .context("Couldn't list virtual machines")?;

        let mut table = Table::new();

        table.set_titles(row!["VM", "Snapshots", "Oldest", "Filter"]);

        for vm in &vms {
            let ages: Vec<_> = flatten(vm.root_snapshots())
                .map(|(_, created_at)| SnapshotAge::measure(created_at, now))
                .collect();

            let oldest = ages
                .iter()
                .max_by_key(|age| age.elapsed())
                .map(|age| PrettyAge::from_hours(age.hours()).to_string())
                .unwrap_or_else(|| "-".into());

            let status = if filter.excludes(vm.name()) {
                "excluded".yellow().to_string()
            } else {
                "included".to_string()
            };

            table.add_row(row![vm.name, ages.len(), oldest, status]);
        }

        write!(self.env.stdout, "{}", table)?;

        Ok(())
    }
}
