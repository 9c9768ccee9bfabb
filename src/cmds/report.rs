use crate::prelude::*;
use chrono::SecondsFormat;
use clap::ValueEnum;
use prettytable::{row, Table};
use serde::Serialize;

#[derive(Clone, Debug, clap::Args)]
pub struct ReportOptions {
    /// Minimum age (in hours) a snapshot must reach to get reported; overrides
    /// `age-hours` from the configuration file
    #[clap(long)]
    pub age_hours: Option<u32>,

    /// Virtual machines whose names match this regular expression (anywhere
    /// within the name) are skipped; overrides `exclude-vm-regex` from the
    /// configuration file
    #[clap(long)]
    pub exclude_vm_regex: Option<String>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

pub struct GenerateReport<'a, 'b> {
    env: &'a mut Environment<'b>,
    options: ReportOptions,
}

impl<'a, 'b> GenerateReport<'a, 'b> {
    pub fn new(env: &'a mut Environment<'b>, options: ReportOptions) -> Self {
        Self { env, options }
    }

    pub fn run(self) -> Result<()> {
        let threshold = self
            .options
            .age_hours
            .map(AgeThreshold::hours)
            .unwrap_or_else(|| self.env.config.age_threshold());

        let filter = VmFilter::new(
            self.options
                .exclude_vm_regex
                .as_deref()
                .unwrap_or_else(|| self.env.config.exclude_vm_regex()),
        )?;

        let vms = self
            .env
            .vsphere
            .virtual_machines()
            .context("Couldn't list virtual machines")?;

        let report = Report::generate(&vms, &filter, threshold, self.env.time());

        info!(
            count = report.count(),
            scanned_vms = report.stats().scanned_vms,
            "Report ready"
        );

        match self.options.format {
            OutputFormat::Json => print_json(self.env.stdout, &report),
            OutputFormat::Table => print_table(self.env.stdout, &report),
        }
    }
}

fn print_json(stdout: &mut dyn Write, report: &Report) -> Result<()> {
    serde_json::to_writer(&mut *stdout, report).context("Couldn't serialize report")?;
    writeln!(stdout)?;

    Ok(())
}

fn print_table(stdout: &mut dyn Write, report: &Report) -> Result<()> {
    if report.records().is_empty() {
        writeln!(
            stdout,
            "No snapshots older than {} found",
            report.threshold()
        )?;
    } else {
        let mut table = Table::new();

        table.set_titles(row!["VM", "Snapshot", "Created (UTC)", "Age (hours)", "Age"]);

        for record in report.records() {
            let created_at = record
                .created_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, false);

            let age_hours = format!("{:.2}", record.age_hours);
            let age = PrettyAge::from_hours(record.age_hours);

            table.add_row(row![record.vm, record.snapshot, created_at, age_hours, age]);
        }

        write!(stdout, "{}", table)?;
    }

    writeln!(stdout)?;
    write!(stdout, "{}", Summary::new(report.stats(), report.count()))?;

    Ok(())
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
}

/// Prints given error as a JSON document, so that whoever consumes our JSON
/// reports can tell failures apart from empty reports.
pub fn print_error(stdout: &mut dyn Write, err: &Error) -> Result<()> {
    let envelope = ErrorEnvelope {
        error: format!("{:#}", err),
    };

    serde_json::to_writer(&mut *stdout, &envelope)?;
    writeln!(stdout)?;

    Ok(())
}
