mod audit;
mod cmds;
mod config;
mod environment;
mod prelude;
mod utils;
mod vsphere;

#[cfg(test)]
mod testing;

use self::cmds::{OutputFormat, ReportOptions};
use self::prelude::*;
use clap::{Parser, Subcommand};
use std::io;
use std::ops::DerefMut;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Finds stale vSphere snapshots
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// By default, vsnap-audit tries to locate the `govc` executable inside
    /// your PATH variable - when this fails for you, using this parameter you
    /// can provide location of the `govc` executable by hand
    #[clap(short, long)]
    govc_path: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reports snapshots older than the configured age threshold
    Report(ReportOptions),

    /// Validates configuration file and connection to vSphere
    Validate,

    /// Lists all virtual machines along with their snapshots; useful for
    /// checking which machines the exclusion pattern matches
    DebugListVms,
}

impl Command {
    /// Whether failures should be reported as a JSON envelope on stdout, so
    /// that consumers of JSON reports always get a JSON document back.
    fn reports_errors_as_json(&self) -> bool {
        matches!(self, Command::Report(options) if options.format == OutputFormat::Json)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let errors_as_json = args.cmd.reports_errors_as_json();

    match try_main(&mut io::stdout(), args) {
        Ok(()) => ExitCode::SUCCESS,

        Err(err) => {
            report_failure(&mut io::stdout(), &mut io::stderr(), errors_as_json, &err);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    errors_as_json: bool,
    err: &Error,
) {
    if errors_as_json && cmds::print_error(stdout, err).is_ok() {
        return;
    }

    _ = writeln!(stderr, "{} {:?}", "Error:".red(), err);
}

fn try_main(stdout: &mut dyn Write, args: Args) -> Result<()> {
    if let Command::Validate = &args.cmd {
        return cmds::validate(stdout, args);
    }

    let config = Config::load(&args.config)?;
    let mut vsphere = init_vsphere(&args, &config)?;

    let mut env = Environment {
        time: Utc::now,
        stdout,
        config: &config,
        vsphere: vsphere.deref_mut(),
    };

    match args.cmd {
        Command::Report(options) => cmds::GenerateReport::new(&mut env, options).run(),
        Command::DebugListVms => cmds::DebugListVms::new(&mut env).run(),
        Command::Validate => unreachable!(),
    }
}

fn init_vsphere(args: &Args, config: &Config) -> Result<Box<dyn VsphereClient>> {
    let vsphere = if let Some(govc) = &args.govc_path {
        GovcProcessClient::new(govc, config.remote())
    } else {
        GovcProcessClient::find(config.remote())
    };

    let vsphere = vsphere.context("Couldn't initialize govc client")?;

    Ok(Box::new(vsphere))
}
