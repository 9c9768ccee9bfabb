use crate::prelude::*;
use crate::Args;
use std::ops::DerefMut;

pub fn validate(stdout: &mut dyn Write, args: Args) -> Result<()> {
    let config = load_config(stdout, &args)?;

    writeln!(stdout)?;
    validate_pattern(stdout, &config)?;

    writeln!(stdout)?;
    let mut vsphere = init_vsphere(stdout, &args, &config)?;

    writeln!(stdout)?;
    validate_inventory(stdout, vsphere.deref_mut())?;

    writeln!(stdout)?;
    writeln!(stdout, "✓ Everything seems to be fine")?;

    Ok(())
}

fn load_config(stdout: &mut dyn Write, args: &Args) -> Result<Config> {
    writeln!(
        stdout,
        "Loading configuration file: {}",
        args.config.display()
    )?;

    let config = Config::load(&args.config)?;

    writeln!(stdout, ".. [ OK ]")?;

    Ok(config)
}

fn validate_pattern(stdout: &mut dyn Write, config: &Config) -> Result<()> {
    writeln!(stdout, "Checking VM exclusion pattern")?;

    VmFilter::new(config.exclude_vm_regex())?;

    writeln!(stdout, ".. [ OK ]")?;

    Ok(())
}

fn init_vsphere(
    stdout: &mut dyn Write,
    args: &Args,
    config: &Config,
) -> Result<Box<dyn VsphereClient>> {
    writeln!(stdout, "Initializing govc")?;

    let vsphere = crate::init_vsphere(args, config)?;

    writeln!(stdout, ".. [ OK ]")?;

    Ok(vsphere)
}

fn validate_inventory(stdout: &mut dyn Write, vsphere: &mut dyn VsphereClient) -> Result<()> {
    writeln!(stdout, "Connecting to vSphere")?;

    let vms = vsphere
        .virtual_machines()
        .context("Couldn't list virtual machines")?;

    if vms.is_empty() {
        writeln!(
            stdout,
            "{} Found no virtual machines - is the user allowed to see any?",
            "warn:".yellow()
        )?;
    } else {
        writeln!(stdout, ".. found {} virtual machine(s)", vms.len())?;
    }

    writeln!(stdout, ".. [ OK ]")?;

    Ok(())
}
