use crate::config::Remote;
use crate::vsphere::models::null_to_default;
use crate::vsphere::*;
use anyhow::Context;
use pathsearch::find_executable_in_path;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;

/// How many VMs get described with a single `govc vm.info` call.
const VM_INFO_BATCH_SIZE: usize = 64;

/// Talks to vSphere through the `govc` executable.
pub struct GovcProcessClient {
    govc: PathBuf,
    env: Vec<(&'static str, String)>,
}

impl GovcProcessClient {
    pub fn new(govc: impl AsRef<Path>, remote: &Remote) -> VsphereResult<Self> {
        let govc = govc.as_ref();

        if !govc.exists() {
            return Err(VsphereError::MissingGovc(govc.into()));
        }

        Ok(Self {
            govc: govc.into(),
            env: Self::env(remote),
        })
    }

    pub fn find(remote: &Remote) -> VsphereResult<Self> {
        let govc = find_executable_in_path("govc")
            .context("Couldn't find the `govc` executable in your `PATH` - please try specifying exact location with `--govc-path`")?;

        Self::new(govc, remote)
    }

    fn env(remote: &Remote) -> Vec<(&'static str, String)> {
        let mut env = vec![
            ("GOVC_URL", remote.url.clone()),
            (
                "GOVC_INSECURE",
                if remote.insecure { "1" } else { "0" }.into(),
            ),
        ];

        if let Some(username) = &remote.username {
            env.push(("GOVC_USERNAME", username.clone()));
        }

        if let Some(password) = &remote.password {
            env.push(("GOVC_PASSWORD", password.clone()));
        }

        env
    }

    fn execute(&mut self, callback: impl FnOnce(&mut Command)) -> VsphereResult<String> {
        let mut command = Command::new(&self.govc);

        command.envs(self.env.iter().map(|(key, val)| (*key, val)));
        callback(&mut command);

        trace!(args = ?command.get_args().collect::<Vec<_>>(), "Launching govc");

        let output = command
            .output()
            .context("Couldn't launch the `govc` executable")?;

        if output.status.success() {
            let stdout = String::from_utf8(output.stdout).context("Couldn't read govc's stdout")?;

            Ok(stdout)
        } else {
            let stderr = String::from_utf8(output.stderr)
                .context("Couldn't read govc's stderr")?
                .trim()
                .to_string();

            Err(VsphereError::CommandFailed { stderr })
        }
    }

    fn parse<T>(out: &str) -> VsphereResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(out)
            .context("Couldn't parse govc's stdout")
            .map_err(VsphereError::Other)
    }

    fn parse_vm_paths(out: &str) -> Vec<&str> {
        out.lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl VsphereClient for GovcProcessClient {
    fn virtual_machines(&mut self) -> VsphereResult<Vec<VsphereVm>> {
        let out = self.execute(|command| {
            command.arg("find").arg("/").arg("-type").arg("m");
        })?;

        let mut vms = Vec::new();

        for paths in Self::parse_vm_paths(&out).chunks(VM_INFO_BATCH_SIZE) {
            let out = self.execute(|command| {
                command.arg("vm.info").arg("-json").args(paths);
            })?;

            vms.extend(Self::parse::<VmInfo>(&out)?.virtual_machines);
        }

        Ok(vms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VmInfo {
    #[serde(default, alias = "VirtualMachines", deserialize_with = "null_to_default")]
    virtual_machines: Vec<VsphereVm>,
}
