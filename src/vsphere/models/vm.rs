use super::serde::null_to_default;
use crate::audit::VirtualMachine;
use crate::vsphere::{VsphereSnapshot, VsphereVmName};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsphereVm {
    // Machines we're not allowed to read the name of come back with `null`
    #[serde(default, alias = "Name", deserialize_with = "null_to_default")]
    pub name: VsphereVmName,

    #[serde(default, alias = "Snapshot")]
    pub snapshot: Option<VsphereVmSnapshotInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsphereVmSnapshotInfo {
    #[serde(default, alias = "RootSnapshotList", deserialize_with = "null_to_default")]
    pub root_snapshot_list: Vec<VsphereSnapshot>,
}

impl VirtualMachine for VsphereVm {
    type Snapshot = VsphereSnapshot;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn root_snapshots(&self) -> Option<&[VsphereSnapshot]> {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.root_snapshot_list.as_slice())
    }
}
