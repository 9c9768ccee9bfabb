use super::serde::null_to_default;
use crate::audit::{SnapshotNode, SnapshotTime};
use crate::vsphere::VsphereSnapshotName;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsphereSnapshot {
    #[serde(alias = "Name")]
    pub name: VsphereSnapshotName,

    #[serde(alias = "CreateTime")]
    pub create_time: SnapshotTime,

    // Leaf snapshots come either without this field or with `null` in it
    #[serde(default, alias = "ChildSnapshotList", deserialize_with = "null_to_default")]
    pub child_snapshot_list: Vec<VsphereSnapshot>,
}

impl SnapshotNode for VsphereSnapshot {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn created_at(&self) -> &SnapshotTime {
        &self.create_time
    }

    fn children(&self) -> &[Self] {
        &self.child_snapshot_list
    }
}
