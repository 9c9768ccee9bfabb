mod clients;
mod error;
mod models;

pub use self::{clients::*, error::*, models::*};

pub trait VsphereClient {
    /// Returns every virtual machine visible to the session, along with its
    /// snapshot tree.
    fn virtual_machines(&mut self) -> VsphereResult<Vec<VsphereVm>>;
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::audit::SnapshotTime;
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

    pub fn vm(name: impl AsRef<str>, snapshots: Vec<VsphereSnapshot>) -> VsphereVm {
        VsphereVm {
            name: VsphereVmName::new(name),
            snapshot: Some(VsphereVmSnapshotInfo {
                root_snapshot_list: snapshots,
            }),
        }
    }

    pub fn vm_without_snapshots(name: impl AsRef<str>) -> VsphereVm {
        VsphereVm {
            name: VsphereVmName::new(name),
            snapshot: None,
        }
    }

    pub fn snapshot(name: impl AsRef<str>, created_at: impl AsRef<str>) -> VsphereSnapshot {
        snapshot_tree(name, created_at, Vec::new())
    }

    pub fn snapshot_tree(
        name: impl AsRef<str>,
        created_at: impl AsRef<str>,
        children: Vec<VsphereSnapshot>,
    ) -> VsphereSnapshot {
        VsphereSnapshot {
            name: VsphereSnapshotName::new(name),
            create_time: snapshot_time(created_at),
            child_snapshot_list: children,
        }
    }

    pub fn snapshot_time(created_at: impl AsRef<str>) -> SnapshotTime {
        created_at.as_ref().parse().unwrap()
    }

    pub fn datetime(datetime: impl AsRef<str>) -> DateTime<Utc> {
        let datetime =
            NaiveDateTime::parse_from_str(datetime.as_ref(), "%Y-%m-%d %H:%M:%S").unwrap();

        Utc.from_utc_datetime(&datetime)
    }
}
