use crate::audit::SnapshotTime;

/// A single node of a virtual machine's snapshot tree.
pub trait SnapshotNode {
    fn name(&self) -> &str;

    fn created_at(&self) -> &SnapshotTime;

    /// Snapshots taken later from this node's state.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// A virtual machine as seen by the audit.
pub trait VirtualMachine {
    type Snapshot: SnapshotNode;

    fn name(&self) -> &str;

    /// Returns `None` when the machine doesn't carry any snapshot structure at
    /// all, which is different from carrying an empty one.
    fn root_snapshots(&self) -> Option<&[Self::Snapshot]>;
}
