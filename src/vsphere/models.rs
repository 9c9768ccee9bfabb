mod serde;
mod snapshot;
mod snapshot_name;
mod vm;
mod vm_name;

pub(super) use self::serde::null_to_default;
pub use self::{snapshot::*, snapshot_name::*, vm::*, vm_name::*};
