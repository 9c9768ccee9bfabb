mod debug_list_vms;
mod report;
mod validate;

pub use self::{debug_list_vms::*, report::*, validate::*};
