mod pretty_age;
mod summary;

pub use self::{pretty_age::*, summary::*};
