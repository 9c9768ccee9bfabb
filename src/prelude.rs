pub use crate::{audit::*, config::*, environment::*, utils::*, vsphere::*};
pub use anyhow::{Context, Error, Result};
pub use chrono::{DateTime, Utc};
pub use colored::Colorize;
pub use std::io::Write;
pub use tracing::info;

#[cfg(test)]
pub use indoc::indoc;

#[cfg(test)]
pub use itertools::Itertools;

#[cfg(test)]
pub use pretty_assertions as pa;
