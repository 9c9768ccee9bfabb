mod remote;

use crate::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

pub use self::remote::*;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    remote: Remote,

    #[serde(default = "default_age_hours")]
    age_hours: u32,

    #[serde(default)]
    exclude_vm_regex: String,
}

impl Config {
    #[cfg(test)]
    pub fn parse(code: &str) -> Self {
        serde_yaml::from_str(code).unwrap()
    }

    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();

        let result: Result<_> = (|| {
            let code = fs::read_to_string(file).context("Couldn't read file")?;
            serde_yaml::from_str(&code).context("Couldn't parse file")
        })();

        result.with_context(|| format!("Couldn't load configuration from: {}", file.display()))
    }

    pub fn remote(&self) -> &Remote {
        &self.remote
    }

    pub fn age_threshold(&self) -> AgeThreshold {
        AgeThreshold::hours(self.age_hours)
    }

    pub fn exclude_vm_regex(&self) -> &str {
        &self.exclude_vm_regex
    }
}

fn default_age_hours() -> u32 {
    24
}
