use regex::Regex;
use thiserror::Error;

/// Decides which virtual machines are left out of the audit.
///
/// The pattern is searched for anywhere within the name (it's not anchored);
/// an empty pattern excludes nothing.
#[derive(Clone, Debug, Default)]
pub struct VmFilter {
    pattern: String,
    regex: Option<Regex>,
}

impl VmFilter {
    pub fn new(pattern: impl Into<String>) -> Result<Self, InvalidVmPattern> {
        let pattern = pattern.into();

        let regex = if pattern.is_empty() {
            None
        } else {
            let regex = Regex::new(&pattern).map_err(|source| InvalidVmPattern {
                pattern: pattern.clone(),
                source,
            })?;

            Some(regex)
        };

        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn excludes(&self, vm_name: &str) -> bool {
        self.regex
            .as_ref()
            .map_or(false, |regex| regex.is_match(vm_name))
    }
}

#[derive(Debug, Error)]
#[error("Invalid VM exclusion pattern: {pattern}")]
pub struct InvalidVmPattern {
    pattern: String,

    #[source]
    source: regex::Error,
}
