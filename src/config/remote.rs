use serde::Deserialize;
use std::fmt;

/// Where and how to connect to vCenter (or a standalone ESXi host).
#[derive(Clone, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Remote {
    pub url: String,

    /// When missing, `govc` picks `GOVC_USERNAME` from our own environment
    #[serde(default)]
    pub username: Option<String>,

    /// When missing, `govc` picks `GOVC_PASSWORD` from our own environment
    #[serde(default)]
    pub password: Option<String>,

    /// vCenters tend to run with self-signed certificates, so certificate
    /// verification is skipped unless asked otherwise
    #[serde(default = "default_insecure")]
    pub insecure: bool,
}

fn default_insecure() -> bool {
    true
}

impl fmt::Debug for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("insecure", &self.insecure)
            .finish()
    }
}
