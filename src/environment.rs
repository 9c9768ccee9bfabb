use crate::prelude::*;

pub struct Environment<'a> {
    pub time: fn() -> DateTime<Utc>,
    pub stdout: &'a mut dyn Write,
    pub config: &'a Config,
    pub vsphere: &'a mut dyn VsphereClient,
}

impl<'a> Environment<'a> {
    #[cfg(test)]
    pub fn test(
        stdout: &'a mut dyn Write,
        config: &'a Config,
        vsphere: &'a mut dyn VsphereClient,
    ) -> Self {
        colored::control::set_override(false);

        Self {
            time: || crate::vsphere::fixtures::datetime("2024-01-10 00:00:00"),
            stdout,
            config,
            vsphere,
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        (self.time)()
    }
}
