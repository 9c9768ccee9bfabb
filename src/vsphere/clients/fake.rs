use crate::vsphere::*;

/// In-memory inventory.
#[derive(Debug, Default)]
pub struct VsphereFakeClient {
    vms: Vec<VsphereVm>,
    fail: bool,
}

impl VsphereFakeClient {
    pub fn new(vms: Vec<VsphereVm>) -> Self {
        Self { vms, fail: false }
    }

    pub fn add(&mut self, vm: VsphereVm) {
        self.vms.push(vm);
    }

    pub fn inject_error(&mut self) {
        self.fail = true;
    }
}

impl VsphereClient for VsphereFakeClient {
    fn virtual_machines(&mut self) -> VsphereResult<Vec<VsphereVm>> {
        if self.fail {
            return Err(VsphereError::InjectedError);
        }

        Ok(self.vms.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vsphere::fixtures::*;
    use pretty_assertions as pa;

    #[test]
    fn virtual_machines() {
        let mut client = VsphereFakeClient::new(vec![vm_without_snapshots("web-1")]);

        client.add(vm("db-1", vec![snapshot("nightly", "2024-01-05 20:00:00")]));

        pa::assert_eq!(
            Ok(vec![
                vm_without_snapshots("web-1"),
                vm("db-1", vec![snapshot("nightly", "2024-01-05 20:00:00")]),
            ]),
            client.virtual_machines()
        );
    }

    #[test]
    fn given_injected_error() {
        let mut client = VsphereFakeClient::default();

        client.inject_error();

        pa::assert_eq!(Err(VsphereError::InjectedError), client.virtual_machines());
    }
}
