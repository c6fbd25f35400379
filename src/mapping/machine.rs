// One IDB machine per virtual machine

use std::sync::Arc;

use tracing::{debug, instrument};

use super::fqdn::{FqdnOptions, resolve_fqdn};
use super::nics::extract_nics;
use super::os::identify_os;
use crate::models::{DeviceType, Machine, VirtualMachine};
use crate::resolver::ReverseLookup;
use crate::vsphere::{Platform, PlatformError};

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("vm {vm} has no host reference")]
    MissingHost { vm: String },
    #[error("host name lookup for vm {vm} failed: {source}")]
    HostLookup {
        vm: String,
        #[source]
        source: PlatformError,
    },
    #[error("fqdn task join: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct Mapper {
    options: FqdnOptions,
    resolver: Arc<dyn ReverseLookup>,
}

impl Mapper {
    pub fn new(options: FqdnOptions, resolver: Arc<dyn ReverseLookup>) -> Self {
        Self { options, resolver }
    }

    /// Builds the IDB machine for `vm`. Only the host name lookup can fail.
    #[instrument(skip_all, fields(vm = %vm.name))]
    pub async fn map_vm(
        &self,
        platform: &dyn Platform,
        vm: &VirtualMachine,
    ) -> Result<Machine, MapError> {
        let (os, os_release) = identify_os(vm.guest.as_ref());

        // Reverse lookups block in getnameinfo
        let fqdn = {
            let vm = vm.clone();
            let options = self.options.clone();
            let resolver = self.resolver.clone();
            tokio::task::spawn_blocking(move || resolve_fqdn(&vm, &options, resolver.as_ref()))
                .await?
        };

        let nics = if vm.guest.is_some() {
            extract_nics(vm.guest.as_ref())
        } else {
            Vec::new()
        };

        let diskspace = vm
            .summary
            .storage
            .as_ref()
            .map_or(0, |storage| storage.committed);

        let host = vm
            .summary
            .host
            .as_ref()
            .ok_or_else(|| MapError::MissingHost {
                vm: vm.name.clone(),
            })?;
        let vmhost = platform
            .host_name(host)
            .await
            .map_err(|source| MapError::HostLookup {
                vm: vm.name.clone(),
                source,
            })?;
        debug!(%vmhost, "found vm host name");

        Ok(Machine {
            fqdn,
            os,
            os_release,
            cores: vm.summary.num_cpu,
            ram: vm.summary.memory_size_mb,
            diskspace,
            nics,
            vmhost,
            device_type: DeviceType::Virtual,
        })
    }
}
