// Shared test helpers: VM builders, fake resolver/platform/store, local HTTP servers
#![allow(dead_code)]

use async_trait::async_trait;
use idbvmware::idb::{IdbError, MachineStore, UpdateOutcome};
use idbvmware::models::*;
use idbvmware::resolver::ReverseLookup;
use idbvmware::vsphere::{Platform, PlatformError};
use std::collections::{HashMap, HashSet};
use std::io;
use std::net::IpAddr;
use std::sync::Mutex;

pub const HOST_REF: &str = "host-1";
pub const HOST_NAME: &str = "esx01.example.com";

/// Adapter with the given `(address, prefix)` entries; `None` means no ip config.
pub fn adapter(addrs: Option<&[(&str, i32)]>) -> GuestNic {
    GuestNic {
        ip_config: addrs.map(|addrs| IpConfig {
            ip_address: Some(
                addrs
                    .iter()
                    .map(|(a, p)| IpAddressEntry {
                        ip_address: a.to_string(),
                        prefix_length: *p,
                    })
                    .collect(),
            ),
        }),
    }
}

pub fn guest(host_name: &str, adapters: Vec<GuestNic>) -> GuestInfo {
    GuestInfo {
        host_name: host_name.into(),
        guest_id: "debian10_64Guest".into(),
        guest_family: "linuxGuest".into(),
        guest_full_name: "Debian GNU/Linux 10 (64-bit)".into(),
        net: Some(adapters),
    }
}

pub fn vm(name: &str, guest: Option<GuestInfo>) -> VirtualMachine {
    VirtualMachine {
        name: name.into(),
        guest,
        summary: VmSummary {
            num_cpu: 4,
            memory_size_mb: 8192,
            storage: Some(StorageSummary {
                committed: 42_949_672_960,
            }),
            host: Some(HostRef(HOST_REF.into())),
        },
    }
}

/// Answers reverse lookups from a fixed table and records every query.
#[derive(Default)]
pub struct StaticResolver {
    names: HashMap<IpAddr, Vec<String>>,
    pub queries: Mutex<Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let names = entries
            .into_iter()
            .map(|(ip, names)| {
                (
                    ip.parse().unwrap(),
                    names.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect();
        Self {
            names,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<IpAddr> {
        self.queries.lock().unwrap().clone()
    }
}

impl ReverseLookup for StaticResolver {
    fn reverse(&self, addr: IpAddr) -> io::Result<Vec<String>> {
        self.queries.lock().unwrap().push(addr);
        self.names
            .get(&addr)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
    }
}

/// In-memory platform: fixed VM list and host names.
pub struct FakePlatform {
    pub vms: Vec<VirtualMachine>,
    pub hosts: HashMap<HostRef, String>,
    pub host_lookups: Mutex<usize>,
}

impl FakePlatform {
    pub fn new(vms: Vec<VirtualMachine>) -> Self {
        let mut hosts = HashMap::new();
        hosts.insert(HostRef(HOST_REF.into()), HOST_NAME.to_string());
        Self {
            vms,
            hosts,
            host_lookups: Mutex::new(0),
        }
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn list_vms(&self) -> Result<Vec<VirtualMachine>, PlatformError> {
        Ok(self.vms.clone())
    }

    async fn host_name(&self, host: &HostRef) -> Result<String, PlatformError> {
        *self.host_lookups.lock().unwrap() += 1;
        self.hosts
            .get(host)
            .cloned()
            .ok_or_else(|| PlatformError::HostNotFound(host.clone()))
    }
}

/// In-memory IDB. Machines in `existing` are updated, others created or skipped.
#[derive(Default)]
pub struct FakeStore {
    pub existing: HashSet<String>,
    pub fail_on: Option<String>,
    pub submitted: Mutex<Vec<(Machine, bool)>>,
}

impl FakeStore {
    pub fn submitted_fqdns(&self) -> Vec<String> {
        self.submitted
            .lock()
            .unwrap()
            .iter()
            .map(|(m, _)| m.fqdn.clone())
            .collect()
    }
}

#[async_trait]
impl MachineStore for FakeStore {
    async fn update_machine(
        &self,
        machine: &Machine,
        create: bool,
    ) -> Result<UpdateOutcome, IdbError> {
        if self.fail_on.as_deref() == Some(machine.fqdn.as_str()) {
            return Err(IdbError::Status {
                url: format!("http://idb.test/api/v3/machines/{}", machine.fqdn),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        self.submitted
            .lock()
            .unwrap()
            .push((machine.clone(), create));
        if self.existing.contains(&machine.fqdn) {
            Ok(UpdateOutcome::Updated)
        } else if create {
            Ok(UpdateOutcome::Created)
        } else {
            Ok(UpdateOutcome::Skipped)
        }
    }
}

/// Serves `app` on an ephemeral local port; returns its base URL.
pub async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
