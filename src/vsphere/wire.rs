// vCenter REST response bodies and their conversion to VM records

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{GuestInfo, GuestNic, IpAddressEntry, IpConfig};

#[derive(Debug, Deserialize)]
pub(crate) struct DatacenterSummary {
    pub datacenter: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HostSummary {
    pub host: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VmSummary {
    pub vm: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VmInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpu: Option<CpuInfo>,
    #[serde(default)]
    pub memory: Option<MemoryInfo>,
    #[serde(default)]
    pub disks: BTreeMap<String, DiskInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpuInfo {
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemoryInfo {
    #[serde(rename = "size_MiB")]
    pub size_mib: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiskInfo {
    #[serde(default)]
    pub capacity: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub full_name: Option<LocalizableMessage>,
    #[serde(default)]
    pub host_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizableMessage {
    #[serde(default)]
    pub default_message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestInterface {
    #[serde(default)]
    pub ip: Option<GuestIpConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestIpConfig {
    #[serde(default)]
    pub ip_addresses: Option<Vec<GuestIpAddress>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestIpAddress {
    pub ip_address: String,
    pub prefix_length: i32,
}

impl VmInfo {
    /// Sum of the configured disk capacities, `None` without disks.
    pub fn committed_bytes(&self) -> Option<u64> {
        if self.disks.is_empty() {
            return None;
        }
        Some(self.disks.values().filter_map(|d| d.capacity).sum())
    }
}

/// Merges identity and interfaces into one guest record. `interfaces` is
/// `None` when the platform could not report them.
pub(crate) fn guest_info(
    identity: GuestIdentity,
    interfaces: Option<Vec<GuestInterface>>,
) -> GuestInfo {
    let net = interfaces.map(|list| {
        list.into_iter()
            .map(|iface| GuestNic {
                ip_config: iface.ip.map(|ip| IpConfig {
                    ip_address: ip.ip_addresses.map(|addrs| {
                        addrs
                            .into_iter()
                            .map(|a| IpAddressEntry {
                                ip_address: a.ip_address,
                                prefix_length: a.prefix_length,
                            })
                            .collect()
                    }),
                }),
            })
            .collect()
    });

    GuestInfo {
        host_name: identity.host_name,
        guest_id: identity.name,
        guest_family: identity.family,
        guest_full_name: identity
            .full_name
            .map(|m| m.default_message)
            .unwrap_or_default(),
        net,
    }
}
