// Source virtual machine records as reported by the virtualization platform

use serde::{Deserialize, Serialize};

/// Opaque reference to the physical host a VM runs on (e.g. "host-42").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostRef(pub String);

impl std::fmt::Display for HostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub name: String,
    /// Absent when the guest agent is not running.
    #[serde(default)]
    pub guest: Option<GuestInfo>,
    pub summary: VmSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestInfo {
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub guest_id: String,
    #[serde(default)]
    pub guest_family: String,
    #[serde(default)]
    pub guest_full_name: String,
    #[serde(default)]
    pub net: Option<Vec<GuestNic>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestNic {
    #[serde(default)]
    pub ip_config: Option<IpConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpConfig {
    #[serde(default)]
    pub ip_address: Option<Vec<IpAddressEntry>>,
}

/// One address reported by the guest; the text is not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddressEntry {
    pub ip_address: String,
    pub prefix_length: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmSummary {
    pub num_cpu: u32,
    pub memory_size_mb: u64,
    #[serde(default)]
    pub storage: Option<StorageSummary>,
    #[serde(default)]
    pub host: Option<HostRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSummary {
    /// Bytes committed on datastores.
    pub committed: u64,
}
