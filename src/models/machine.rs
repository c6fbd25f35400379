// Canonical machine records submitted to the IDB

use serde::{Serialize, Serializer};

/// IDB device type; serialized as its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Physical,
    Virtual,
}

impl DeviceType {
    pub fn id(self) -> u8 {
        match self {
            DeviceType::Physical => 1,
            DeviceType::Virtual => 2,
        }
    }
}

impl Serialize for DeviceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicAddress {
    V4 { addr: String, netmask: String },
    /// Prefix length kept as reported, in decimal.
    V6 { addr: String, prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "NicWire")]
pub struct Nic {
    /// "unknown<adapter index>"
    pub name: String,
    pub address: NicAddress,
}

impl Nic {
    /// IPv4 address of this entry, if any.
    pub fn ipv4_addr(&self) -> Option<&str> {
        match &self.address {
            NicAddress::V4 { addr, .. } => Some(addr),
            NicAddress::V6 { .. } => None,
        }
    }
}

#[derive(Serialize)]
struct NicWire {
    name: String,
    ip_address: IpAddressWire,
}

#[derive(Serialize)]
struct IpAddressWire {
    addr: String,
    netmask: String,
    addr_v6: String,
    netmask_v6: String,
}

impl From<Nic> for NicWire {
    fn from(nic: Nic) -> Self {
        let ip_address = match nic.address {
            NicAddress::V4 { addr, netmask } => IpAddressWire {
                addr,
                netmask,
                addr_v6: String::new(),
                netmask_v6: String::new(),
            },
            NicAddress::V6 { addr, prefix } => IpAddressWire {
                addr: String::new(),
                netmask: String::new(),
                addr_v6: addr,
                netmask_v6: prefix,
            },
        };
        NicWire {
            name: nic.name,
            ip_address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Machine {
    pub fqdn: String,
    pub os: String,
    pub os_release: String,
    pub cores: u32,
    /// Megabytes.
    pub ram: u64,
    /// Committed bytes.
    pub diskspace: u64,
    pub nics: Vec<Nic>,
    pub vmhost: String,
    #[serde(rename = "device_type_id")]
    pub device_type: DeviceType,
}
