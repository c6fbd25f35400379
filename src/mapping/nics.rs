// Guest network adapters to IDB nics

use std::net::IpAddr;

use tracing::debug;

use super::netmask::prefix_to_netmask_v4;
use crate::models::{GuestInfo, Nic, NicAddress};

/// Netmask recorded when the reported IPv4 prefix is out of range.
pub const UNKNOWN_NETMASK: &str = "unknown";

/// Extracts one nic per valid reported address, in adapter order.
///
/// Entries are named after the position of their adapter ("unknown0",
/// "unknown1", ...), so a dual-stack adapter yields two entries with the same
/// name. Unparseable addresses are skipped without shifting other names.
pub fn extract_nics(guest: Option<&GuestInfo>) -> Vec<Nic> {
    let Some(guest) = guest else {
        debug!("no guest info, no nics");
        return Vec::new();
    };
    let Some(adapters) = guest.net.as_ref() else {
        debug!("guest reports no network adapters");
        return Vec::new();
    };

    let mut nics = Vec::new();
    for (index, adapter) in adapters.iter().enumerate() {
        let Some(entries) = adapter
            .ip_config
            .as_ref()
            .and_then(|c| c.ip_address.as_ref())
        else {
            debug!(index, "adapter has no ip config");
            continue;
        };

        for entry in entries {
            let ip: IpAddr = match entry.ip_address.parse() {
                Ok(ip) => ip,
                Err(_) => {
                    debug!(address = %entry.ip_address, "not a valid ip address");
                    continue;
                }
            };

            let address = if is_ipv4(ip) {
                let netmask = prefix_to_netmask_v4(entry.prefix_length)
                    .unwrap_or_else(|_| UNKNOWN_NETMASK.to_string());
                debug!(address = %entry.ip_address, %netmask, "found v4 address");
                NicAddress::V4 {
                    addr: entry.ip_address.clone(),
                    netmask,
                }
            } else {
                debug!(
                    address = %entry.ip_address,
                    prefix = entry.prefix_length,
                    "found v6 address"
                );
                NicAddress::V6 {
                    addr: entry.ip_address.clone(),
                    prefix: entry.prefix_length.to_string(),
                }
            };

            nics.push(Nic {
                name: format!("unknown{index}"),
                address,
            });
        }
    }
    nics
}

// IPv4-mapped IPv6 text ("::ffff:a.b.c.d") denotes a 4-byte address.
fn is_ipv4(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => true,
        IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
    }
}
