// FQDN derivation for virtual machines

use std::net::IpAddr;

use tracing::debug;

use super::hostname::normalize;
use super::nics::extract_nics;
use crate::models::VirtualMachine;
use crate::resolver::ReverseLookup;

/// Prefix used for VMs that report no guest info at all.
pub const NO_GUEST_PREFIX: &str = "noguest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FqdnOptions {
    /// Reverse-lookup guest IPv4 addresses when the guest reports no host name.
    pub lookup: bool,
    /// Appended to names without a dot, e.g. ".vmware.example.com".
    pub unknown_suffix: String,
    /// Lowercase and drop characters that are invalid in an FQDN.
    pub strip: bool,
}

/// Derives the FQDN of a VM.
///
/// Order of preference: guest host name, reverse lookups of the guest's IPv4
/// addresses (when enabled), the VM name. VMs without guest info always get
/// `"noguest" + unknown_suffix`. Names without a dot get the unknown suffix.
pub fn resolve_fqdn(
    vm: &VirtualMachine,
    options: &FqdnOptions,
    resolver: &dyn ReverseLookup,
) -> String {
    let Some(guest) = vm.guest.as_ref() else {
        debug!(vm = %vm.name, "no guest info, using placeholder fqdn");
        return format!("{NO_GUEST_PREFIX}{}", options.unknown_suffix);
    };

    let mut host_name = String::new();
    if !guest.host_name.is_empty() {
        debug!(vm = %vm.name, "using guest host name as fqdn");
        host_name = guest.host_name.clone();
    } else if options.lookup {
        debug!(vm = %vm.name, "trying reverse lookups for fqdn");
        // Every successful lookup overwrites the previous one: the last nic wins.
        for nic in extract_nics(Some(guest)) {
            let Some(addr) = nic.ipv4_addr().filter(|a| !a.is_empty()) else {
                continue;
            };
            let Ok(ip) = addr.parse::<IpAddr>() else {
                continue;
            };
            match resolver.reverse(ip) {
                Ok(names) => match names.into_iter().next().filter(|n| !n.is_empty()) {
                    Some(name) => {
                        debug!(%addr, %name, "reverse lookup succeeded");
                        host_name = name;
                    }
                    None => debug!(%addr, "no host name found"),
                },
                Err(e) => debug!(%addr, error = %e, "reverse lookup failed"),
            }
        }
    }

    if host_name.is_empty() {
        debug!(vm = %vm.name, "no fqdn found, falling back to vm name");
        host_name = vm.name.clone();
    }

    if !host_name.contains('.') {
        debug!(%host_name, "fqdn has no dot, appending unknown suffix");
        host_name.push_str(&options.unknown_suffix);
    }

    if options.strip {
        host_name = normalize(&host_name);
        debug!(%host_name, "removed invalid characters from fqdn");
    }

    host_name
}
