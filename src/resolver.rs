// Reverse DNS lookups

use std::io;
use std::net::IpAddr;

/// Maps an address back to host names. An empty result means "no name".
pub trait ReverseLookup: Send + Sync {
    fn reverse(&self, addr: IpAddr) -> io::Result<Vec<String>>;
}

/// Blocking lookups through the system resolver (getnameinfo).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl ReverseLookup for SystemResolver {
    fn reverse(&self, addr: IpAddr) -> io::Result<Vec<String>> {
        let name = dns_lookup::lookup_addr(&addr)?;
        Ok(host_names(addr, name))
    }
}

/// getnameinfo falls back to the numeric form when there is no PTR record.
fn host_names(addr: IpAddr, name: String) -> Vec<String> {
    if name.is_empty() || name == addr.to_string() {
        return Vec::new();
    }
    vec![name]
}
