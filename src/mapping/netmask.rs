// IPv4 prefix length to dotted-decimal netmask

use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NetmaskError {
    #[error("invalid prefix length: {0}")]
    InvalidPrefixLength(i32),
}

/// Converts an IPv4 prefix length to a netmask, e.g. 24 to "255.255.255.0".
/// Fails for prefix lengths outside 0..=32.
pub fn prefix_to_netmask_v4(prefix: i32) -> Result<String, NetmaskError> {
    if !(0..=32).contains(&prefix) {
        return Err(NetmaskError::InvalidPrefixLength(prefix));
    }
    let mask = u32::MAX.checked_shl(32 - prefix as u32).unwrap_or(0);
    Ok(Ipv4Addr::from(mask).to_string())
}
