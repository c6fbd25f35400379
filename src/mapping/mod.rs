// VM record normalization: netmasks, host names, nics, OS, FQDN, machines

mod fqdn;
mod hostname;
mod machine;
mod netmask;
mod nics;
mod os;

pub use fqdn::{FqdnOptions, NO_GUEST_PREFIX, resolve_fqdn};
pub use hostname::normalize;
pub use machine::{MapError, Mapper};
pub use netmask::{NetmaskError, prefix_to_netmask_v4};
pub use nics::{UNKNOWN_NETMASK, extract_nics};
pub use os::identify_os;
