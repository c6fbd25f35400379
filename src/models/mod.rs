// Domain models: platform-side VM records and IDB-side machine records

mod machine;
mod vm;

pub use machine::{DeviceType, Machine, Nic, NicAddress};
pub use vm::{
    GuestInfo, GuestNic, HostRef, IpAddressEntry, IpConfig, StorageSummary, VirtualMachine,
    VmSummary,
};
