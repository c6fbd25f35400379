// Virtualization platform access (vCenter Automation REST API)

mod client;
mod wire;

use async_trait::async_trait;

use crate::models::{HostRef, VirtualMachine};

pub use client::VsphereClient;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid platform url: {0}")]
    InvalidUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("no datacenter found")]
    NoDatacenter,
    #[error("default datacenter resolves to {0} instances")]
    MultipleDatacenters(usize),
    #[error("host {0} not found")]
    HostNotFound(HostRef),
}

/// What the sync needs from the virtualization platform.
#[async_trait]
pub trait Platform: Send + Sync {
    /// All VMs of the default datacenter, in discovery order.
    async fn list_vms(&self) -> Result<Vec<VirtualMachine>, PlatformError>;

    /// Name of the physical host behind `host`.
    async fn host_name(&self, host: &HostRef) -> Result<String, PlatformError>;
}
