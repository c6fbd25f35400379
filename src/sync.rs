// One sync pass: list VMs, map each one, submit it to the IDB.
// VMs are handled one at a time in discovery order; the first error ends the pass.

use anyhow::Context;

use crate::idb::{MachineStore, UpdateOutcome};
use crate::mapping::Mapper;
use crate::vsphere::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Create machines missing from the IDB.
    pub create: bool,
    /// Map everything but never touch the IDB.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub mapped: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

pub async fn run(
    platform: &dyn Platform,
    store: &dyn MachineStore,
    mapper: &Mapper,
    options: SyncOptions,
) -> anyhow::Result<SyncSummary> {
    let vms = platform
        .list_vms()
        .await
        .context("retrieving virtual machines")?;

    let mut summary = SyncSummary::default();
    for vm in &vms {
        let machine = mapper
            .map_vm(platform, vm)
            .await
            .with_context(|| format!("mapping vm {}", vm.name))?;
        summary.mapped += 1;

        if !options.dry_run {
            let outcome = store
                .update_machine(&machine, options.create)
                .await
                .with_context(|| format!("submitting machine {}", machine.fqdn))?;
            match outcome {
                UpdateOutcome::Created => summary.created += 1,
                UpdateOutcome::Updated => summary.updated += 1,
                UpdateOutcome::Skipped => summary.skipped += 1,
            }
            tracing::debug!(
                operation = "update_machine",
                fqdn = %machine.fqdn,
                ?outcome,
                "machine submitted"
            );
        }

        tracing::debug!(?vm, "vmware machine");
        tracing::debug!(?machine, "idb machine");
    }

    tracing::info!(
        mapped = summary.mapped,
        created = summary.created,
        updated = summary.updated,
        skipped = summary.skipped,
        dry_run = options.dry_run,
        "sync finished"
    );
    Ok(summary)
}
