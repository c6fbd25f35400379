use anyhow::{Context, Result};
use clap::Parser;
use idbvmware::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.example {
        config::AppConfig::example()
            .write_to(std::path::Path::new(config::EXAMPLE_FILE_NAME))
            .with_context(|| format!("writing {}", config::EXAMPLE_FILE_NAME))?;
        return Ok(());
    }

    let app_config = config::AppConfig::load(cli.config.as_deref())?;

    let default_level = if app_config.logging.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();
    tracing::info!(version = version::VERSION, dry_run = cli.dryrun, "starting");

    let idb = idb::IdbClient::new(
        &app_config.idb.url,
        &app_config.idb.token,
        app_config.idb.insecure_skip_verify,
    )?;
    let platform = vsphere::VsphereClient::connect(
        &app_config.vmware.url,
        app_config.vmware.insecure_skip_verify,
    )
    .await
    .context("connecting to vmware")?;

    let mapper = mapping::Mapper::new(
        mapping::FqdnOptions {
            lookup: app_config.mapping.lookup,
            unknown_suffix: app_config.mapping.unknown_suffix.clone(),
            strip: app_config.mapping.fqdn_strip,
        },
        Arc::new(resolver::SystemResolver),
    );
    let options = sync::SyncOptions {
        create: app_config.idb.create,
        dry_run: cli.dryrun,
    };

    tokio::select! {
        result = sync::run(&platform, &idb, &mapper, options) => {
            if let Err(e) = &result {
                tracing::error!(error = %format!("{e:#}"), "sync failed");
            }
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal, aborting sync");
            anyhow::bail!("interrupted");
        }
    }

    Ok(())
}
