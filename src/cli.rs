// Command line flags

use clap::Parser;

/// Query VMware virtual machines and add them to an IDB instance.
#[derive(Debug, Parser)]
#[command(name = "idbvmware", version)]
pub struct Cli {
    /// Config file [default: $CONFIG_FILE, then /etc/bytemine/idbvmware.toml]
    #[arg(long)]
    pub config: Option<String>,

    /// Write an example config to idbvmware.toml.example in the current dir and exit.
    #[arg(long)]
    pub example: bool,

    /// Map all machines but do nothing in the IDB.
    #[arg(long)]
    pub dryrun: bool,
}
