//! `geoshift daemon` — foreground daemon lifecycle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use geoshift_daemon::paths::default_channel_dir;
use geoshift_daemon::{start_blocking, DaemonConfig};
use geoshift_inject::InjectTargets;

#[derive(Subcommand, Debug)]
pub enum DaemonCommand {
    /// Run the injector daemon in the foreground until STOP or ctrl-c.
    Start(StartArgs),
}

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Package name of the controlling app; used for log identification.
    pub package: String,

    /// Directory holding the command mailbox.
    #[arg(long, default_value_os_t = default_channel_dir())]
    pub channel_dir: PathBuf,
}

pub fn run(command: DaemonCommand) -> Result<()> {
    match command {
        DaemonCommand::Start(args) => {
            let config = DaemonConfig {
                package: args.package,
                channel_dir: args.channel_dir,
                targets: InjectTargets::default(),
            };
            start_blocking(config).context("daemon exited with error")?;
        }
    }
    Ok(())
}
