//! `geoshift stop` — request daemon termination.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use geoshift_daemon::paths::default_channel_dir;

use crate::commands::write_channel;

#[derive(Args, Debug)]
pub struct StopArgs {
    /// Directory holding the command mailbox.
    #[arg(long, default_value_os_t = default_channel_dir())]
    pub channel_dir: PathBuf,
}

impl StopArgs {
    pub fn run(self) -> Result<()> {
        let path = write_channel(&self.channel_dir, "STOP")?;
        println!("queued stop command in {}", path.display());
        Ok(())
    }
}
