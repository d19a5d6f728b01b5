//! `geoshift set` — queue a location override.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use geoshift_core::{format_float, DEFAULT_ACCURACY};
use geoshift_daemon::paths::default_channel_dir;

use crate::commands::write_channel;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Latitude in decimal degrees.
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees.
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Horizontal accuracy in meters.
    #[arg(long, default_value_t = DEFAULT_ACCURACY)]
    pub accuracy: f64,

    /// Directory holding the command mailbox.
    #[arg(long, default_value_os_t = default_channel_dir())]
    pub channel_dir: PathBuf,
}

impl SetArgs {
    pub fn run(self) -> Result<()> {
        let record = format!(
            "LOCATION,{},{},{}",
            format_float(self.latitude),
            format_float(self.longitude),
            format_float(self.accuracy),
        );
        let path = write_channel(&self.channel_dir, &record)?;
        println!("queued location override in {}", path.display());
        Ok(())
    }
}
