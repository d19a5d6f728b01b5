//! `geoshift status` — daemon liveness and mailbox probe.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use geoshift_daemon::paths::{channel_path, default_channel_dir};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Directory holding the command mailbox.
    #[arg(long, default_value_os_t = default_channel_dir())]
    pub channel_dir: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let channel = channel_path(&self.channel_dir);
        let pending = fs::read_to_string(&channel)
            .ok()
            .map(|s| s.trim().to_string());
        let pid = find_daemon_pid();

        if self.json {
            let payload = json!({
                "running": pid.is_some(),
                "pid": pid,
                "channel": channel.display().to_string(),
                "pending_command": pending,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        match pid {
            Some(pid) => println!("daemon: {} (pid {pid})", "running".green()),
            None => println!("daemon: {}", "not found".red()),
        }
        println!("channel: {}", channel.display());
        match pending {
            Some(command) => println!("pending: {}", command.yellow()),
            None => println!("pending: none"),
        }
        Ok(())
    }
}

/// Best-effort process probe. The daemon has no registration handshake
/// with the controller, so a process-table scan is the only liveness
/// signal available.
fn find_daemon_pid() -> Option<u32> {
    let output = Command::new("pgrep")
        .args(["-f", "geoshift daemon start"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()?
        .trim()
        .parse()
        .ok()
}
