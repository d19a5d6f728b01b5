//! geoshift — location-override controller and injector daemon.
//!
//! # Usage
//!
//! ```text
//! geoshift set <lat> <lon> [--accuracy <m>] [--channel-dir <dir>]
//! geoshift stop [--channel-dir <dir>]
//! geoshift status [--channel-dir <dir>] [--json]
//! geoshift daemon start <package> [--channel-dir <dir>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{daemon::DaemonCommand, set::SetArgs, status::StatusArgs, stop::StopArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "geoshift",
    version,
    about = "Inject a spoofed GPS fix through every known consumer channel",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Queue a location override for the running daemon.
    Set(SetArgs),

    /// Ask the daemon to terminate.
    Stop(StopArgs),

    /// Report daemon liveness and pending mailbox contents.
    Status(StatusArgs),

    /// Manage the injector daemon.
    Daemon {
        #[command(subcommand)]
        command: DaemonCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Set(args) => args.run(),
        Commands::Stop(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Daemon { command } => commands::daemon::run(command),
    }
}
