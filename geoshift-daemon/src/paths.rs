use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the single-slot command mailbox file.
pub const COMMAND_FILE: &str = "location_command";

/// Directory the mailbox lives in unless overridden.
pub const DEFAULT_CHANNEL_DIR: &str = "/data/local/tmp";

/// Fixed sleep between channel polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub fn channel_path(channel_dir: &Path) -> PathBuf {
    channel_dir.join(COMMAND_FILE)
}

pub fn default_channel_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CHANNEL_DIR)
}
