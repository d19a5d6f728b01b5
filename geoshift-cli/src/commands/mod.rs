//! CLI subcommands.

pub mod daemon;
pub mod set;
pub mod status;
pub mod stop;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use geoshift_daemon::paths::channel_path;

/// Write one command record into the mailbox via a tmp sibling + rename,
/// so the daemon can never observe a partially written record.
pub(crate) fn write_channel(channel_dir: &Path, record: &str) -> Result<PathBuf> {
    let path = channel_path(channel_dir);
    let tmp = PathBuf::from(format!("{}.geoshift.tmp", path.display()));

    fs::create_dir_all(channel_dir)
        .with_context(|| format!("create channel directory {}", channel_dir.display()))?;
    fs::write(&tmp, format!("{record}\n"))
        .with_context(|| format!("write {}", tmp.display()))?;

    if let Err(err) = fs::rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("rename into {}", path.display()));
    }
    Ok(path)
}
