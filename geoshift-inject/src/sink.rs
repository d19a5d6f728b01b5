//! File sink writes.
//!
//! Every known provider-configuration path gets the same rendered block;
//! a failure on one path never stops the attempt on the next. After each
//! successful write the file is made world-readable so unprivileged
//! subsystem components can pick it up.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use geoshift_core::{format_float, Position};

use crate::error::{io_err, InjectError};
use crate::executor::{run_logged, PrivilegedExecutor};

/// Provider-configuration files consumed by various GPS subsystem builds.
pub const PROVIDER_FILE_TARGETS: [&str; 5] = [
    "/data/misc/location/gps.conf",
    "/data/misc/location/gps_debug.conf",
    "/data/misc/gps/gps.conf",
    "/etc/gps.conf",
    "/system/etc/gps.conf",
];

/// Raw NMEA feeds read by consumers that bypass the provider layer.
pub const NMEA_FILE_TARGETS: [&str; 2] = [
    "/data/misc/location/nmea.txt",
    "/data/misc/gps/nmea.txt",
];

/// Outcome of a single sink-file write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SinkWriteOutcome {
    Written { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

/// Render the provider-configuration block for a fix.
pub fn render_provider_block(position: &Position) -> String {
    format!(
        "# Generated by LocationInjectorDaemon\n\
         latitude={}\n\
         longitude={}\n\
         accuracy={}\n\
         provider=gps\n\
         time={}\n",
        format_float(position.latitude),
        format_float(position.longitude),
        format_float(position.accuracy),
        position.timestamp_ms,
    )
}

/// Overwrite every path in `paths` with `content`, creating parent
/// directories as needed, then `chmod 644` each written file through the
/// executor. Returns one outcome per path, in order.
pub fn write_sinks(
    paths: &[PathBuf],
    content: &str,
    executor: &dyn PrivilegedExecutor,
) -> Vec<SinkWriteOutcome> {
    paths
        .iter()
        .map(|path| match write_one(path, content) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote location sink");
                run_logged(executor, &format!("chmod 644 {}", path.display()));
                SinkWriteOutcome::Written { path: path.clone() }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "sink write failed");
                SinkWriteOutcome::Failed {
                    path: path.clone(),
                    reason: err.to_string(),
                }
            }
        })
        .collect()
}

fn write_one(path: &Path, content: &str) -> Result<(), InjectError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    fs::write(path, content).map_err(|e| io_err(path, e))
}
