//! Fan-out pipeline entrypoint shared by the daemon and tests.
//!
//! The runtime environment (provider implementation, OS build, whether a
//! mock provider is registered) cannot be verified from inside the
//! daemon, so the pipeline writes through every channel it knows about
//! and tolerates redundancy and partial failure. Stages run sequentially;
//! a failure in one stage never prevents the next from running.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use geoshift_core::Position;

use crate::executor::PrivilegedExecutor;
use crate::sink::{self, SinkWriteOutcome, NMEA_FILE_TARGETS, PROVIDER_FILE_TARGETS};
use crate::{broadcast, nmea, service_call};

/// The file paths one injection cycle writes through.
#[derive(Debug, Clone)]
pub struct InjectTargets {
    pub provider_files: Vec<PathBuf>,
    pub nmea_files: Vec<PathBuf>,
}

impl Default for InjectTargets {
    fn default() -> Self {
        Self {
            provider_files: PROVIDER_FILE_TARGETS.iter().map(PathBuf::from).collect(),
            nmea_files: NMEA_FILE_TARGETS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Per-stage outcome of one injection cycle.
#[derive(Debug, Serialize)]
pub struct InjectReport {
    pub provider_writes: Vec<SinkWriteOutcome>,
    pub nmea_writes: Vec<SinkWriteOutcome>,
    pub broadcasts_sent: usize,
    pub broadcasts_failed: usize,
    pub service_calls_sent: usize,
    pub service_calls_failed: usize,
    pub duration_ms: u128,
}

impl InjectReport {
    pub fn files_written(&self) -> usize {
        self.provider_writes
            .iter()
            .chain(self.nmea_writes.iter())
            .filter(|o| matches!(o, SinkWriteOutcome::Written { .. }))
            .count()
    }

    pub fn files_failed(&self) -> usize {
        self.provider_writes
            .iter()
            .chain(self.nmea_writes.iter())
            .filter(|o| matches!(o, SinkWriteOutcome::Failed { .. }))
            .count()
    }
}

/// Propagate one validated fix to every configured sink, then notify
/// listeners and the location subsystem. Never fails; all errors surface
/// in the report and the logs.
pub fn inject(
    position: &Position,
    targets: &InjectTargets,
    executor: &dyn PrivilegedExecutor,
) -> InjectReport {
    let started = Instant::now();

    let provider_writes = sink::write_sinks(
        &targets.provider_files,
        &sink::render_provider_block(position),
        executor,
    );
    let nmea_writes = sink::write_sinks(
        &targets.nmea_files,
        &nmea::render_sentences(position),
        executor,
    );
    let (broadcasts_sent, broadcasts_failed) = broadcast::send(position, executor);
    let (service_calls_sent, service_calls_failed) = service_call::issue(position, executor);

    InjectReport {
        provider_writes,
        nmea_writes,
        broadcasts_sent,
        broadcasts_failed,
        service_calls_sent,
        service_calls_failed,
        duration_ms: started.elapsed().as_millis(),
    }
}
