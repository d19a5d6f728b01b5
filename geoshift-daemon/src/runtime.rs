//! Poll-loop runtime.
//!
//! Single logical thread of control: every wake checks the mailbox,
//! applies at most one command, then sleeps a fixed interval. No error in
//! command processing or fan-out terminates the loop; the only exit paths
//! are an explicit `STOP` command, ctrl-c, or a failed startup handshake.

use std::path::PathBuf;

use geoshift_core::Command;
use geoshift_inject::{inject, InjectTargets, PrivilegedExecutor, SuExecutor};

use crate::channel::CommandChannel;
use crate::error::{io_err, DaemonError};
use crate::handshake::LocationSubsystemHandle;
use crate::paths::{channel_path, default_channel_dir, POLL_INTERVAL};
use crate::state::DaemonState;

/// Runtime configuration for one daemon process.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Package name of the controlling app; used only for log context.
    pub package: String,
    pub channel_dir: PathBuf,
    pub targets: InjectTargets,
}

impl DaemonConfig {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            channel_dir: default_channel_dir(),
            targets: InjectTargets::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum CycleOutcome {
    /// Mailbox empty (or unreadable this cycle).
    Idle,
    /// A fix was applied and fanned out.
    Applied,
    /// Malformed command logged and dropped.
    Discarded,
    /// `STOP` received; the loop must exit.
    Stop,
}

/// Start the daemon runtime and block the current thread until it exits.
pub fn start_blocking(config: DaemonConfig) -> Result<(), DaemonError> {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    let executor = SuExecutor::new();
    runtime.block_on(run(config, &executor))
}

/// Run the poll loop until `STOP` or ctrl-c.
pub async fn run(
    config: DaemonConfig,
    executor: &dyn PrivilegedExecutor,
) -> Result<(), DaemonError> {
    let _handle = LocationSubsystemHandle::acquire(executor)?;

    let channel = CommandChannel::new(channel_path(&config.channel_dir));
    let mut state = DaemonState::new();
    tracing::info!(
        package = %config.package,
        channel = %channel.path().display(),
        "location injector daemon started",
    );

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => tracing::info!("received ctrl-c, shutting down"),
                    Err(err) => tracing::warn!(error = %err, "ctrl-c handler failed, shutting down"),
                }
                break;
            }
            _ = interval.tick() => {
                if poll_once(&channel, &mut state, &config.targets, executor) == CycleOutcome::Stop {
                    break;
                }
            }
        }
    }

    tracing::info!("daemon loop exited");
    Ok(())
}

/// One poll cycle: peek, parse, apply, consume.
fn poll_once(
    channel: &CommandChannel,
    state: &mut DaemonState,
    targets: &InjectTargets,
    executor: &dyn PrivilegedExecutor,
) -> CycleOutcome {
    let raw = match channel.peek() {
        Ok(Some(raw)) => raw,
        Ok(None) => return CycleOutcome::Idle,
        Err(err) => {
            tracing::warn!(error = %err, "command channel unreadable, treating as empty");
            return CycleOutcome::Idle;
        }
    };

    let outcome = match Command::parse(&raw) {
        Command::SetLocation(position) => {
            let report = inject(&position, targets, executor);
            tracing::info!(
                latitude = position.latitude,
                longitude = position.longitude,
                accuracy = position.accuracy,
                files_written = report.files_written(),
                files_failed = report.files_failed(),
                broadcasts_sent = report.broadcasts_sent,
                service_calls_sent = report.service_calls_sent,
                duration_ms = report.duration_ms as u64,
                "location applied",
            );
            state.current_position = position;
            CycleOutcome::Applied
        }
        Command::Stop => {
            tracing::info!("stop command received, exiting");
            state.running = false;
            CycleOutcome::Stop
        }
        Command::Invalid(reason) => {
            tracing::warn!(%reason, "discarding invalid command");
            CycleOutcome::Discarded
        }
    };

    // Terminal outcome skips consumption: the process is exiting anyway
    // and performs no cleanup.
    if outcome != CycleOutcome::Stop {
        if let Err(err) = channel.consume() {
            tracing::warn!(error = %err, "failed to clear command channel, command may reapply");
        }
    }

    outcome
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    use geoshift_inject::InjectError;
    use tempfile::TempDir;

    struct RecordingExecutor {
        commands: Mutex<Vec<String>>,
    }

    impl RecordingExecutor {
        fn new() -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
            }
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl PrivilegedExecutor for RecordingExecutor {
        fn run(&self, command_line: &str) -> Result<i32, InjectError> {
            self.commands.lock().unwrap().push(command_line.to_string());
            Ok(0)
        }
    }

    struct Fixture {
        _root: TempDir,
        channel: CommandChannel,
        targets: InjectTargets,
    }

    fn fixture() -> Fixture {
        let root = TempDir::new().unwrap();
        let channel = CommandChannel::new(root.path().join("location_command"));
        let targets = InjectTargets {
            provider_files: vec![
                root.path().join("location/gps.conf"),
                root.path().join("gps/gps.conf"),
            ],
            nmea_files: vec![root.path().join("location/nmea.txt")],
        };
        Fixture {
            _root: root,
            channel,
            targets,
        }
    }

    #[test]
    fn empty_mailbox_is_an_idle_cycle() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        let mut state = DaemonState::new();

        let outcome = poll_once(&f.channel, &mut state, &f.targets, &executor);

        assert_eq!(outcome, CycleOutcome::Idle);
        assert_eq!(state, DaemonState::new());
        assert!(executor.commands().is_empty());
    }

    #[test]
    fn location_command_updates_state_and_writes_every_sink() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        let mut state = DaemonState::new();
        fs::write(f.channel.path(), "LOCATION,37.7749,-122.4194,5.0").unwrap();

        let outcome = poll_once(&f.channel, &mut state, &f.targets, &executor);

        assert_eq!(outcome, CycleOutcome::Applied);
        assert_eq!(state.current_position.latitude, 37.7749);
        assert_eq!(state.current_position.longitude, -122.4194);
        assert_eq!(state.current_position.accuracy, 5.0);
        assert!(state.running);

        for path in &f.targets.provider_files {
            let contents = fs::read_to_string(path).unwrap();
            assert!(contents.contains("latitude=37.7749"));
            assert!(contents.contains("longitude=-122.4194"));
            assert!(contents.contains("accuracy=5.0"));
            assert!(contents.contains("provider=gps"));
        }

        assert!(
            f.channel.peek().unwrap().is_none(),
            "command must be consumed after processing"
        );
    }

    #[test]
    fn garbage_is_discarded_without_touching_sinks() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        let mut state = DaemonState::new();
        fs::write(f.channel.path(), "garbage").unwrap();

        let outcome = poll_once(&f.channel, &mut state, &f.targets, &executor);

        assert_eq!(outcome, CycleOutcome::Discarded);
        assert_eq!(state, DaemonState::new(), "state unchanged");
        assert!(f.targets.provider_files.iter().all(|p| !p.exists()));
        assert!(executor.commands().is_empty(), "no fan-out performed");
        assert!(
            f.channel.peek().unwrap().is_none(),
            "invalid command still consumed"
        );
    }

    #[test]
    fn stop_terminates_without_fan_out() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        let mut state = DaemonState::new();
        fs::write(f.channel.path(), "STOP\n").unwrap();

        let outcome = poll_once(&f.channel, &mut state, &f.targets, &executor);

        assert_eq!(outcome, CycleOutcome::Stop);
        assert!(!state.running);
        assert!(executor.commands().is_empty());
        // Terminal outcome exits without cleanup; the mailbox keeps the
        // stop command.
        assert!(f.channel.path().exists());
    }

    #[test]
    fn same_command_twice_differs_only_in_time_line() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        let mut state = DaemonState::new();

        fs::write(f.channel.path(), "LOCATION,37.7749,-122.4194,5.0").unwrap();
        poll_once(&f.channel, &mut state, &f.targets, &executor);
        let first = fs::read_to_string(&f.targets.provider_files[0]).unwrap();

        fs::write(f.channel.path(), "LOCATION,37.7749,-122.4194,5.0").unwrap();
        poll_once(&f.channel, &mut state, &f.targets, &executor);
        let second = fs::read_to_string(&f.targets.provider_files[0]).unwrap();

        for (a, b) in first.lines().zip(second.lines()) {
            if a != b {
                assert!(a.starts_with("time="), "unexpected difference: {a} vs {b}");
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_exits_on_stop_command() {
        let f = fixture();
        let executor = RecordingExecutor::new();
        fs::write(f.channel.path(), "STOP").unwrap();

        let config = DaemonConfig {
            package: "com.example.controller".to_string(),
            channel_dir: f.channel.path().parent().unwrap().to_path_buf(),
            targets: f.targets.clone(),
        };

        run(config, &executor).await.expect("graceful exit");

        // Only the startup probe ran; stop performed no fan-out.
        assert_eq!(executor.commands(), vec!["service check location"]);
    }

    #[tokio::test(start_paused = true)]
    async fn run_aborts_when_handshake_fails() {
        struct DeadSubsystem;
        impl PrivilegedExecutor for DeadSubsystem {
            fn run(&self, _command_line: &str) -> Result<i32, InjectError> {
                Ok(1)
            }
        }

        let f = fixture();
        let config = DaemonConfig {
            package: "com.example.controller".to_string(),
            channel_dir: f.channel.path().parent().unwrap().to_path_buf(),
            targets: f.targets.clone(),
        };

        let err = run(config, &DeadSubsystem).await.unwrap_err();
        assert!(matches!(err, DaemonError::Handshake(_)));
    }
}
