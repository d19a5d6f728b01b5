//! Privileged shell-command execution.

use std::path::PathBuf;
use std::process::Command;

use crate::error::InjectError;

/// An external capability that runs one shell command line with elevated
/// privilege and reports its exit status. Stdout/stderr are not inspected.
pub trait PrivilegedExecutor: Send + Sync {
    fn run(&self, command_line: &str) -> Result<i32, InjectError>;
}

/// Runs commands through `su -c`, blocking until the command exits.
#[derive(Debug, Clone)]
pub struct SuExecutor {
    su_binary: PathBuf,
}

impl SuExecutor {
    pub fn new() -> Self {
        Self {
            su_binary: PathBuf::from("su"),
        }
    }

    /// Override the `su` binary path (e.g. `/system/xbin/su`).
    pub fn with_binary(su_binary: impl Into<PathBuf>) -> Self {
        Self {
            su_binary: su_binary.into(),
        }
    }
}

impl Default for SuExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegedExecutor for SuExecutor {
    fn run(&self, command_line: &str) -> Result<i32, InjectError> {
        let status = Command::new(&self.su_binary)
            .arg("-c")
            .arg(command_line)
            .status()
            .map_err(|source| InjectError::Spawn {
                command: command_line.to_string(),
                source,
            })?;
        // Signal-terminated commands have no exit code.
        Ok(status.code().unwrap_or(-1))
    }
}

/// Run a command through the executor, logging the outcome. Returns `true`
/// only on a clean zero exit; all failure modes are logged and swallowed.
pub(crate) fn run_logged(executor: &dyn PrivilegedExecutor, command_line: &str) -> bool {
    tracing::debug!(command = command_line, "executing privileged command");
    match executor.run(command_line) {
        Ok(0) => true,
        Ok(code) => {
            tracing::warn!(command = command_line, code, "privileged command exited non-zero");
            false
        }
        Err(err) => {
            tracing::warn!(command = command_line, error = %err, "privileged command failed to start");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StaticExecutor {
        exit_code: i32,
        commands: Mutex<Vec<String>>,
    }

    impl PrivilegedExecutor for StaticExecutor {
        fn run(&self, command_line: &str) -> Result<i32, InjectError> {
            self.commands.lock().unwrap().push(command_line.to_string());
            Ok(self.exit_code)
        }
    }

    #[test]
    fn run_logged_is_true_only_on_zero_exit() {
        let ok = StaticExecutor {
            exit_code: 0,
            commands: Mutex::new(Vec::new()),
        };
        let failing = StaticExecutor {
            exit_code: 1,
            commands: Mutex::new(Vec::new()),
        };

        assert!(run_logged(&ok, "true"));
        assert!(!run_logged(&failing, "false"));
        assert_eq!(ok.commands.lock().unwrap().as_slice(), &["true"]);
    }

    #[test]
    fn run_logged_swallows_spawn_failures() {
        struct BrokenExecutor;
        impl PrivilegedExecutor for BrokenExecutor {
            fn run(&self, command_line: &str) -> Result<i32, InjectError> {
                Err(InjectError::Spawn {
                    command: command_line.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no su"),
                })
            }
        }

        assert!(!run_logged(&BrokenExecutor, "id"));
    }
}
