//! Startup handshake with the location subsystem.
//!
//! The daemon cannot call into the subsystem directly; the handle only
//! proves the subsystem is reachable with the privileges we hold before
//! the poll loop starts. It is never used after startup.

use geoshift_inject::PrivilegedExecutor;

use crate::error::DaemonError;

const PROBE_COMMAND: &str = "service check location";

/// Proof that the location subsystem answered the startup probe.
#[derive(Debug)]
pub struct LocationSubsystemHandle {
    _private: (),
}

impl LocationSubsystemHandle {
    /// Probe the subsystem through the privileged executor. Startup must
    /// abort if this fails; a daemon that cannot reach the subsystem has
    /// nothing useful to inject into.
    pub fn acquire(executor: &dyn PrivilegedExecutor) -> Result<Self, DaemonError> {
        match executor.run(PROBE_COMMAND) {
            Ok(0) => {
                tracing::info!("location subsystem reachable");
                Ok(Self { _private: () })
            }
            Ok(code) => Err(DaemonError::Handshake(format!(
                "probe '{PROBE_COMMAND}' exited with status {code}"
            ))),
            Err(err) => Err(DaemonError::Handshake(format!(
                "probe '{PROBE_COMMAND}' could not be invoked: {err}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoshift_inject::InjectError;

    struct StaticExecutor(i32);

    impl PrivilegedExecutor for StaticExecutor {
        fn run(&self, _command_line: &str) -> Result<i32, InjectError> {
            Ok(self.0)
        }
    }

    #[test]
    fn acquire_succeeds_on_zero_exit() {
        assert!(LocationSubsystemHandle::acquire(&StaticExecutor(0)).is_ok());
    }

    #[test]
    fn acquire_fails_on_nonzero_exit() {
        let err = LocationSubsystemHandle::acquire(&StaticExecutor(1)).unwrap_err();
        assert!(matches!(err, DaemonError::Handshake(_)));
    }
}
