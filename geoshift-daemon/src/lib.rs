//! Daemon runtime: command channel poll loop + injection fan-out driver.

mod channel;
mod error;
mod handshake;
pub mod paths;
mod runtime;
mod state;

pub use channel::CommandChannel;
pub use error::DaemonError;
pub use handshake::LocationSubsystemHandle;
pub use runtime::{run, start_blocking, DaemonConfig};
pub use state::DaemonState;
