//! Process-wide daemon state, owned and mutated only by the poll loop.

use geoshift_core::Position;

/// Mutable daemon state. Lives for the process lifetime; updated after a
/// command is successfully applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DaemonState {
    pub current_position: Position,
    pub running: bool,
}

impl DaemonState {
    pub fn new() -> Self {
        Self {
            current_position: Position::default(),
            running: true,
        }
    }
}

impl Default for DaemonState {
    fn default() -> Self {
        Self::new()
    }
}
