//! Broadcast-intent dispatch.

use geoshift_core::{format_float, Position};

use crate::executor::{run_logged, PrivilegedExecutor};

/// The three best-effort notifications sent for every applied fix.
pub fn commands(position: &Position) -> [String; 3] {
    [
        "am broadcast -a android.location.GPS_ENABLED_CHANGE --ez enabled true".to_string(),
        "am broadcast -a android.location.GPS_FIX_CHANGE --ez enabled true".to_string(),
        format!(
            "am broadcast -a android.intent.action.PROVIDER_CHANGED \
             --es provider gps --ez available true --ez valid true \
             --ef latitude {} --ef longitude {} --ef accuracy {}",
            format_float(position.latitude),
            format_float(position.longitude),
            format_float(position.accuracy),
        ),
    ]
}

/// Dispatch all broadcasts through the executor. Returns
/// `(sent, failed)`; failures are logged inside `run_logged`.
pub fn send(position: &Position, executor: &dyn PrivilegedExecutor) -> (usize, usize) {
    let mut sent = 0;
    let mut failed = 0;
    for command in commands(position) {
        if run_logged(executor, &command) {
            sent += 1;
        } else {
            failed += 1;
        }
    }
    (sent, failed)
}
