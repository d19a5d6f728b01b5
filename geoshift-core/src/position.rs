//! Position domain types.
//!
//! Latitude and longitude are unconstrained `f64` values; the injector
//! deliberately performs no range validation so that the accepted command
//! surface matches the upstream controller exactly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Accuracy (meters) used when a location command omits the accuracy field.
pub const DEFAULT_ACCURACY: f64 = 10.0;

/// A spoofed GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    pub accuracy: f64,
    /// Epoch milliseconds at which this fix was produced.
    pub timestamp_ms: i64,
}

impl Position {
    /// Build a position stamped with the current wall-clock time.
    pub fn new(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
            timestamp_ms: Utc::now().timestamp_millis(),
        }
    }
}

/// Render a float for the wire/file formats: keeps a trailing `.0` on
/// whole numbers (`10.0`, never `10`), matching the controller side.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

impl Default for Position {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            accuracy: DEFAULT_ACCURACY,
            timestamp_ms: 0,
        }
    }
}
