//! Low-level location service calls.
//!
//! Different OS builds expose different transaction signatures for the
//! same effect, so both known variants are attempted unconditionally.
//! Float arguments travel as IEEE-754 single-precision bit patterns
//! rendered as signed 32-bit integers.

use geoshift_core::Position;

use crate::executor::{run_logged, PrivilegedExecutor};

/// Both service-call variants for a fix, in attempt order.
pub fn commands(position: &Position) -> [String; 2] {
    let lat = float_bits(position.latitude);
    let lon = float_bits(position.longitude);
    let acc = float_bits(position.accuracy);
    [
        format!("service call location 13 i32 0 f {lat} f {lon} f {acc}"),
        format!("service call location 16 i32 1 i32 0 f {lat} f {lon} f {acc}"),
    ]
}

/// Issue both call variants. Returns `(sent, failed)`.
pub fn issue(position: &Position, executor: &dyn PrivilegedExecutor) -> (usize, usize) {
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

fn float_bits(value: f64) -> i32 {
    (value as f32).to_bits() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_are_built() {
        let position = Position {
            latitude: 37.7749,
            longitude: -122.4194,
            accuracy: 5.0,
            timestamp_ms: 0,
        };
        let [first, second] = commands(&position);
        assert!(first.starts_with("service call location 13 i32 0 f "));
        assert!(second.starts_with("service call location 16 i32 1 i32 0 f "));
    }

    #[test]
    fn floats_are_encoded_as_signed_single_precision_bits() {
        let position = Position {
            latitude: 37.7749,
            longitude: -122.4194,
            accuracy: 5.0,
            timestamp_ms: 0,
        };
        let lat_bits = (37.7749_f32).to_bits() as i32;
        let lon_bits = (-122.4194_f32).to_bits() as i32;
        let acc_bits = (5.0_f32).to_bits() as i32;
        assert!(lon_bits < 0, "negative floats must render with a sign");

        let [first, _] = commands(&position);
        assert_eq!(
            first,
            format!("service call location 13 i32 0 f {lat_bits} f {lon_bits} f {acc_bits}")
        );
    }
}
