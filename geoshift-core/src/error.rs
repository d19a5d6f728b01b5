//! Error types for geoshift-core.

use thiserror::Error;

/// Reasons a raw command record failed to parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A numeric field did not parse as a floating-point literal.
    #[error("invalid {field} value '{value}'")]
    BadFloat {
        field: &'static str,
        value: String,
    },

    /// The record matched neither the `LOCATION,...` nor the `STOP` shape.
    #[error("unrecognized command '{0}'")]
    UnrecognizedShape(String),
}
