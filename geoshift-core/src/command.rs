//! Textual command parsing.
//!
//! The command channel carries one comma-separated record at a time:
//!
//! ```text
//! LOCATION,<lat>,<lon>[,<accuracy>]
//! STOP
//! ```
//!
//! Parsing is total: malformed input becomes [`Command::Invalid`] rather
//! than an error, so a bad record can never take down the poll loop.

use crate::error::ParseError;
use crate::position::{Position, DEFAULT_ACCURACY};

/// A single command read from the channel, reconstructed each poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply a new spoofed fix.
    SetLocation(Position),
    /// Terminate the daemon.
    Stop,
    /// Anything the parser could not make sense of; carries the reason.
    Invalid(String),
}

impl Command {
    /// Parse one raw channel record. Leading/trailing whitespace is
    /// ignored; the `STOP` literal is case-sensitive.
    pub fn parse(raw: &str) -> Command {
        let trimmed = raw.trim();

        if trimmed == "STOP" {
            return Command::Stop;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() >= 3 && fields[0] == "LOCATION" {
            return match parse_location(&fields) {
                Ok(position) => Command::SetLocation(position),
                Err(err) => Command::Invalid(err.to_string()),
            };
        }

        Command::Invalid(ParseError::UnrecognizedShape(trimmed.to_string()).to_string())
    }
}

fn parse_location(fields: &[&str]) -> Result<Position, ParseError> {
    let latitude = parse_float("latitude", fields[1])?;
    let longitude = parse_float("longitude", fields[2])?;
    // Fields beyond the fourth are ignored.
    let accuracy = match fields.get(3) {
        Some(value) => parse_float("accuracy", value)?,
        None => DEFAULT_ACCURACY,
    };
    Ok(Position::new(latitude, longitude, accuracy))
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse::<f64>().map_err(|_| ParseError::BadFloat {
        field,
        value: value.to_string(),
    })
}
