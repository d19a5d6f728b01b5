//! Domain types and command parsing for the geoshift location injector.

pub mod command;
pub mod error;
pub mod position;

pub use command::Command;
pub use error::ParseError;
pub use position::{format_float, Position, DEFAULT_ACCURACY};
