//! Injection fan-out: propagate one validated fix to every plausible
//! consumer (provider config files, NMEA files, broadcasts, service calls).

pub mod broadcast;
mod error;
pub mod executor;
pub mod nmea;
pub mod pipeline;
pub mod service_call;
pub mod sink;

pub use error::InjectError;
pub use executor::{PrivilegedExecutor, SuExecutor};
pub use pipeline::{inject, InjectReport, InjectTargets};
pub use sink::{SinkWriteOutcome, NMEA_FILE_TARGETS, PROVIDER_FILE_TARGETS};
