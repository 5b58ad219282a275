//! Leveled line logger.
//!
//! Writes timestamped, ANSI-styled entries to a single output file, filtered
//! by a configurable severity floor.
pub mod logger;
pub mod style;

pub use logger::output::default_log_path;
pub use logger::{LogLevel, Logger, LoggerConfig, LoggerError};
