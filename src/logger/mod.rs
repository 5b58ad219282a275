//! Leveled file logger
mod config;
pub mod output;

pub use config::LoggerConfig;

use crate::style;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),
    #[error("Log target '{}' is a directory", .0.display())]
    FileIsADirectory(PathBuf),
    #[error("Log directory '{}' does not exist", .0.display())]
    ParentDirMissing(PathBuf),
    #[error("Insufficient permissions for log directory '{}'", .0.display())]
    InsufficientPermissions(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl TryFrom<&str> for LogLevel {
    type Error = LoggerError;
    fn try_from(value: &str) -> Result<Self, LoggerError> {
        match value.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(String::from(value))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// Appends timestamped, styled lines to a single output file.
///
/// Every write opens and closes the file on its own; nothing is buffered
/// across calls. No coordination is provided for concurrent writers to the
/// same file, which may interleave lines unpredictably.
#[derive(Debug, Clone)]
pub struct Logger {
    output_file: PathBuf,
    level: LogLevel,
    enabled: bool,
}

impl Logger {
    /// Validate `config` and build a logger from it.
    ///
    /// The output file is neither created nor truncated here; the filesystem
    /// is first touched by [`Logger::set_output_file`] or a write.
    pub fn try_new(config: &LoggerConfig) -> Result<Logger, LoggerError> {
        let level = LogLevel::try_from(config.level.as_str())?;
        let output_file = match &config.output_file {
            Some(path) => path.clone(),
            None => output::default_log_path(std::env::consts::OS),
        };
        Ok(Logger {
            output_file,
            level,
            enabled: config.enabled,
        })
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Point the logger at a new destination file.
    ///
    /// `"local"` resolves to `output.log` next to this crate's manifest.
    /// Anything else is resolved to an absolute path and validated; on
    /// failure the previous destination stays in place. An existing file at
    /// the new destination is truncated so it starts clean.
    pub fn set_output_file(&mut self, value: &str) -> Result<(), LoggerError> {
        let path = output::resolve_output_file(value)?;
        self.output_file = path;
        if self.output_file.is_file() {
            output::clear_file(&self.output_file)?;
        }
        Ok(())
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Replace the severity floor. The name is matched case-insensitively.
    pub fn set_level(&mut self, value: &str) -> Result<(), LoggerError> {
        self.level = LogLevel::try_from(value)?;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&self, message: &str, level: LogLevel) -> Result<(), LoggerError> {
        match level {
            LogLevel::Debug => self.debug(message),
            LogLevel::Info => self.info(message),
            LogLevel::Warning => self.warn(message),
            LogLevel::Error => self.error(message),
        }
    }

    pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
        if self.level <= LogLevel::Debug {
            self.write(&format!("{}{}", style::WHITE, message))
        } else {
            Ok(())
        }
    }

    pub fn info(&self, message: &str) -> Result<(), LoggerError> {
        if self.level <= LogLevel::Info {
            self.write(&format!("{}{}", style::BLUE, message))
        } else {
            Ok(())
        }
    }

    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        if self.level <= LogLevel::Warning {
            self.write(&format!("{}{}", style::YELLOW, message))
        } else {
            Ok(())
        }
    }

    /// Errors bypass the severity floor.
    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.write(&format!("{}{}", style::RED, message))
    }

    fn write(&self, content: &str) -> Result<(), LoggerError> {
        if !self.enabled {
            return Ok(());
        }
        // Milliseconds are truncated from the sub-second reading, not rounded.
        let time = Local::now().format("%H:%M:%S%.3f");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_file)?;
        writeln!(
            file,
            "{}{}{} - {}{}{}",
            style::DIM,
            time,
            style::BRIGHT,
            style::NORMAL,
            content,
            style::RESET
        )?;
        Ok(())
    }
}
