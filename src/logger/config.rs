//! Logger configuration
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Construction parameters for [`Logger`](super::Logger).
///
/// Every field can be left out when deserialized; missing fields take the
/// same defaults as [`LoggerConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoggerConfig {
    /// Destination file. `None` falls back to a per-OS temp dir default.
    #[serde(default)]
    pub output_file: Option<PathBuf>,
    /// Severity floor name, matched case-insensitively.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_level() -> String {
    String::from("INFO")
}

fn default_enabled() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            output_file: None,
            level: default_level(),
            enabled: true,
        }
    }
}
