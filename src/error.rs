//! Error types for Tumble Box.
//!
//! The simulation itself cannot fail; only loading tuning data from disk can.

use std::fmt;

/// Errors that can occur while loading or validating [`PhysicsTuning`](crate::PhysicsTuning).
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the tuning file.
    Io(std::io::Error),
    /// The file is not valid tuning JSON.
    Parse(serde_json::Error),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read tuning file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse tuning file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
