//! Errors raised while loading host configuration
//!
//! The simulation itself never fails; only settings I/O does.

use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read or written
    Io { path: PathBuf, source: std::io::Error },
    /// Settings file is not valid JSON for [`crate::Settings`]
    Parse(serde_json::Error),
    /// Values parsed but violate a simulation constraint
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse(e) => write!(f, "invalid settings json: {e}"),
            Self::Invalid(m) => write!(f, "invalid settings: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
