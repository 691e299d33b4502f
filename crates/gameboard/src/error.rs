//! Error types shared across the crate.
//!
//! Every failure is fatal for a run: nothing is retried and no partial
//! output is produced.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Configuration could not be read, parsed, or failed validation.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    /// Missing fields, non-numeric values, unknown direction token.
    Parse(serde_yaml::Error),
    Invalid { reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Errors surfaced while constructing a gameboard.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Dimensions or bearing rejected before any geodesic call.
    InvalidConfig { reason: String },
    /// The ellipsoidal solver returned a non-finite result.
    GeodesicCompute { reason: String },
}

impl BuildError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn compute(reason: impl Into<String>) -> Self {
        Self::GeodesicCompute {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid build parameters: {reason}"),
            Self::GeodesicCompute { reason } => write!(f, "geodesic solver failed: {reason}"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Errors reading or writing the output artifact.
#[derive(Debug)]
pub enum OutputError {
    Io { path: PathBuf, source: io::Error },
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    /// The file parsed but is not a gameboard artifact (wrong labels/count).
    Malformed { reason: String },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Yaml(err) => write!(f, "yaml: {err}"),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::Malformed { reason } => write!(f, "malformed gameboard artifact: {reason}"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for OutputError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
