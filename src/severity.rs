use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ArgumentError;

/// Classification attached to notifications and process watches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warn,
    Info,
}

impl Severity {
    /// Wire representation expected by the watchdog service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }

    /// Parse a caller supplied severity, treating an empty string as
    /// [`Severity::Error`].
    pub fn resolve(s: &str) -> Result<Self, ArgumentError> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.parse()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            other => Err(ArgumentError::InvalidSeverity(other.to_owned())),
        }
    }
}
