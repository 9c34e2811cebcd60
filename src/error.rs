use std::fmt;

use crate::config::ConfigError;
use crate::encoder::EncodeError;
use crate::environment::EnvironmentError;

/// Errors from building a generator or generating an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrevIdError {
    /// A configuration value is out of range or malformed.
    Config(ConfigError),
    /// Hostname or process id could not be resolved.
    Environment(EnvironmentError),
    /// The encoder failed.
    Encoding(EncodeError),
}

impl fmt::Display for BrevIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => fmt::Display::fmt(e, f),
            Self::Environment(e) => fmt::Display::fmt(e, f),
            Self::Encoding(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for BrevIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Environment(e) => Some(e),
            Self::Encoding(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BrevIdError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EnvironmentError> for BrevIdError {
    fn from(err: EnvironmentError) -> Self {
        Self::Environment(err)
    }
}

impl From<EncodeError> for BrevIdError {
    fn from(err: EncodeError) -> Self {
        Self::Encoding(err)
    }
}
