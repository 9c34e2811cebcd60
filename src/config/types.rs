use std::fmt;

use crate::fingerprint::MAX_HEX_DIGITS;
use crate::validate::{self, CharacterSetError, RangeError};

use super::env;

/// Lowercase alphanumerics without the easily confused `i`, `l`, `o`, `v`, `0`.
pub const DEFAULT_CHARACTER_SET: &str = "abcdefghjkmnpqrstuwxyz123456789";

/// Default lower bound for the output length.
pub const DEFAULT_MIN_LENGTH: i64 = 5;
/// Default sub-second resolution (whole seconds).
pub const DEFAULT_TIME_MAGNITUDE: i64 = 1;
/// Default host fingerprint width.
pub const DEFAULT_HOST_MAGNITUDE: i64 = 1;
/// Default random component width.
pub const DEFAULT_RAND_MAGNITUDE: i64 = 1;

pub const MIN_LENGTH_LOWER_LIMIT: i64 = 3;
pub const MIN_LENGTH_UPPER_LIMIT: i64 = 255;
pub const TIME_MAGNITUDE_LOWER_LIMIT: i64 = 1;
pub const TIME_MAGNITUDE_UPPER_LIMIT: i64 = 5;
pub const HOST_MAGNITUDE_LOWER_LIMIT: i64 = 1;
pub const HOST_MAGNITUDE_UPPER_LIMIT: i64 = MAX_HEX_DIGITS as i64;
pub const RAND_MAGNITUDE_LOWER_LIMIT: i64 = 1;
pub const RAND_MAGNITUDE_UPPER_LIMIT: i64 = 10;

/// Generator configuration.
///
/// Every field is optional; `None` selects the documented default. Values
/// are not checked here, only when a generator is built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Epoch (seconds) subtracted from the timestamp component.
    pub start_timestamp: Option<i64>,
    /// Minimum length of generated IDs.
    pub min_length: Option<i64>,
    /// Sub-second resolution; time is scaled by `10^(time_magnitude-1)`.
    pub time_magnitude: Option<i64>,
    /// Number of decimal digits in the host fingerprint.
    pub host_magnitude: Option<i64>,
    /// Random component is drawn from `0..=10^rand_magnitude - 1`.
    pub rand_magnitude: Option<i64>,
    /// Alphabet handed to the encoder.
    pub character_set: Option<String>,
}

impl Config {
    /// Defaults overlaid with `BREVID_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply `BREVID_*` environment variables on top of the current values.
    pub fn apply_env(&mut self) {
        env::apply_env(self);
    }

    pub fn with_start_timestamp(mut self, seconds: i64) -> Self {
        self.start_timestamp = Some(seconds);
        self
    }

    pub fn with_min_length(mut self, length: i64) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn with_time_magnitude(mut self, magnitude: i64) -> Self {
        self.time_magnitude = Some(magnitude);
        self
    }

    pub fn with_host_magnitude(mut self, magnitude: i64) -> Self {
        self.host_magnitude = Some(magnitude);
        self
    }

    pub fn with_rand_magnitude(mut self, magnitude: i64) -> Self {
        self.rand_magnitude = Some(magnitude);
        self
    }

    pub fn with_character_set(mut self, set: impl Into<String>) -> Self {
        self.character_set = Some(set.into());
        self
    }

    /// Validate every field against its limits, in a fixed order.
    ///
    /// `now` is the upper bound for `start_timestamp`. The first violation
    /// is returned; nothing is produced unless every field passes.
    pub fn validate(&self, now: i64) -> Result<ValidConfig, ConfigError> {
        let time_magnitude = check(
            Field::TimeMagnitude,
            self.time_magnitude.unwrap_or(DEFAULT_TIME_MAGNITUDE),
            TIME_MAGNITUDE_LOWER_LIMIT,
            TIME_MAGNITUDE_UPPER_LIMIT,
        )?;
        let start_timestamp = check(
            Field::StartTimestamp,
            self.start_timestamp.unwrap_or(0),
            0,
            now,
        )?;
        let min_length = check(
            Field::MinLength,
            self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            MIN_LENGTH_LOWER_LIMIT,
            MIN_LENGTH_UPPER_LIMIT,
        )?;
        let host_magnitude = check(
            Field::HostMagnitude,
            self.host_magnitude.unwrap_or(DEFAULT_HOST_MAGNITUDE),
            HOST_MAGNITUDE_LOWER_LIMIT,
            HOST_MAGNITUDE_UPPER_LIMIT,
        )?;
        let rand_magnitude = check(
            Field::RandMagnitude,
            self.rand_magnitude.unwrap_or(DEFAULT_RAND_MAGNITUDE),
            RAND_MAGNITUDE_LOWER_LIMIT,
            RAND_MAGNITUDE_UPPER_LIMIT,
        )?;

        let character_set = self
            .character_set
            .clone()
            .unwrap_or_else(|| DEFAULT_CHARACTER_SET.to_string());
        if let Err(e) = validate::validate_character_set(&character_set) {
            return Err(ConfigError::Invalid {
                field: Field::CharacterSet,
                reason: Reason::CharacterSet(e),
            });
        }

        // All casts below are bounded by the limits checked above.
        Ok(ValidConfig {
            start_timestamp,
            min_length: min_length as u8,
            time_magnitude: time_magnitude as u32,
            host_magnitude: host_magnitude as u32,
            rand_magnitude: rand_magnitude as u32,
            character_set,
        })
    }
}

fn check(field: Field, value: i64, min: i64, max: i64) -> Result<i64, ConfigError> {
    validate::validate_range(value, min, max)
        .map(|()| value)
        .map_err(|e| ConfigError::Invalid {
            field,
            reason: Reason::Range(e),
        })
}

/// A [`Config`] whose values have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConfig {
    pub start_timestamp: i64,
    pub min_length: u8,
    pub time_magnitude: u32,
    pub host_magnitude: u32,
    pub rand_magnitude: u32,
    pub character_set: String,
}

/// Configuration field names, as they appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StartTimestamp,
    MinLength,
    TimeMagnitude,
    HostMagnitude,
    RandMagnitude,
    CharacterSet,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartTimestamp => "startTimestamp",
            Self::MinLength => "minLength",
            Self::TimeMagnitude => "timeMagnitude",
            Self::HostMagnitude => "hostMagnitude",
            Self::RandMagnitude => "randMagnitude",
            Self::CharacterSet => "character set",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Range(RangeError),
    CharacterSet(CharacterSetError),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(e) => fmt::Display::fmt(e, f),
            Self::CharacterSet(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed its range or character-set check.
    Invalid { field: Field, reason: Reason },
}

impl ConfigError {
    /// The offending field.
    pub fn field(&self) -> Field {
        match self {
            Self::Invalid { field, .. } => *field,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { field, reason } => write!(f, "Invalid {}: {}", field.as_str(), reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let Self::Invalid { reason, .. } = self;
        match reason {
            Reason::Range(e) => Some(e),
            Reason::CharacterSet(e) => Some(e),
        }
    }
}
