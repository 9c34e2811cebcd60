//! Range and character-set validation used when building a generator.

use std::collections::HashSet;
use std::fmt;

/// Minimum number of symbols a character set must contain.
pub const CHARACTER_SET_MIN_LENGTH: usize = 3;

/// A value fell outside its permitted inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Value was smaller than the lower limit.
    BelowMinimum(i64),
    /// Value was larger than the upper limit.
    AboveMaximum(i64),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum(min) => write!(f, "must be at least {}", min),
            Self::AboveMaximum(max) => write!(f, "cannot be greater than {}", max),
        }
    }
}

impl std::error::Error for RangeError {}

/// A character set cannot be used as an encoding alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSetError {
    /// Fewer than [`CHARACTER_SET_MIN_LENGTH`] bytes.
    TooShort,
    /// At least one character is wider than a single byte.
    Multibyte,
    /// At least one character appears more than once.
    Duplicate,
}

impl fmt::Display for CharacterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(
                f,
                "Character set length must be at least {}",
                CHARACTER_SET_MIN_LENGTH
            ),
            Self::Multibyte => write!(f, "Character set cannot contain multibyte characters"),
            Self::Duplicate => write!(f, "Character set must contain unique characters"),
        }
    }
}

impl std::error::Error for CharacterSetError {}

/// Check that `min <= value <= max`.
pub fn validate_range(value: i64, min: i64, max: i64) -> Result<(), RangeError> {
    if value < min {
        return Err(RangeError::BelowMinimum(min));
    }
    if value > max {
        return Err(RangeError::AboveMaximum(max));
    }
    Ok(())
}

/// Check that `set` is usable as an alphabet.
///
/// Length is measured in bytes, so the multibyte check runs after the
/// length check and a two-character string like `"aé"` reports `Multibyte`.
pub fn validate_character_set(set: &str) -> Result<(), CharacterSetError> {
    if set.len() < CHARACTER_SET_MIN_LENGTH {
        return Err(CharacterSetError::TooShort);
    }
    if !set.is_ascii() {
        return Err(CharacterSetError::Multibyte);
    }

    let mut seen = HashSet::with_capacity(set.len());
    if !set.bytes().all(|b| seen.insert(b)) {
        return Err(CharacterSetError::Duplicate);
    }

    Ok(())
}
