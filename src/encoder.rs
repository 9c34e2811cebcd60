//! Encoding of the numeric tuple into an ID string.
//!
//! Generators depend only on the [`Encoder`] trait. The default
//! implementation is [`SqidsEncoder`], backed by the `sqids` crate.

use std::fmt;

use sqids::Sqids;

/// The encoder rejected its configuration or input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError(pub String);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoding failed: {}", self.0)
    }
}

impl std::error::Error for EncodeError {}

impl From<sqids::Error> for EncodeError {
    fn from(err: sqids::Error) -> Self {
        Self(err.to_string())
    }
}

/// Turns an ordered list of integers into a short string.
///
/// Implementations must be deterministic: equal input always gives equal
/// output, drawn only from the configured alphabet and at least as long as
/// the configured minimum length.
pub trait Encoder: Send + Sync {
    fn encode(&self, numbers: &[u64]) -> Result<String, EncodeError>;
}

/// Sqids encoder with the default blocklist.
pub struct SqidsEncoder {
    sqids: Sqids,
    alphabet: String,
    min_length: u8,
}

impl SqidsEncoder {
    pub fn new(alphabet: &str, min_length: u8) -> Result<Self, EncodeError> {
        let sqids = Sqids::builder()
            .alphabet(alphabet.chars().collect())
            .min_length(min_length)
            .build()?;
        Ok(Self {
            sqids,
            alphabet: alphabet.to_string(),
            min_length,
        })
    }
}

impl fmt::Debug for SqidsEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqidsEncoder")
            .field("alphabet", &self.alphabet)
            .field("min_length", &self.min_length)
            .finish_non_exhaustive()
    }
}

impl Encoder for SqidsEncoder {
    fn encode(&self, numbers: &[u64]) -> Result<String, EncodeError> {
        Ok(self.sqids.encode(numbers)?)
    }
}
