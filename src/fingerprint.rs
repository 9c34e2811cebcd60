//! Host fingerprinting.
//!
//! Reduces an arbitrary string (normally the hostname) to an integer with an
//! exact number of decimal digits. The reduction is deterministic, so every
//! process on the same host contributes the same fingerprint to its IDs.

use std::fmt;

use sha2::{Digest, Sha256};

/// Hex width of the platform's largest signed integer, capped at 15.
///
/// 15 on 64-bit targets, 8 on 32-bit targets.
pub const MAX_HEX_DIGITS: u32 = {
    let width = isize::BITS / 4;
    if width < 15 { width } else { 15 }
};

/// Requested digit count is outside `1..=MAX_HEX_DIGITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintError {
    /// The rejected digit count.
    pub digits: u32,
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "numDigits must be between 1 and {}", MAX_HEX_DIGITS)
    }
}

impl std::error::Error for FingerprintError {}

/// Hash `input` down to an integer with exactly `digits` decimal digits.
///
/// The leading [`MAX_HEX_DIGITS`] hex characters of the SHA-256 digest are
/// read as an unsigned integer and reduced modulo `10^digits`. A result
/// shorter than `digits` is lifted by `10^(digits-1)`.
///
/// Hashing works on bytes, so a hostname that is not valid UTF-8 is
/// fingerprinted as-is.
///
/// # Examples
/// ```
/// use brevid::fingerprint::hash_to_fixed_digits;
///
/// assert_eq!(hash_to_fixed_digits("abcd", 2).unwrap(), 48);
/// ```
pub fn hash_to_fixed_digits<B>(input: &B, digits: u32) -> Result<u64, FingerprintError>
where
    B: AsRef<[u8]> + ?Sized,
{
    if digits < 1 || digits > MAX_HEX_DIGITS {
        return Err(FingerprintError { digits });
    }
    Ok(fixed_digits(input.as_ref(), digits))
}

/// Reduction behind [`hash_to_fixed_digits`] for a width already known to
/// be in `1..=MAX_HEX_DIGITS`.
pub(crate) fn fixed_digits(input: &[u8], digits: u32) -> u64 {
    let digest = Sha256::digest(input);

    // Big-endian leading bytes are the leading hex characters.
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let numeric = u64::from_be_bytes(head) >> (64 - 4 * MAX_HEX_DIGITS);

    let modulus = 10u64.pow(digits);
    let min_value = 10u64.pow(digits - 1);

    let mut reduced = numeric % modulus;
    if reduced < min_value {
        reduced += min_value;
    }
    reduced
}
