//! Australian Business Number and its modulus-89 checksum.

use std::fmt;

use crate::utils::normalizer::normalize_identifier;

/// Canonical width of an ABN.
pub const ABN_LENGTH: usize = 11;

/// Per-position weights from the official ABN checksum algorithm.
const WEIGHTS: [u32; ABN_LENGTH] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// An Australian Business Number held in normalized form.
///
/// Construction never fails; whitespace is stripped and the digits are
/// left-padded with zeros to 11 characters. Validity is a separate predicate,
/// so an `Abn` can hold a string that fails its checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abn(String);

impl Abn {
    /// Creates an ABN from any displayable value, normalizing it.
    ///
    /// Accepts integers and strings alike: `Abn::new(99124391073u64)` and
    /// `Abn::new(" 99 12 439 10 73 ")` produce the same value.
    pub fn new(raw: impl ToString) -> Self {
        Self(normalize_identifier(&raw.to_string(), ABN_LENGTH))
    }

    /// Returns the normalized 11-character digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the ABN against the official modulus-89 weighted checksum.
    ///
    /// The leading digit is reduced by one before weighting (the published
    /// check-digit offset); the ABN is valid iff the weighted sum is exactly
    /// divisible by 89. Never panics: anything that is not exactly 11 ASCII
    /// digits is rejected up front.
    pub fn is_valid(&self) -> bool {
        if self.0.len() != ABN_LENGTH || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let sum: i64 = self
            .0
            .bytes()
            .zip(WEIGHTS)
            .enumerate()
            .map(|(position, (byte, weight))| {
                let offset = if position == 0 { 1 } else { 0 };
                (i64::from(byte - b'0') - offset) * i64::from(weight)
            })
            .sum();

        sum % 89 == 0
    }

    /// Formats a valid ABN as `"XX XXX XXX XXX"`.
    ///
    /// An invalid ABN formats to the empty string; this never fails.
    pub fn formatted(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }

        format!(
            "{} {} {} {}",
            &self.0[0..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..11]
        )
    }
}

impl fmt::Display for Abn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Convenience predicate: normalizes `raw` and checks the checksum.
///
/// Returns `false` for any malformed input; never panics.
pub fn is_valid(raw: impl ToString) -> bool {
    Abn::new(raw).is_valid()
}
