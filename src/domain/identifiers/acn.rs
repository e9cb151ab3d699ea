//! Australian Company Number and its modulus-10 checksum.

use std::fmt;

use crate::utils::normalizer::normalize_identifier;

/// Canonical width of an ACN.
pub const ACN_LENGTH: usize = 9;

/// Weights applied to the first eight digits; the ninth is the check digit.
const WEIGHTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// An Australian Company Number held in normalized form.
///
/// Same construction contract as [`crate::domain::identifiers::Abn`]:
/// normalization never fails, validity is a derived predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acn(String);

impl Acn {
    /// Creates an ACN from any displayable value, normalizing it.
    pub fn new(raw: impl ToString) -> Self {
        Self(normalize_identifier(&raw.to_string(), ACN_LENGTH))
    }

    /// Returns the normalized 9-character digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the ACN against the official modulus-10 weighted checksum.
    ///
    /// The first eight digits are weighted `[8,7,6,5,4,3,2,1]`; the expected
    /// check digit is `(10 - sum % 10) % 10` and must equal digit nine. Never
    /// panics: anything that is not exactly 9 ASCII digits is rejected first.
    pub fn is_valid(&self) -> bool {
        if self.0.len() != ACN_LENGTH || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let digits: Vec<u32> = self.0.bytes().map(|b| u32::from(b - b'0')).collect();
        let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
        let check = (10 - sum % 10) % 10;

        check == digits[8]
    }

    /// Formats a valid ACN as `"XXX XXX XXX"`.
    ///
    /// An invalid ACN formats to the empty string; this never fails.
    pub fn formatted(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }

        format!("{} {} {}", &self.0[0..3], &self.0[3..6], &self.0[6..9])
    }
}

impl fmt::Display for Acn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Convenience predicate: normalizes `raw` and checks the checksum.
///
/// Returns `false` for any malformed input; never panics.
pub fn is_valid(raw: impl ToString) -> bool {
    Acn::new(raw).is_valid()
}
