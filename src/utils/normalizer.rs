//! Identifier normalization utilities.
//!
//! The registry and its callers spell identifiers inconsistently: integers,
//! strings with arbitrary internal whitespace, values missing their leading
//! zeros. Normalization mashes all of those into a canonical digit string of a
//! fixed width so the checksum validators can work over positions.

/// Normalizes a raw identifier into a fixed-width digit string.
///
/// # Rules
///
/// 1. All whitespace is removed, including internal whitespace
/// 2. The result is left-padded with `'0'` to `width`
///
/// This function never fails. Input that is not a number at all (for example
/// `"abn"`) is normalized as-is and will simply fail checksum validation
/// later; inputs longer than `width` are returned unpadded.
///
/// # Examples
///
/// ```
/// use abr_lookup::utils::normalizer::normalize_identifier;
///
/// assert_eq!(normalize_identifier(" 99 12 439 10 73 ", 11), "99124391073");
/// assert_eq!(normalize_identifier("124391073", 11), "00124391073");
/// ```
pub fn normalize_identifier(raw: &str, width: usize) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped.len() >= width {
        return stripped;
    }

    let mut padded = String::with_capacity(width);
    for _ in 0..width - stripped.len() {
        padded.push('0');
    }
    padded.push_str(&stripped);
    padded
}
