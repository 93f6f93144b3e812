//! Postcode format validators
//!
//! Pure predicates over the two fixed Dutch postcode formats. Both never
//! fail: malformed input simply yields `false`.

use once_cell::sync::Lazy;
use regex::Regex;

// Four digits with a non-zero leading digit, then two uppercase letters
// where the suffixes SA, SD and SS are reserved and therefore invalid.
static P6_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9][0-9]{3}(?:[A-RT-Z][A-Z]|S[BCE-RT-Z])$").expect("P6 pattern is valid")
});

// Four digits with a non-zero leading digit.
static P4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{3}$").expect("P4 pattern is valid"));

/// Check whether a string is a P6-formatted postcode (e.g. `1234AB`).
///
/// No whitespace is tolerated and the letter suffix is case-sensitive.
pub fn is_valid_p6(postcode: &str) -> bool {
    P6_PATTERN.is_match(postcode)
}

/// Check whether a string is a P4-formatted postcode area (e.g. `1234`).
pub fn is_valid_p4(postcode: &str) -> bool {
    P4_PATTERN.is_match(postcode)
}
