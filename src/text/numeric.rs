use num_bigint::BigUint;

use crate::ser::{CodecError, CodecResult, SerKind};

/// Removes `suffix` when present and returns the remaining text unchanged
/// otherwise.
pub fn strip_suffix_lenient<'t>(text: &'t str, suffix: &str) -> &'t str {
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Removes `suffix`, failing when the text does not end with it.
pub fn strip_suffix_strict<'t>(text: &'t str, suffix: &str, kind: SerKind) -> CodecResult<&'t str> {
    text.strip_suffix(suffix)
        .ok_or_else(|| CodecError::parse(kind, text, "missing type suffix"))
}

/// Parses a non-empty run of ASCII decimal digits.
pub fn parse_decimal(digits: &str, kind: SerKind) -> CodecResult<BigUint> {
    if digits.is_empty() {
        return Err(CodecError::parse(kind, digits, "empty literal"));
    }
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CodecError::parse(kind, digits, "not a decimal integer"));
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| CodecError::parse(kind, digits, "not a decimal integer"))
}
