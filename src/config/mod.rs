//! Canonical widths, flag layout and decode limits.
//!
//! Every constant in this module is part of the wire format. Changing one
//! changes the bytes produced for every value of the affected type, so the
//! values are frozen and only [`CodecLimits`] is meant to be tuned by
//! callers.

use serde::{Deserialize, Serialize};

/// Width in bytes of every identifier payload (block hash, state root,
/// transaction id, transition id).
pub const IDENTIFIER_SIZE: usize = 32;

/// Length of the human-readable prefix carried by identifiers.
pub const IDENTIFIER_PREFIX_LEN: usize = 2;

/// Width in bytes of field, group and scalar elements.
pub const NUMERIC_WIDTH: usize = 32;

/// Width in bytes of a base-field element of the pairing curve.
pub const FQ_WIDTH: usize = 48;

/// Width in bytes of a quadratic-extension element (`c0 || c1`).
pub const FQ2_WIDTH: usize = 2 * FQ_WIDTH;

/// Mask selecting the flag bit overlaid on the last byte of a compressed
/// coordinate.
pub const FLAG_MASK: u8 = 0x80;

/// Default upper bound on the element count accepted by a sequence decoder.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 1 << 20;

/// Limits applied while decoding untrusted buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecLimits {
    /// Largest element count a length prefix may declare.
    pub max_sequence_len: usize,
}

impl CodecLimits {
    /// Creates a limit set with the provided sequence bound.
    pub const fn new(max_sequence_len: usize) -> Self {
        Self { max_sequence_len }
    }
}

impl Default for CodecLimits {
    fn default() -> Self {
        DEFAULT_CODEC_LIMITS
    }
}

/// Limits used by [`crate::ser::BinaryCodec::decode`] when no explicit set is
/// supplied.
pub const DEFAULT_CODEC_LIMITS: CodecLimits = CodecLimits::new(DEFAULT_MAX_SEQUENCE_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fq2_is_two_coordinates() {
        assert_eq!(FQ2_WIDTH, 96);
        assert_eq!(FLAG_MASK, 1 << 7);
    }

    #[test]
    fn limits_roundtrip_through_json() {
        let limits = CodecLimits::new(16);
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"max_sequence_len":16}"#);
        let restored: CodecLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, limits);
        assert_eq!(CodecLimits::default(), DEFAULT_CODEC_LIMITS);
    }
}
