use core::fmt;
use serde::{Deserialize, Serialize};

/// Context markers used when reporting codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerKind {
    /// 32-byte identifier (block hash, state root, transaction or transition id).
    Identifier,
    /// Fixed-size object payload such as an address.
    Object,
    /// Field, group or scalar element.
    Numeric,
    /// 384-bit base-field element.
    BaseField,
    /// Compressed G1 affine point.
    G1,
    /// Quadratic extension element.
    Fq2,
    /// Compressed G2 affine point.
    G2,
    /// Prepared G2 point with its coefficient sequence.
    G2Prepared,
    /// Length-prefixed sequence.
    Sequence,
    /// Plain little-endian integer or bool.
    Integer,
    /// Human-readable text form.
    Text,
    /// Runtime-tagged primitive dispatch.
    Primitive,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Identifier => write!(f, "identifier"),
            SerKind::Object => write!(f, "object"),
            SerKind::Numeric => write!(f, "numeric"),
            SerKind::BaseField => write!(f, "base field"),
            SerKind::G1 => write!(f, "g1 affine"),
            SerKind::Fq2 => write!(f, "fq2"),
            SerKind::G2 => write!(f, "g2 affine"),
            SerKind::G2Prepared => write!(f, "g2 prepared"),
            SerKind::Sequence => write!(f, "sequence"),
            SerKind::Integer => write!(f, "integer"),
            SerKind::Text => write!(f, "text"),
            SerKind::Primitive => write!(f, "primitive"),
        }
    }
}

/// Error surfaced while encoding or decoding a primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer bytes were available than the type requires, or a payload had
    /// the wrong size.
    LengthMismatch {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },
    /// Text carried a human-readable prefix belonging to another type.
    PrefixMismatch {
        /// Prefix declared by the target type.
        expected: &'static str,
        /// Prefix found in the input.
        actual: String,
    },
    /// Numeric text could not be parsed.
    Parse {
        /// Structure that failed to parse.
        kind: SerKind,
        /// Offending input.
        input: String,
        /// Short reason.
        reason: &'static str,
    },
    /// A value of one kind was supplied where another was required.
    TypeMismatch {
        /// Kind the operation requires.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },
    /// Encountered a byte pattern or value the layout does not allow.
    InvalidValue {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
    },
    /// Additional bytes remained after consuming the expected payload.
    TrailingBytes {
        /// Structure that was decoded.
        kind: SerKind,
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
    /// The checksummed text codec rejected its input.
    Encoding {
        /// Message reported by the codec.
        reason: String,
    },
    /// The field-arithmetic backend failed.
    Backend {
        /// Operation tag passed to the backend.
        op: &'static str,
        /// Message reported by the backend.
        reason: String,
    },
}

impl CodecError {
    /// Creates a length-mismatch error helper.
    pub fn length_mismatch(
        kind: SerKind,
        field: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        CodecError::LengthMismatch {
            kind,
            field,
            expected,
            actual,
        }
    }

    /// Creates a prefix-mismatch error helper.
    pub fn prefix_mismatch(expected: &'static str, actual: impl Into<String>) -> Self {
        CodecError::PrefixMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// Creates a parse error helper.
    pub fn parse(kind: SerKind, input: impl Into<String>, reason: &'static str) -> Self {
        CodecError::Parse {
            kind,
            input: input.into(),
            reason,
        }
    }

    /// Creates a type-mismatch error helper.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        CodecError::TypeMismatch { expected, found }
    }

    /// Creates an invalid-value error helper.
    pub fn invalid_value(kind: SerKind, field: &'static str) -> Self {
        CodecError::InvalidValue { kind, field }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        CodecError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Creates a text-codec error helper.
    pub fn encoding(reason: impl fmt::Display) -> Self {
        CodecError::Encoding {
            reason: reason.to_string(),
        }
    }

    /// Creates an arithmetic-backend error helper.
    pub fn backend(op: &'static str, reason: impl fmt::Display) -> Self {
        CodecError::Backend {
            op,
            reason: reason.to_string(),
        }
    }

    /// Returns the codec context associated with the error, if any.
    pub fn kind(&self) -> Option<SerKind> {
        match *self {
            CodecError::LengthMismatch { kind, .. }
            | CodecError::Parse { kind, .. }
            | CodecError::InvalidValue { kind, .. }
            | CodecError::TrailingBytes { kind, .. } => Some(kind),
            CodecError::PrefixMismatch { .. } | CodecError::Encoding { .. } => Some(SerKind::Text),
            CodecError::TypeMismatch { .. } => Some(SerKind::Primitive),
            CodecError::Backend { .. } => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::LengthMismatch {
                kind,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{} {}: expected {} bytes, got {}",
                kind, field, expected, actual
            ),
            CodecError::PrefixMismatch { expected, actual } => {
                write!(f, "prefix mismatch: expected {:?}, got {:?}", expected, actual)
            }
            CodecError::Parse {
                kind,
                input,
                reason,
            } => write!(f, "cannot parse {} from {:?}: {}", kind, input, reason),
            CodecError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            CodecError::InvalidValue { kind, field } => {
                write!(f, "invalid value in {} {}", kind, field)
            }
            CodecError::TrailingBytes {
                kind,
                consumed,
                remaining,
            } => write!(
                f,
                "{} left {} trailing bytes after offset {}",
                kind, remaining, consumed
            ),
            CodecError::Encoding { reason } => write!(f, "text codec error: {}", reason),
            CodecError::Backend { op, reason } => {
                write!(f, "field backend failed on {}: {}", op, reason)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Convenient alias for codec results.
pub type CodecResult<T> = core::result::Result<T, CodecError>;
