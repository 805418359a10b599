//! Field, group and scalar elements.
//!
//! All three are 32-byte little-endian integers that differ only in their
//! text suffix. Values are not reduced or range-checked against any modulus.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::uint::LeUint;
use crate::arith::{FieldArithmetic, FieldOp};
use crate::config::NUMERIC_WIDTH;
use crate::ser::{BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, SerKind};
use crate::text::numeric::{strip_suffix_lenient, strip_suffix_strict};
use crate::text::TextCodec;

/// Compile-time description of a numeric kind.
pub trait NumericKind: 'static {
    /// Suffix appended to the decimal text form.
    const SUFFIX: &'static str;
    /// Type name used in debug output.
    const NAME: &'static str;
}

/// 32-byte unsigned integer tagged with a numeric kind.
pub struct Numeric<K: NumericKind> {
    value: LeUint<NUMERIC_WIDTH>,
    kind: PhantomData<fn() -> K>,
}

impl<K: NumericKind> Numeric<K> {
    /// The value zero.
    pub const ZERO: Self = Self::new(LeUint::ZERO);

    /// Wraps a fixed-width integer.
    pub const fn new(value: LeUint<NUMERIC_WIDTH>) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Builds a value from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self::new(LeUint::from_u64(value))
    }

    /// Builds a value from an arbitrary-precision integer that fits in 32 bytes.
    pub fn from_biguint(value: &BigUint) -> CodecResult<Self> {
        LeUint::from_biguint(value).map(Self::new)
    }

    /// Returns the underlying fixed-width integer.
    pub fn value(&self) -> LeUint<NUMERIC_WIDTH> {
        self.value
    }

    /// Converts to an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        self.value.to_biguint()
    }

    /// Parses text that must end with this kind's suffix.
    pub fn from_text_strict(text: &str) -> CodecResult<Self> {
        let digits = strip_suffix_strict(text, K::SUFFIX, SerKind::Numeric)?;
        LeUint::from_decimal(digits, SerKind::Numeric).map(Self::new)
    }
}

/// Field element.
pub type Field = Numeric<FieldKind>;
/// Group element.
pub type Group = Numeric<GroupKind>;
/// Scalar element.
pub type Scalar = Numeric<ScalarKind>;

/// Kind marker for [`Field`].
pub enum FieldKind {}
/// Kind marker for [`Group`].
pub enum GroupKind {}
/// Kind marker for [`Scalar`].
pub enum ScalarKind {}

impl NumericKind for FieldKind {
    const SUFFIX: &'static str = "field";
    const NAME: &'static str = "Field";
}

impl NumericKind for GroupKind {
    const SUFFIX: &'static str = "group";
    const NAME: &'static str = "Group";
}

impl NumericKind for ScalarKind {
    const SUFFIX: &'static str = "scalar";
    const NAME: &'static str = "Scalar";
}

#[allow(clippy::should_implement_trait)]
impl Field {
    /// Delegates `op` to `backend` and decodes its result.
    pub fn apply<B: FieldArithmetic + ?Sized>(
        &self,
        op: FieldOp,
        rhs: &Self,
        backend: &B,
    ) -> CodecResult<Self> {
        let lhs = self.encode();
        let rhs = rhs.encode();
        let out = backend.apply(op, &lhs, &rhs).map_err(|err| {
            tracing::debug!(op = op.tag(), %err, "field backend failed");
            err
        })?;
        Self::decode_exact(&out)
    }

    /// Field addition through `backend`.
    pub fn add<B: FieldArithmetic + ?Sized>(&self, rhs: &Self, backend: &B) -> CodecResult<Self> {
        self.apply(FieldOp::Add, rhs, backend)
    }

    /// Field subtraction through `backend`.
    pub fn sub<B: FieldArithmetic + ?Sized>(&self, rhs: &Self, backend: &B) -> CodecResult<Self> {
        self.apply(FieldOp::Sub, rhs, backend)
    }

    /// Field multiplication through `backend`.
    pub fn mul<B: FieldArithmetic + ?Sized>(&self, rhs: &Self, backend: &B) -> CodecResult<Self> {
        self.apply(FieldOp::Mul, rhs, backend)
    }
}

impl<K: NumericKind> Clone for Numeric<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: NumericKind> Copy for Numeric<K> {}

impl<K: NumericKind> PartialEq for Numeric<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: NumericKind> Eq for Numeric<K> {}

impl<K: NumericKind> Hash for Numeric<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: NumericKind> Default for Numeric<K> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<K: NumericKind> From<u64> for Numeric<K> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<K: NumericKind> fmt::Display for Numeric<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, K::SUFFIX)
    }
}

impl<K: NumericKind> fmt::Debug for Numeric<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}{})", K::NAME, self.value, K::SUFFIX)
    }
}

impl<K: NumericKind> TextCodec for Numeric<K> {
    fn to_text(&self) -> String {
        self.to_string()
    }

    /// Strips the suffix when present; bare decimal text is accepted too.
    fn from_text(text: &str) -> CodecResult<Self> {
        let digits = strip_suffix_lenient(text, K::SUFFIX);
        LeUint::from_decimal(digits, SerKind::Numeric).map(Self::new)
    }
}

impl<K: NumericKind> FromStr for Numeric<K> {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl<K: NumericKind> BinaryCodec for Numeric<K> {
    const KIND: SerKind = SerKind::Numeric;
    const MIN_ENCODED_LEN: usize = NUMERIC_WIDTH;

    fn encoded_len(&self) -> usize {
        NUMERIC_WIDTH
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.value.as_le_bytes());
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        let bytes = cursor.read_array::<NUMERIC_WIDTH>(SerKind::Numeric, K::NAME)?;
        Ok(Self::new(LeUint::from_le_bytes(bytes)))
    }
}

impl<K: NumericKind> FixedWidth for Numeric<K> {
    const WIDTH: usize = NUMERIC_WIDTH;
}

impl<K: NumericKind> Serialize for Numeric<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, K: NumericKind> Deserialize<'de> for Numeric<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(serde::de::Error::custom)
    }
}
