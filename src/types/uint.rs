//! Fixed-width little-endian unsigned integers.
//!
//! `LeUint<N>` stores exactly `N` bytes. It performs no reduction modulo any
//! field order; range checks against a modulus belong to the arithmetic
//! backend.

use core::fmt;

use num_bigint::BigUint;

use crate::ser::{BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, SerKind};
use crate::text::numeric::parse_decimal;

/// Unsigned integer stored as `N` little-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeUint<const N: usize>([u8; N]);

impl<const N: usize> LeUint<N> {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; N]);

    /// Wraps raw little-endian bytes.
    pub const fn from_le_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Returns the little-endian bytes.
    pub const fn to_le_bytes(self) -> [u8; N] {
        self.0
    }

    /// Borrows the little-endian bytes.
    pub fn as_le_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Builds a value from a `u64`, truncated if `N < 8`.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; N];
        let le = value.to_le_bytes();
        let len = N.min(le.len());
        bytes[..len].copy_from_slice(&le[..len]);
        Self(bytes)
    }

    /// Builds a value from an arbitrary-precision integer, rejecting values
    /// that do not fit in `N` bytes.
    pub fn from_biguint(value: &BigUint) -> CodecResult<Self> {
        let le = value.to_bytes_le();
        if le.len() > N && le[N..].iter().any(|byte| *byte != 0) {
            return Err(CodecError::invalid_value(SerKind::Integer, "value"));
        }
        Ok(Self::from_biguint_truncated(value))
    }

    /// Builds a value from an arbitrary-precision integer, keeping only the
    /// low `N` bytes.
    pub fn from_biguint_truncated(value: &BigUint) -> Self {
        let le = value.to_bytes_le();
        let mut bytes = [0u8; N];
        let len = N.min(le.len());
        bytes[..len].copy_from_slice(&le[..len]);
        Self(bytes)
    }

    /// Parses decimal digits, reporting failures against `kind`.
    pub fn from_decimal(digits: &str, kind: SerKind) -> CodecResult<Self> {
        let value = parse_decimal(digits, kind)?;
        Self::from_biguint(&value)
            .map_err(|_| CodecError::parse(kind, digits, "value exceeds type width"))
    }

    /// Converts to an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl<const N: usize> Default for LeUint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<u64> for LeUint<N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const N: usize> fmt::Display for LeUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl<const N: usize> fmt::Debug for LeUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LeUint").field(&self.to_biguint()).finish()
    }
}

impl<const N: usize> BinaryCodec for LeUint<N> {
    const KIND: SerKind = SerKind::Integer;
    const MIN_ENCODED_LEN: usize = N;

    fn encoded_len(&self) -> usize {
        N
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self(cursor.read_array::<N>(SerKind::Integer, "uint")?))
    }
}

impl<const N: usize> FixedWidth for LeUint<N> {
    const WIDTH: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_value_is_little_endian() {
        let value = LeUint::<32>::from_u64(0x0102);
        let mut expected = [0u8; 32];
        expected[0] = 0x02;
        expected[1] = 0x01;
        assert_eq!(value.to_le_bytes(), expected);
        assert_eq!(value.to_string(), "258");
    }

    #[test]
    fn overflow_is_rejected_or_truncated() {
        let wide = BigUint::from(1u8) << 256usize;
        assert!(LeUint::<32>::from_biguint(&wide).is_err());
        assert!(LeUint::<32>::from_biguint_truncated(&wide).is_zero());

        let max = (BigUint::from(1u8) << 256usize) - BigUint::from(1u8);
        assert_eq!(LeUint::<32>::from_biguint(&max).unwrap().to_biguint(), max);
    }

    #[test]
    fn decimal_parse_checks_width() {
        let max_384 = "39402006196394479212279040100143613805079739270465446667948293404245721771497210611414266254884915640806627990306815";
        assert_eq!(
            LeUint::<48>::from_decimal(max_384, SerKind::BaseField)
                .unwrap()
                .to_le_bytes(),
            [0xff; 48]
        );
        assert!(LeUint::<32>::from_decimal(max_384, SerKind::Numeric).is_err());
        assert_eq!(LeUint::<32>::from_decimal("0", SerKind::Numeric).unwrap(), LeUint::ZERO);
    }
}
