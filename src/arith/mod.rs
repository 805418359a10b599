//! Field arithmetic port.
//!
//! Arithmetic semantics live behind [`FieldArithmetic`]. The codec layer only
//! encodes both operands, hands them to the backend with an operation tag and
//! decodes the result. [`ModularArithmetic`] is a plain `num-bigint` backend
//! suitable for tests and tooling.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::NUMERIC_WIDTH;
use crate::ser::{CodecError, CodecResult, SerKind};
use crate::types::uint::LeUint;

/// Operation tag passed to the arithmetic backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOp {
    /// Modular addition.
    Add,
    /// Modular subtraction.
    Sub,
    /// Modular multiplication.
    Mul,
}

impl FieldOp {
    /// Wire tag understood by arithmetic services.
    pub const fn tag(self) -> &'static str {
        match self {
            FieldOp::Add => "add",
            FieldOp::Sub => "sub",
            FieldOp::Mul => "mul",
        }
    }
}

impl fmt::Display for FieldOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Backend applying a binary field operation to canonical encodings.
///
/// Both operands are the 32-byte little-endian encodings of field elements;
/// the result must use the same layout.
pub trait FieldArithmetic {
    /// Applies `op` to `lhs` and `rhs`.
    fn apply(&self, op: FieldOp, lhs: &[u8], rhs: &[u8]) -> CodecResult<Vec<u8>>;
}

impl<F> FieldArithmetic for F
where
    F: Fn(FieldOp, &[u8], &[u8]) -> CodecResult<Vec<u8>>,
{
    fn apply(&self, op: FieldOp, lhs: &[u8], rhs: &[u8]) -> CodecResult<Vec<u8>> {
        self(op, lhs, rhs)
    }
}

/// Little-endian `u32` digits of the Aleo base-field modulus
/// `8444461749428370424248824938781546531375899335154063827935233455917409239041`.
const ALEO_FIELD_MODULUS_DIGITS: [u32; 8] = [
    0x0000_0001,
    0x0a11_8000,
    0xd000_0001,
    0x59aa_76fe,
    0x5c37_b001,
    0x60b4_4d1e,
    0x9a2c_a556,
    0x12ab_655e,
];

/// Reference backend reducing modulo an arbitrary modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularArithmetic {
    modulus: BigUint,
}

impl ModularArithmetic {
    /// Creates a backend for `modulus`, which must be non-zero and fit in
    /// the 32-byte element width.
    pub fn new(modulus: BigUint) -> CodecResult<Self> {
        if modulus.is_zero() || LeUint::<NUMERIC_WIDTH>::from_biguint(&modulus).is_err() {
            return Err(CodecError::invalid_value(SerKind::Numeric, "modulus"));
        }
        Ok(Self { modulus })
    }

    /// Backend over the Aleo base field.
    pub fn aleo_field() -> Self {
        Self {
            modulus: BigUint::from_slice(&ALEO_FIELD_MODULUS_DIGITS),
        }
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn operand(&self, bytes: &[u8], field: &'static str) -> CodecResult<BigUint> {
        if bytes.len() != NUMERIC_WIDTH {
            return Err(CodecError::length_mismatch(
                SerKind::Numeric,
                field,
                NUMERIC_WIDTH,
                bytes.len(),
            ));
        }
        Ok(BigUint::from_bytes_le(bytes) % &self.modulus)
    }
}

impl FieldArithmetic for ModularArithmetic {
    fn apply(&self, op: FieldOp, lhs: &[u8], rhs: &[u8]) -> CodecResult<Vec<u8>> {
        let a = self.operand(lhs, "lhs")?;
        let b = self.operand(rhs, "rhs")?;
        let result = match op {
            FieldOp::Add => (a + b) % &self.modulus,
            FieldOp::Sub => (a + &self.modulus - b) % &self.modulus,
            FieldOp::Mul => (a * b) % &self.modulus,
        };
        let encoded = LeUint::<NUMERIC_WIDTH>::from_biguint(&result)
            .map_err(|err| CodecError::backend(op.tag(), err))?;
        Ok(encoded.to_le_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        LeUint::<NUMERIC_WIDTH>::from_u64(value).to_le_bytes().to_vec()
    }

    #[test]
    fn aleo_modulus_matches_decimal() {
        let expected = BigUint::parse_bytes(
            b"8444461749428370424248824938781546531375899335154063827935233455917409239041",
            10,
        )
        .unwrap();
        assert_eq!(ModularArithmetic::aleo_field().modulus(), &expected);
    }

    #[test]
    fn small_modulus_wraps() {
        let backend = ModularArithmetic::new(BigUint::from(7u8)).unwrap();
        assert_eq!(backend.apply(FieldOp::Add, &encode(5), &encode(4)).unwrap(), encode(2));
        assert_eq!(backend.apply(FieldOp::Sub, &encode(2), &encode(5)).unwrap(), encode(4));
        assert_eq!(backend.apply(FieldOp::Mul, &encode(3), &encode(5)).unwrap(), encode(1));
    }

    #[test]
    fn rejects_short_operand_and_zero_modulus() {
        let backend = ModularArithmetic::aleo_field();
        let err = backend.apply(FieldOp::Add, &[1u8; 31], &encode(1)).expect_err("short");
        assert_eq!(
            err,
            CodecError::length_mismatch(SerKind::Numeric, "lhs", 32, 31)
        );
        assert!(ModularArithmetic::new(BigUint::zero()).is_err());
    }
}
