//! Pairing-curve point representations.
//!
//! Layouts (little-endian throughout):
//!
//! ```text
//! Fq          48 bytes   unsigned integer
//! G1Affine    48 bytes   Fq(x), bit 7 of byte 47 = flag
//! Fq2         96 bytes   Fq(c0) || Fq(c1), bit 7 of byte 95 = flag
//! G2Affine    96 bytes   Fq2(x)
//! G2Prepared  variable   count:u64 || count x (Fq2, Fq2, Fq2) || infinity:u8
//! ```
//!
//! The flag bit is cleared before the coordinate bytes are read as an
//! integer, so it never leaks into the numeric value. Constructors reject a
//! coordinate whose own high bit would collide with the flag.

use core::fmt;

use num_bigint::BigUint;

use super::uint::LeUint;
use crate::config::{CodecLimits, FQ2_WIDTH, FQ_WIDTH};
use crate::ser::flags::{flag_bit, overlay_flag, take_flag};
use crate::ser::{
    read_bool, write_bool, BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, SerKind,
    Sequence,
};

/// Base-field element of the pairing curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fq {
    value: LeUint<FQ_WIDTH>,
}

impl Fq {
    /// The value zero.
    pub const ZERO: Self = Self::new(LeUint::ZERO);

    /// Wraps a fixed-width integer.
    pub const fn new(value: LeUint<FQ_WIDTH>) -> Self {
        Self { value }
    }

    /// Builds an element from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self::new(LeUint::from_u64(value))
    }

    /// Builds an element from an integer that fits in 48 bytes.
    pub fn from_biguint(value: &BigUint) -> CodecResult<Self> {
        LeUint::from_biguint(value).map(Self::new)
    }

    /// Parses a decimal literal.
    pub fn from_decimal(text: &str) -> CodecResult<Self> {
        LeUint::from_decimal(text, SerKind::BaseField).map(Self::new)
    }

    /// Returns the underlying fixed-width integer.
    pub fn value(&self) -> LeUint<FQ_WIDTH> {
        self.value
    }

    /// Converts to an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        self.value.to_biguint()
    }

    fn collides_with_flag(&self) -> bool {
        flag_bit(self.value.as_le_bytes())
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq({})", self.value)
    }
}

impl BinaryCodec for Fq {
    const KIND: SerKind = SerKind::BaseField;
    const MIN_ENCODED_LEN: usize = FQ_WIDTH;

    fn encoded_len(&self) -> usize {
        FQ_WIDTH
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.value.as_le_bytes());
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        let bytes = cursor.read_array::<FQ_WIDTH>(SerKind::BaseField, "value")?;
        Ok(Self::new(LeUint::from_le_bytes(bytes)))
    }
}

impl FixedWidth for Fq {
    const WIDTH: usize = FQ_WIDTH;
}

/// Compressed affine point on G1: the x-coordinate plus one flag bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct G1Affine {
    x: Fq,
    flags: bool,
}

impl G1Affine {
    /// Builds a point, rejecting an `x` whose high bit is occupied.
    pub fn new(x: Fq, flags: bool) -> CodecResult<Self> {
        if x.collides_with_flag() {
            return Err(CodecError::invalid_value(SerKind::G1, "x"));
        }
        Ok(Self { x, flags })
    }

    /// The x-coordinate.
    pub fn x(&self) -> &Fq {
        &self.x
    }

    /// The flag bit.
    pub fn flags(&self) -> bool {
        self.flags
    }
}

impl BinaryCodec for G1Affine {
    const KIND: SerKind = SerKind::G1;
    const MIN_ENCODED_LEN: usize = FQ_WIDTH;

    fn encoded_len(&self) -> usize {
        FQ_WIDTH
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        let mut bytes = self.x.value.to_le_bytes();
        overlay_flag(&mut bytes, self.flags);
        out.extend_from_slice(&bytes);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        let mut bytes = cursor.read_array::<FQ_WIDTH>(SerKind::G1, "x")?;
        let flags = take_flag(&mut bytes);
        Ok(Self {
            x: Fq::new(LeUint::from_le_bytes(bytes)),
            flags,
        })
    }
}

impl FixedWidth for G1Affine {
    const WIDTH: usize = FQ_WIDTH;
}

/// Element of the quadratic extension `c0 + c1 * u`, carrying one flag bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fq2 {
    c0: Fq,
    c1: Fq,
    flags: bool,
}

impl Fq2 {
    /// Builds an element, rejecting a `c1` whose high bit is occupied.
    pub fn new(c0: Fq, c1: Fq, flags: bool) -> CodecResult<Self> {
        if c1.collides_with_flag() {
            return Err(CodecError::invalid_value(SerKind::Fq2, "c1"));
        }
        Ok(Self { c0, c1, flags })
    }

    /// Real coefficient.
    pub fn c0(&self) -> &Fq {
        &self.c0
    }

    /// Imaginary coefficient.
    pub fn c1(&self) -> &Fq {
        &self.c1
    }

    /// The flag bit.
    pub fn flags(&self) -> bool {
        self.flags
    }
}

impl BinaryCodec for Fq2 {
    const KIND: SerKind = SerKind::Fq2;
    const MIN_ENCODED_LEN: usize = FQ2_WIDTH;

    fn encoded_len(&self) -> usize {
        FQ2_WIDTH
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        let mut bytes = [0u8; FQ2_WIDTH];
        bytes[..FQ_WIDTH].copy_from_slice(self.c0.value.as_le_bytes());
        bytes[FQ_WIDTH..].copy_from_slice(self.c1.value.as_le_bytes());
        overlay_flag(&mut bytes, self.flags);
        out.extend_from_slice(&bytes);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        let mut bytes = cursor.read_array::<FQ2_WIDTH>(SerKind::Fq2, "coefficients")?;
        let flags = take_flag(&mut bytes);
        let mut coefficients = ByteReader::new(&bytes);
        let c0 = Fq::decode(&mut coefficients)?;
        let c1 = Fq::decode(&mut coefficients)?;
        Ok(Self { c0, c1, flags })
    }
}

impl FixedWidth for Fq2 {
    const WIDTH: usize = FQ2_WIDTH;
}

/// Compressed affine point on G2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct G2Affine {
    x: Fq2,
}

impl G2Affine {
    /// Wraps the x-coordinate.
    pub const fn new(x: Fq2) -> Self {
        Self { x }
    }

    /// The x-coordinate.
    pub fn x(&self) -> &Fq2 {
        &self.x
    }
}

impl BinaryCodec for G2Affine {
    const KIND: SerKind = SerKind::G2;
    const MIN_ENCODED_LEN: usize = FQ2_WIDTH;

    fn encoded_len(&self) -> usize {
        FQ2_WIDTH
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.x.encode_into(out);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        Fq2::decode(cursor).map(Self::new)
    }
}

impl FixedWidth for G2Affine {
    const WIDTH: usize = FQ2_WIDTH;
}

/// One line-function coefficient triple of a prepared G2 point.
pub type EllCoeff = (Fq2, Fq2, Fq2);

/// G2 point prepared for pairing: ordered line coefficients and an
/// infinity flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct G2Prepared {
    ell_coeffs: Sequence<EllCoeff, u64>,
    infinity: bool,
}

impl G2Prepared {
    /// Builds a prepared point; coefficient order is preserved.
    pub fn new(ell_coeffs: Vec<EllCoeff>, infinity: bool) -> CodecResult<Self> {
        Ok(Self {
            ell_coeffs: Sequence::new(ell_coeffs)?,
            infinity,
        })
    }

    /// Line coefficients in order.
    pub fn ell_coeffs(&self) -> &[EllCoeff] {
        self.ell_coeffs.as_slice()
    }

    /// Whether the point is the point at infinity.
    pub fn infinity(&self) -> bool {
        self.infinity
    }

    /// Decodes with an explicit bound on the coefficient count.
    pub fn decode_bounded(cursor: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        cursor.atomic(|scratch| {
            let ell_coeffs = Sequence::decode_bounded(scratch, limits)?;
            let infinity = read_bool(scratch, SerKind::G2Prepared, "infinity")?;
            Ok(Self {
                ell_coeffs,
                infinity,
            })
        })
    }
}

impl BinaryCodec for G2Prepared {
    const KIND: SerKind = SerKind::G2Prepared;
    const MIN_ENCODED_LEN: usize = <Sequence<EllCoeff, u64>>::MIN_ENCODED_LEN + 1;

    fn encoded_len(&self) -> usize {
        self.ell_coeffs.encoded_len() + 1
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.ell_coeffs.encode_into(out);
        write_bool(out, self.infinity);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        Self::decode_bounded(cursor, &CodecLimits::default())
    }
}
