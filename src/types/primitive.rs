//! Runtime-tagged primitives.
//!
//! Statically typed callers use the concrete types directly. Tooling that
//! only learns the expected type at runtime (the CLI, generic record
//! inspectors) goes through [`PrimitiveKind`] and [`Primitive`]; asking a
//! value for a kind it is not yields [`CodecError::TypeMismatch`].

use core::fmt;
use core::str::FromStr;

use super::numeric::{Field, Group, Scalar};
use super::object::{Address, BlockHash, StateRoot, TransactionId, TransitionId};
use super::pairing::{Fq, Fq2, G1Affine, G2Affine, G2Prepared};
use crate::arith::{FieldArithmetic, FieldOp};
use crate::ser::{BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, SerKind};
use crate::text::TextCodec;

/// Every primitive type known to the codec layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Block hash identifier.
    BlockHash,
    /// State root identifier.
    StateRoot,
    /// Transaction identifier.
    TransactionId,
    /// Transition identifier.
    TransitionId,
    /// Account address.
    Address,
    /// Field element.
    Field,
    /// Group element.
    Group,
    /// Scalar element.
    Scalar,
    /// Pairing base-field element.
    Fq,
    /// Compressed G1 point.
    G1Affine,
    /// Quadratic extension element.
    Fq2,
    /// Compressed G2 point.
    G2Affine,
    /// Prepared G2 point.
    G2Prepared,
}

impl PrimitiveKind {
    /// All kinds in declaration order.
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::BlockHash,
        PrimitiveKind::StateRoot,
        PrimitiveKind::TransactionId,
        PrimitiveKind::TransitionId,
        PrimitiveKind::Address,
        PrimitiveKind::Field,
        PrimitiveKind::Group,
        PrimitiveKind::Scalar,
        PrimitiveKind::Fq,
        PrimitiveKind::G1Affine,
        PrimitiveKind::Fq2,
        PrimitiveKind::G2Affine,
        PrimitiveKind::G2Prepared,
    ];

    /// Snake-case name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::BlockHash => "block_hash",
            PrimitiveKind::StateRoot => "state_root",
            PrimitiveKind::TransactionId => "transaction_id",
            PrimitiveKind::TransitionId => "transition_id",
            PrimitiveKind::Address => "address",
            PrimitiveKind::Field => "field",
            PrimitiveKind::Group => "group",
            PrimitiveKind::Scalar => "scalar",
            PrimitiveKind::Fq => "fq",
            PrimitiveKind::G1Affine => "g1_affine",
            PrimitiveKind::Fq2 => "fq2",
            PrimitiveKind::G2Affine => "g2_affine",
            PrimitiveKind::G2Prepared => "g2_prepared",
        }
    }

    /// Encoded width, or `None` for variable-length kinds.
    pub const fn width(self) -> Option<usize> {
        match self {
            PrimitiveKind::BlockHash => Some(BlockHash::WIDTH),
            PrimitiveKind::StateRoot => Some(StateRoot::WIDTH),
            PrimitiveKind::TransactionId => Some(TransactionId::WIDTH),
            PrimitiveKind::TransitionId => Some(TransitionId::WIDTH),
            PrimitiveKind::Address => Some(Address::WIDTH),
            PrimitiveKind::Field => Some(Field::WIDTH),
            PrimitiveKind::Group => Some(Group::WIDTH),
            PrimitiveKind::Scalar => Some(Scalar::WIDTH),
            PrimitiveKind::Fq => Some(Fq::WIDTH),
            PrimitiveKind::G1Affine => Some(G1Affine::WIDTH),
            PrimitiveKind::Fq2 => Some(Fq2::WIDTH),
            PrimitiveKind::G2Affine => Some(G2Affine::WIDTH),
            PrimitiveKind::G2Prepared => None,
        }
    }

    /// Whether the kind has a human-readable text form.
    pub const fn has_text(self) -> bool {
        !matches!(
            self,
            PrimitiveKind::G1Affine
                | PrimitiveKind::Fq2
                | PrimitiveKind::G2Affine
                | PrimitiveKind::G2Prepared
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CodecError::parse(SerKind::Primitive, name, "unknown primitive kind"))
    }
}

/// A value of any primitive kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// Block hash identifier.
    BlockHash(BlockHash),
    /// State root identifier.
    StateRoot(StateRoot),
    /// Transaction identifier.
    TransactionId(TransactionId),
    /// Transition identifier.
    TransitionId(TransitionId),
    /// Account address.
    Address(Address),
    /// Field element.
    Field(Field),
    /// Group element.
    Group(Group),
    /// Scalar element.
    Scalar(Scalar),
    /// Pairing base-field element.
    Fq(Fq),
    /// Compressed G1 point.
    G1Affine(G1Affine),
    /// Quadratic extension element.
    Fq2(Fq2),
    /// Compressed G2 point.
    G2Affine(G2Affine),
    /// Prepared G2 point.
    G2Prepared(G2Prepared),
}

impl Primitive {
    /// Kind of the wrapped value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::BlockHash(_) => PrimitiveKind::BlockHash,
            Primitive::StateRoot(_) => PrimitiveKind::StateRoot,
            Primitive::TransactionId(_) => PrimitiveKind::TransactionId,
            Primitive::TransitionId(_) => PrimitiveKind::TransitionId,
            Primitive::Address(_) => PrimitiveKind::Address,
            Primitive::Field(_) => PrimitiveKind::Field,
            Primitive::Group(_) => PrimitiveKind::Group,
            Primitive::Scalar(_) => PrimitiveKind::Scalar,
            Primitive::Fq(_) => PrimitiveKind::Fq,
            Primitive::G1Affine(_) => PrimitiveKind::G1Affine,
            Primitive::Fq2(_) => PrimitiveKind::Fq2,
            Primitive::G2Affine(_) => PrimitiveKind::G2Affine,
            Primitive::G2Prepared(_) => PrimitiveKind::G2Prepared,
        }
    }

    /// Decodes a value of `kind` from the front of the cursor.
    pub fn decode(kind: PrimitiveKind, cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(match kind {
            PrimitiveKind::BlockHash => Primitive::BlockHash(BlockHash::decode(cursor)?),
            PrimitiveKind::StateRoot => Primitive::StateRoot(StateRoot::decode(cursor)?),
            PrimitiveKind::TransactionId => {
                Primitive::TransactionId(TransactionId::decode(cursor)?)
            }
            PrimitiveKind::TransitionId => Primitive::TransitionId(TransitionId::decode(cursor)?),
            PrimitiveKind::Address => Primitive::Address(Address::decode(cursor)?),
            PrimitiveKind::Field => Primitive::Field(Field::decode(cursor)?),
            PrimitiveKind::Group => Primitive::Group(Group::decode(cursor)?),
            PrimitiveKind::Scalar => Primitive::Scalar(Scalar::decode(cursor)?),
            PrimitiveKind::Fq => Primitive::Fq(Fq::decode(cursor)?),
            PrimitiveKind::G1Affine => Primitive::G1Affine(G1Affine::decode(cursor)?),
            PrimitiveKind::Fq2 => Primitive::Fq2(Fq2::decode(cursor)?),
            PrimitiveKind::G2Affine => Primitive::G2Affine(G2Affine::decode(cursor)?),
            PrimitiveKind::G2Prepared => Primitive::G2Prepared(G2Prepared::decode(cursor)?),
        })
    }

    /// Decodes a value of `kind` that must span the whole buffer.
    pub fn decode_exact(kind: PrimitiveKind, bytes: &[u8]) -> CodecResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let value = Self::decode(kind, &mut cursor)?;
        crate::ser::ensure_consumed(&cursor, SerKind::Primitive)?;
        Ok(value)
    }

    /// Canonical binary encoding of the wrapped value.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Primitive::BlockHash(value) => value.encode(),
            Primitive::StateRoot(value) => value.encode(),
            Primitive::TransactionId(value) => value.encode(),
            Primitive::TransitionId(value) => value.encode(),
            Primitive::Address(value) => value.encode(),
            Primitive::Field(value) => value.encode(),
            Primitive::Group(value) => value.encode(),
            Primitive::Scalar(value) => value.encode(),
            Primitive::Fq(value) => value.encode(),
            Primitive::G1Affine(value) => value.encode(),
            Primitive::Fq2(value) => value.encode(),
            Primitive::G2Affine(value) => value.encode(),
            Primitive::G2Prepared(value) => value.encode(),
        }
    }

    /// Text form of the wrapped value. Curve points have none.
    pub fn to_text(&self) -> CodecResult<String> {
        match self {
            Primitive::BlockHash(value) => Ok(value.to_text()),
            Primitive::StateRoot(value) => Ok(value.to_text()),
            Primitive::TransactionId(value) => Ok(value.to_text()),
            Primitive::TransitionId(value) => Ok(value.to_text()),
            Primitive::Address(value) => Ok(value.to_text()),
            Primitive::Field(value) => Ok(value.to_text()),
            Primitive::Group(value) => Ok(value.to_text()),
            Primitive::Scalar(value) => Ok(value.to_text()),
            Primitive::Fq(value) => Ok(value.to_string()),
            other => Err(CodecError::type_mismatch(
                "text-encodable primitive",
                other.kind().name(),
            )),
        }
    }

    /// Parses the text form of `kind`.
    pub fn from_text(kind: PrimitiveKind, text: &str) -> CodecResult<Self> {
        Ok(match kind {
            PrimitiveKind::BlockHash => Primitive::BlockHash(BlockHash::from_text(text)?),
            PrimitiveKind::StateRoot => Primitive::StateRoot(StateRoot::from_text(text)?),
            PrimitiveKind::TransactionId => {
                Primitive::TransactionId(TransactionId::from_text(text)?)
            }
            PrimitiveKind::TransitionId => {
                Primitive::TransitionId(TransitionId::from_text(text)?)
            }
            PrimitiveKind::Address => Primitive::Address(Address::from_text(text)?),
            PrimitiveKind::Field => Primitive::Field(Field::from_text(text)?),
            PrimitiveKind::Group => Primitive::Group(Group::from_text(text)?),
            PrimitiveKind::Scalar => Primitive::Scalar(Scalar::from_text(text)?),
            PrimitiveKind::Fq => Primitive::Fq(Fq::from_decimal(text)?),
            other => {
                return Err(CodecError::type_mismatch(
                    "text-encodable primitive",
                    other.name(),
                ))
            }
        })
    }

    /// Borrows the value as a [`Field`].
    pub fn as_field(&self) -> CodecResult<&Field> {
        match self {
            Primitive::Field(value) => Ok(value),
            other => Err(CodecError::type_mismatch(
                PrimitiveKind::Field.name(),
                other.kind().name(),
            )),
        }
    }

    /// Applies a field operation; both operands must be fields.
    pub fn field_op<B: FieldArithmetic + ?Sized>(
        &self,
        op: FieldOp,
        rhs: &Primitive,
        backend: &B,
    ) -> CodecResult<Primitive> {
        let lhs = self.as_field()?;
        let rhs = rhs.as_field()?;
        lhs.apply(op, rhs, backend).map(Primitive::Field)
    }
}

macro_rules! primitive_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Primitive {
                fn from(value: $variant) -> Self {
                    Primitive::$variant(value)
                }
            }
        )*
    };
}

primitive_from!(
    BlockHash,
    StateRoot,
    TransactionId,
    TransitionId,
    Address,
    Field,
    Group,
    Scalar,
    Fq,
    G1Affine,
    Fq2,
    G2Affine,
    G2Prepared,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_roundtrip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.name().parse::<PrimitiveKind>().unwrap(), kind);
        }
        assert!("point".parse::<PrimitiveKind>().is_err());
    }

    #[test]
    fn widths_follow_layout() {
        assert_eq!(PrimitiveKind::Address.width(), Some(32));
        assert_eq!(PrimitiveKind::Fq.width(), Some(48));
        assert_eq!(PrimitiveKind::G2Affine.width(), Some(96));
        assert_eq!(PrimitiveKind::G2Prepared.width(), None);
    }
}
