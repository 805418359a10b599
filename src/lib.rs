//! Binary and text codecs for the primitive types carried by Aleo blocks
//! and transactions.
//!
//! The crate is organised bottom-up:
//!
//! - [`ser`] - the shared [`ser::ByteReader`] cursor, [`ser::BinaryCodec`]
//!   contract, integer codecs and length-prefixed [`ser::Sequence`]s
//! - [`text`] - the [`text::TextCodec`] contract and the Bech32m service
//! - [`types`] - identifiers, objects, numeric elements and pairing points
//! - [`arith`] - the field-arithmetic port used by [`types::Field`]
//! - [`config`] - canonical widths and decode limits
//!
//! Composite values are decoded field by field from one cursor. Each decode
//! consumes exactly its own bytes and leaves the cursor untouched on failure,
//! so a caller can walk a serialized block without precomputed offsets:
//!
//! ```
//! use aleo_primitives::ser::{BinaryCodec, ByteReader};
//! use aleo_primitives::types::{BlockHash, Field};
//!
//! let mut bytes = vec![7u8; 32];
//! bytes.extend(Field::from_u64(5).encode());
//!
//! let mut cursor = ByteReader::new(&bytes);
//! let hash = BlockHash::decode(&mut cursor).unwrap();
//! let value = Field::decode(&mut cursor).unwrap();
//! assert_eq!(hash.as_bytes(), &[7u8; 32]);
//! assert_eq!(value.to_string(), "5field");
//! assert_eq!(cursor.remaining(), 0);
//! ```

pub mod arith;
pub mod config;
pub mod ser;
pub mod text;
pub mod types;

pub use arith::{FieldArithmetic, FieldOp, ModularArithmetic};
pub use config::CodecLimits;
pub use ser::{BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, Sequence};
pub use text::TextCodec;
pub use types::{
    Address, BlockHash, Field, Fq, Fq2, G1Affine, G2Affine, G2Prepared, Group, Primitive,
    PrimitiveKind, Scalar, StateRoot, TransactionId, TransitionId,
};
