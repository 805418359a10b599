//! Primitive value types.
//!
//! * [`object`] – identifiers and fixed-size objects with Bech32m text.
//! * [`numeric`] – field, group and scalar elements with suffixed decimal text.
//! * [`pairing`] – base-field elements and compressed or prepared curve points.
//! * [`primitive`] – runtime-tagged dispatch over all of the above.

pub mod numeric;
pub mod object;
pub mod pairing;
pub mod primitive;
pub mod uint;

pub use numeric::{Field, FieldKind, Group, GroupKind, Numeric, NumericKind, Scalar, ScalarKind};
pub use object::{
    Address, AddressKind, BlockHash, BlockHashKind, Object, ObjectKind, StateRoot, StateRootKind,
    TransactionId, TransactionIdKind, TransitionId, TransitionIdKind,
};
pub use pairing::{EllCoeff, Fq, Fq2, G1Affine, G2Affine, G2Prepared};
pub use primitive::{Primitive, PrimitiveKind};
pub use uint::LeUint;
