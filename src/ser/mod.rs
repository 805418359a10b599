//! Canonical binary codec layer.
//!
//! Every primitive encodes to a little-endian, fixed-width layout and decodes
//! from a shared [`ByteReader`]. Composite types decode their fields in order
//! from the same cursor; a failed decode never moves it.

mod codec;
mod collections;
mod cursor;
mod error;
pub mod flags;
mod ints;

pub use codec::{ensure_consumed, BinaryCodec, FixedWidth};
pub use collections::Sequence;
pub use cursor::ByteReader;
pub use error::{CodecError, CodecResult, SerKind};
pub use ints::{
    read_bool, read_u16, read_u32, read_u64, read_u8, write_bool, write_u16, write_u32, write_u64,
    write_u8, LengthPrefix,
};
