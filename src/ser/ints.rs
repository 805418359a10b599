use num_traits::{FromPrimitive, ToPrimitive};

use super::codec::{BinaryCodec, FixedWidth};
use super::cursor::ByteReader;
use super::error::{CodecError, CodecResult, SerKind};

/// Encodes a `u8` into the output buffer.
pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Encodes a `u16` in little-endian order.
pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u32` in little-endian order.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u64` in little-endian order.
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Writes a boolean flag as a single byte (`0` or `1`).
pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    write_u8(out, value as u8);
}

/// Reads a `u8` from the cursor.
pub fn read_u8(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> CodecResult<u8> {
    Ok(cursor.read_array::<1>(kind, field)?[0])
}

/// Reads a `u16` in little-endian order.
pub fn read_u16(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> CodecResult<u16> {
    let bytes = cursor.read_array::<2>(kind, field)?;
    Ok(u16::from_le_bytes(bytes))
}

/// Reads a `u32` in little-endian order.
pub fn read_u32(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> CodecResult<u32> {
    let bytes = cursor.read_array::<4>(kind, field)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Reads a `u64` in little-endian order.
pub fn read_u64(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> CodecResult<u64> {
    let bytes = cursor.read_array::<8>(kind, field)?;
    Ok(u64::from_le_bytes(bytes))
}

/// Reads a boolean flag encoded as `0` or `1`.
///
/// Any other byte is rejected without consuming it.
pub fn read_bool(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> CodecResult<bool> {
    cursor.atomic(|scratch| match read_u8(scratch, kind, field)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(CodecError::invalid_value(kind, field)),
    })
}

/// Unsigned integer width usable as a sequence length prefix.
pub trait LengthPrefix: FixedWidth + Copy {
    /// Converts an element count into the prefix type, if it fits.
    fn from_len(len: usize) -> Option<Self>;

    /// Converts a decoded prefix back into an element count, if it fits.
    fn to_len(self) -> Option<usize>;
}

macro_rules! int_codec {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl BinaryCodec for $ty {
                const KIND: SerKind = SerKind::Integer;
                const MIN_ENCODED_LEN: usize = core::mem::size_of::<$ty>();

                fn encoded_len(&self) -> usize {
                    core::mem::size_of::<$ty>()
                }

                fn encode_into(&self, out: &mut Vec<u8>) {
                    $write(out, *self);
                }

                fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
                    $read(cursor, SerKind::Integer, stringify!($ty))
                }
            }

            impl FixedWidth for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
            }

            impl LengthPrefix for $ty {
                fn from_len(len: usize) -> Option<Self> {
                    <$ty as FromPrimitive>::from_usize(len)
                }

                fn to_len(self) -> Option<usize> {
                    ToPrimitive::to_usize(&self)
                }
            }
        )*
    };
}

int_codec! {
    u8 => read_u8, write_u8;
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
}

impl BinaryCodec for bool {
    const KIND: SerKind = SerKind::Integer;
    const MIN_ENCODED_LEN: usize = 1;

    fn encoded_len(&self) -> usize {
        1
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        write_bool(out, *self);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        read_bool(cursor, SerKind::Integer, "bool")
    }
}

impl FixedWidth for bool {
    const WIDTH: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bool_is_not_consumed() {
        let data = [2u8];
        let mut cursor = ByteReader::new(&data);
        let err = bool::decode(&mut cursor).expect_err("invalid flag");
        assert_eq!(err, CodecError::invalid_value(SerKind::Integer, "bool"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn length_prefix_bounds() {
        assert_eq!(<u8 as LengthPrefix>::from_len(255), Some(255u8));
        assert_eq!(<u8 as LengthPrefix>::from_len(256), None);
        assert_eq!(<u16 as LengthPrefix>::from_len(70_000), None);
        assert_eq!(LengthPrefix::to_len(7u64), Some(7usize));
    }
}
