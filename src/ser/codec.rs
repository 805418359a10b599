use super::cursor::ByteReader;
use super::error::{CodecError, CodecResult, SerKind};

/// Fails with [`CodecError::TrailingBytes`] unless the cursor is exhausted.
pub fn ensure_consumed(cursor: &ByteReader<'_>, kind: SerKind) -> CodecResult<()> {
    match cursor.remaining() {
        0 => Ok(()),
        remaining => Err(CodecError::trailing_bytes(kind, cursor.position(), remaining)),
    }
}

/// Canonical binary codec shared by every primitive.
///
/// `decode` consumes exactly the bytes belonging to one value from the front
/// of the cursor. On failure the cursor is left where it was, so callers can
/// decode a stream of heterogeneous fields from one buffer without
/// precomputed offsets.
pub trait BinaryCodec: Sized {
    /// Context marker reported in errors raised for this type.
    const KIND: SerKind;

    /// Fewest bytes any encoding of this type occupies.
    const MIN_ENCODED_LEN: usize;

    /// Number of bytes [`BinaryCodec::encode_into`] appends.
    fn encoded_len(&self) -> usize;

    /// Appends the canonical encoding to `out`.
    fn encode_into(&self, out: &mut Vec<u8>);

    /// Decodes one value from the front of the cursor.
    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self>;

    /// Returns the canonical encoding as an owned buffer.
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Decodes a value that must span the whole buffer.
    fn decode_exact(bytes: &[u8]) -> CodecResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let value = Self::decode(&mut cursor)?;
        ensure_consumed(&cursor, Self::KIND)?;
        Ok(value)
    }
}

/// Marker for codecs whose encoding always has the same width.
pub trait FixedWidth: BinaryCodec {
    /// Encoded width in bytes.
    const WIDTH: usize;
}

impl<A, B> BinaryCodec for (A, B)
where
    A: BinaryCodec,
    B: BinaryCodec,
{
    const KIND: SerKind = A::KIND;
    const MIN_ENCODED_LEN: usize = A::MIN_ENCODED_LEN + B::MIN_ENCODED_LEN;

    fn encoded_len(&self) -> usize {
        self.0.encoded_len() + self.1.encoded_len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.0.encode_into(out);
        self.1.encode_into(out);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        cursor.atomic(|scratch| Ok((A::decode(scratch)?, B::decode(scratch)?)))
    }
}

impl<A, B> FixedWidth for (A, B)
where
    A: FixedWidth,
    B: FixedWidth,
{
    const WIDTH: usize = A::WIDTH + B::WIDTH;
}

impl<A, B, C> BinaryCodec for (A, B, C)
where
    A: BinaryCodec,
    B: BinaryCodec,
    C: BinaryCodec,
{
    const KIND: SerKind = A::KIND;
    const MIN_ENCODED_LEN: usize = A::MIN_ENCODED_LEN + B::MIN_ENCODED_LEN + C::MIN_ENCODED_LEN;

    fn encoded_len(&self) -> usize {
        self.0.encoded_len() + self.1.encoded_len() + self.2.encoded_len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.0.encode_into(out);
        self.1.encode_into(out);
        self.2.encode_into(out);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        cursor.atomic(|scratch| {
            Ok((
                A::decode(scratch)?,
                B::decode(scratch)?,
                C::decode(scratch)?,
            ))
        })
    }
}

impl<A, B, C> FixedWidth for (A, B, C)
where
    A: FixedWidth,
    B: FixedWidth,
    C: FixedWidth,
{
    const WIDTH: usize = A::WIDTH + B::WIDTH + C::WIDTH;
}
