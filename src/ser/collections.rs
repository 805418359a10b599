use core::marker::PhantomData;

use super::codec::BinaryCodec;
use super::cursor::ByteReader;
use super::error::{CodecError, CodecResult, SerKind};
use super::ints::LengthPrefix;
use crate::config::{CodecLimits, DEFAULT_CODEC_LIMITS};

/// Ordered, length-prefixed sequence of elements.
///
/// The wire form is the element count encoded with the prefix width `L`
/// followed by every element's own encoding in order. The count always fits
/// `L`; constructors and [`Sequence::push`] reject anything longer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T, L = u64> {
    items: Vec<T>,
    prefix: PhantomData<L>,
}

impl<T, L: LengthPrefix> Sequence<T, L> {
    /// Creates an empty sequence.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            prefix: PhantomData,
        }
    }

    /// Wraps `items`, checking that the count fits the prefix width.
    pub fn new(items: Vec<T>) -> CodecResult<Self> {
        if L::from_len(items.len()).is_none() {
            return Err(CodecError::invalid_value(SerKind::Sequence, "count"));
        }
        Ok(Self {
            items,
            prefix: PhantomData,
        })
    }

    /// Appends an element.
    pub fn push(&mut self, item: T) -> CodecResult<()> {
        if L::from_len(self.items.len() + 1).is_none() {
            return Err(CodecError::invalid_value(SerKind::Sequence, "count"));
        }
        self.items.push(item);
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning the elements.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: BinaryCodec, L: LengthPrefix> Sequence<T, L> {
    /// Decodes a sequence, rejecting declared counts above `limits`.
    ///
    /// A count the remaining bytes cannot hold is a length mismatch whatever
    /// the limit; only a count the buffer could satisfy is rejected as
    /// invalid. The cursor is only advanced when the count and every element
    /// decoded.
    pub fn decode_bounded(cursor: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        cursor.atomic(|scratch| {
            let declared = L::decode(scratch)?;
            let remaining = scratch.remaining();
            let count = declared.to_len().ok_or_else(|| {
                CodecError::length_mismatch(SerKind::Sequence, "elements", usize::MAX, remaining)
            })?;
            if count > limits.max_sequence_len {
                let needed = count.saturating_mul(T::MIN_ENCODED_LEN);
                if needed > remaining {
                    return Err(CodecError::length_mismatch(
                        SerKind::Sequence,
                        "elements",
                        needed,
                        remaining,
                    ));
                }
                tracing::debug!(
                    count,
                    max = limits.max_sequence_len,
                    "sequence count exceeds limit"
                );
                return Err(CodecError::invalid_value(SerKind::Sequence, "count"));
            }
            let mut items = Vec::with_capacity(count.min(scratch.remaining()));
            for _ in 0..count {
                items.push(T::decode(scratch)?);
            }
            Ok(Self {
                items,
                prefix: PhantomData,
            })
        })
    }
}

impl<T: BinaryCodec, L: LengthPrefix> BinaryCodec for Sequence<T, L> {
    const KIND: SerKind = SerKind::Sequence;
    const MIN_ENCODED_LEN: usize = L::WIDTH;

    fn encoded_len(&self) -> usize {
        L::WIDTH + self.items.iter().map(T::encoded_len).sum::<usize>()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        // `new` and `push` keep the count within `L`.
        if let Some(count) = L::from_len(self.items.len()) {
            count.encode_into(out);
        }
        for item in &self.items {
            item.encode_into(out);
        }
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        Self::decode_bounded(cursor, &DEFAULT_CODEC_LIMITS)
    }
}

impl<T, L: LengthPrefix> Default for Sequence<T, L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'s, T, L> IntoIterator for &'s Sequence<T, L> {
    type Item = &'s T;
    type IntoIter = core::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_count_then_elements() {
        let seq: Sequence<u16, u8> = Sequence::new(vec![0x0102, 0x0304]).unwrap();
        assert_eq!(seq.encode(), vec![2, 0x02, 0x01, 0x04, 0x03]);
        assert_eq!(seq.encoded_len(), 5);
    }

    #[test]
    fn exhausted_cursor_is_length_mismatch() {
        // Declares three u16 elements but carries only one and a half.
        let bytes = [3u8, 0xaa, 0xbb, 0xcc];
        let mut cursor = ByteReader::new(&bytes);
        let err = Sequence::<u16, u8>::decode(&mut cursor).expect_err("short");
        assert!(matches!(err, CodecError::LengthMismatch { .. }));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn limit_rejects_before_reading_elements() {
        // Five declared u8 elements, all present.
        let bytes = [5u8, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5];
        let mut cursor = ByteReader::new(&bytes);
        let limits = CodecLimits::new(4);
        let err = Sequence::<u8, u64>::decode_bounded(&mut cursor, &limits).expect_err("limit");
        assert_eq!(err, CodecError::invalid_value(SerKind::Sequence, "count"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn unsatisfiable_count_is_length_mismatch_even_above_limit() {
        let mut bytes = ((1u64 << 20) + 1).to_le_bytes().to_vec();
        bytes.push(0);
        let mut cursor = ByteReader::new(&bytes);
        let err = Sequence::<u8, u64>::decode(&mut cursor).expect_err("one byte left");
        assert_eq!(
            err,
            CodecError::length_mismatch(SerKind::Sequence, "elements", (1 << 20) + 1, 1)
        );
        assert_eq!(cursor.position(), 0);

        let mut cursor = ByteReader::new(&bytes);
        let err = Sequence::<u8, u64>::decode_bounded(&mut cursor, &CodecLimits::new(0))
            .expect_err("limit with too few bytes");
        assert!(matches!(err, CodecError::LengthMismatch { .. }));
    }

    #[test]
    fn push_respects_prefix_width() {
        let mut seq: Sequence<u8, u8> = Sequence::new(vec![0; 255]).unwrap();
        assert!(seq.push(1).is_err());
        assert_eq!(seq.len(), 255);
        assert!(Sequence::<u8, u8>::new(vec![0; 256]).is_err());
    }
}
