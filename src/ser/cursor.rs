use super::error::{CodecError, CodecResult, SerKind};

/// Cursor over a shared byte buffer.
///
/// Decoders consume bytes strictly left to right. A read either returns a
/// view over exactly the requested bytes and advances the position, or fails
/// and leaves the position untouched. Composite decoders wrap their reads in
/// [`ByteReader::atomic`] so a failure halfway through never leaves the
/// cursor partially advanced.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new cursor over the provided byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Returns the unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.offset.min(self.bytes.len())..]
    }

    /// Reads exactly `len` bytes from the cursor.
    pub fn read_exact(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> CodecResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            tracing::trace!(%kind, field, len, remaining, "cursor under-run");
            return Err(CodecError::length_mismatch(kind, field, len, remaining));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads a fixed-size byte array from the cursor.
    pub fn read_array<const N: usize>(
        &mut self,
        kind: SerKind,
        field: &'static str,
    ) -> CodecResult<[u8; N]> {
        let bytes = self.read_exact(N, kind, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads an owned byte vector of the requested length.
    pub fn read_vec(
        &mut self,
        kind: SerKind,
        field: &'static str,
        len: usize,
    ) -> CodecResult<Vec<u8>> {
        let slice = self.read_exact(len, kind, field)?;
        Ok(slice.to_vec())
    }

    /// Runs a multi-step decode against a scratch copy of the cursor and
    /// commits the new position only if every step succeeded.
    pub fn atomic<T, F>(&mut self, decode: F) -> CodecResult<T>
    where
        F: FnOnce(&mut ByteReader<'a>) -> CodecResult<T>,
    {
        let mut scratch = *self;
        let value = decode(&mut scratch)?;
        *self = scratch;
        Ok(value)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteReader::new(bytes)
    }
}
