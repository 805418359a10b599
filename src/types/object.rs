//! Identifiers and fixed-size objects with a checksummed text form.
//!
//! Both families are opaque byte payloads of a per-kind size, tagged in text
//! with a per-kind human-readable prefix. The prefix and size are constants of
//! the kind marker, never runtime inputs.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{IDENTIFIER_PREFIX_LEN, IDENTIFIER_SIZE};
use crate::ser::{BinaryCodec, ByteReader, CodecError, CodecResult, FixedWidth, SerKind};
use crate::text::{Bech32Codec, Bech32m, TextCodec};

/// Compile-time description of an object kind.
pub trait ObjectKind: 'static {
    /// Human-readable prefix used in the text form.
    const PREFIX: &'static str;
    /// Exact payload size in bytes.
    const SIZE: usize;
    /// Type name used in debug output.
    const NAME: &'static str;
    /// Error context for this family.
    const KIND: SerKind;
}

/// Opaque payload of `K::SIZE` bytes.
///
/// The checksummed text form is computed once at construction. Equality and
/// hashing only look at the raw bytes.
pub struct Object<K: ObjectKind> {
    bytes: Box<[u8]>,
    text: String,
    kind: PhantomData<fn() -> K>,
}

impl<K: ObjectKind> Object<K> {
    /// Wraps `bytes`, which must be exactly `K::SIZE` long.
    pub fn new(bytes: Vec<u8>) -> CodecResult<Self> {
        Self::new_with(&Bech32m, bytes)
    }

    /// Same as [`Object::new`] with an explicit text codec.
    pub fn new_with<C: Bech32Codec + ?Sized>(codec: &C, bytes: Vec<u8>) -> CodecResult<Self> {
        if bytes.len() != K::SIZE {
            return Err(CodecError::length_mismatch(
                K::KIND,
                "payload",
                K::SIZE,
                bytes.len(),
            ));
        }
        let text = codec.encode(K::PREFIX, &bytes)?;
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            text,
            kind: PhantomData,
        })
    }

    /// Parses the text form with an explicit text codec.
    pub fn from_text_with<C: Bech32Codec + ?Sized>(codec: &C, text: &str) -> CodecResult<Self> {
        let (prefix, payload) = codec.decode(text)?;
        if prefix != K::PREFIX {
            tracing::debug!(expected = K::PREFIX, found = %prefix, "text prefix mismatch");
            return Err(CodecError::prefix_mismatch(K::PREFIX, prefix));
        }
        if payload.len() != K::SIZE {
            return Err(CodecError::length_mismatch(
                K::KIND,
                "payload",
                K::SIZE,
                payload.len(),
            ));
        }
        Self::new_with(codec, payload)
    }

    /// Borrows the raw payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the object, returning the raw payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    /// Borrows the cached text form.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<K: ObjectKind> Clone for Object<K> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            text: self.text.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: ObjectKind> PartialEq for Object<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<K: ObjectKind> Eq for Object<K> {}

impl<K: ObjectKind> Hash for Object<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<K: ObjectKind> fmt::Display for Object<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<K: ObjectKind> fmt::Debug for Object<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.text)
    }
}

impl<K: ObjectKind> AsRef<[u8]> for Object<K> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<K: ObjectKind> TextCodec for Object<K> {
    fn to_text(&self) -> String {
        self.text.clone()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        Self::from_text_with(&Bech32m, text)
    }
}

impl<K: ObjectKind> FromStr for Object<K> {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl<K: ObjectKind> BinaryCodec for Object<K> {
    const KIND: SerKind = K::KIND;
    const MIN_ENCODED_LEN: usize = K::SIZE;

    fn encoded_len(&self) -> usize {
        K::SIZE
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.bytes);
    }

    fn decode(cursor: &mut ByteReader<'_>) -> CodecResult<Self> {
        cursor.atomic(|scratch| {
            let bytes = scratch.read_vec(K::KIND, "payload", K::SIZE)?;
            Self::new(bytes)
        })
    }
}

impl<K: ObjectKind> FixedWidth for Object<K> {
    const WIDTH: usize = K::SIZE;
}

impl<K: ObjectKind> Serialize for Object<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de, K: ObjectKind> Deserialize<'de> for Object<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(serde::de::Error::custom)
    }
}

macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $prefix:literal) => {
        #[doc = concat!("Kind marker for [`", stringify!($name), "`].")]
        pub enum $kind {}

        const _: () = assert!($prefix.len() == IDENTIFIER_PREFIX_LEN);

        impl ObjectKind for $kind {
            const PREFIX: &'static str = $prefix;
            const SIZE: usize = IDENTIFIER_SIZE;
            const NAME: &'static str = stringify!($name);
            const KIND: SerKind = SerKind::Identifier;
        }

        $(#[$doc])*
        pub type $name = Object<$kind>;
    };
}

macro_rules! object {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $prefix:literal, $size:expr) => {
        #[doc = concat!("Kind marker for [`", stringify!($name), "`].")]
        pub enum $kind {}

        const _: () = assert!(!$prefix.is_empty() && $size > 0);

        impl ObjectKind for $kind {
            const PREFIX: &'static str = $prefix;
            const SIZE: usize = $size;
            const NAME: &'static str = stringify!($name);
            const KIND: SerKind = SerKind::Object;
        }

        $(#[$doc])*
        pub type $name = Object<$kind>;
    };
}

identifier!(
    /// Hash of a block header.
    BlockHash, BlockHashKind, "ab"
);
identifier!(
    /// Root of the global state tree.
    StateRoot, StateRootKind, "ar"
);
identifier!(
    /// Transaction identifier.
    TransactionId, TransactionIdKind, "at"
);
identifier!(
    /// Transition identifier.
    TransitionId, TransitionIdKind, "as"
);
object!(
    /// Account address.
    Address, AddressKind, "aleo", 32
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_text_codec() {
        struct Upper;
        impl Bech32Codec for Upper {
            fn encode(&self, hrp: &str, payload: &[u8]) -> CodecResult<String> {
                Ok(Bech32m.encode(hrp, payload)?.to_uppercase())
            }
            fn decode(&self, text: &str) -> CodecResult<(String, Vec<u8>)> {
                Bech32m.decode(text)
            }
        }

        let a = BlockHash::new(vec![9u8; 32]).unwrap();
        let b = BlockHash::new_with(&Upper, vec![9u8; 32]).unwrap();
        assert_ne!(a.as_str(), b.as_str());
        assert_eq!(a, b);
    }

    #[test]
    fn debug_names_the_kind() {
        let address = Address::new(vec![0u8; 32]).unwrap();
        assert_eq!(
            format!("{address:?}"),
            "Address(aleo1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq3ljyzc)"
        );
    }
}
