use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32m as Bech32mChecksum, Hrp};

use crate::ser::{CodecError, CodecResult};

/// Checksummed, prefix-tagged text encoding service.
///
/// Implementations must be deterministic: encoding the same prefix and payload
/// always yields the same string, and decoding that string yields the same
/// prefix and payload back.
pub trait Bech32Codec {
    /// Encodes `payload` under the human-readable prefix `hrp`.
    fn encode(&self, hrp: &str, payload: &[u8]) -> CodecResult<String>;

    /// Splits a checksummed string into its lowercase prefix and payload.
    fn decode(&self, text: &str) -> CodecResult<(String, Vec<u8>)>;
}

/// Bech32m (BIP-350) codec backed by the `bech32` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bech32m;

impl Bech32Codec for Bech32m {
    fn encode(&self, hrp: &str, payload: &[u8]) -> CodecResult<String> {
        let hrp = Hrp::parse(hrp).map_err(CodecError::encoding)?;
        bech32::encode::<Bech32mChecksum>(hrp, payload).map_err(CodecError::encoding)
    }

    fn decode(&self, text: &str) -> CodecResult<(String, Vec<u8>)> {
        let checked =
            CheckedHrpstring::new::<Bech32mChecksum>(text).map_err(CodecError::encoding)?;
        let hrp = checked.hrp().to_lowercase();
        let payload = checked.byte_iter().collect();
        Ok((hrp, payload))
    }
}
