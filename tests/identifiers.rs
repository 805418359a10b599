use aleo_primitives::ser::{BinaryCodec, ByteReader, CodecError, CodecResult, SerKind};
use aleo_primitives::text::{Bech32Codec, Bech32m, TextCodec};
use aleo_primitives::types::{Address, BlockHash, StateRoot, TransactionId, TransitionId};
use insta::assert_snapshot;

const ZERO_ADDRESS: &str = "aleo1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq3ljyzc";

fn counting_bytes() -> Vec<u8> {
    (0u8..32).collect()
}

#[test]
fn block_hash_text_vector() {
    let hash = BlockHash::new(counting_bytes()).unwrap();
    assert_snapshot!(hash.to_text(), @"ab1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnzs23v9ccrydpk8qarc0sau7n6t");
    assert_eq!(BlockHash::from_text(&hash.to_text()).unwrap(), hash);
}

#[test]
fn every_identifier_kind_roundtrips_through_text() {
    let bytes = vec![7u8; 32];
    let state_root = StateRoot::new(bytes.clone()).unwrap();
    assert_eq!(
        state_root.to_text(),
        "ar1qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qursespdte"
    );
    assert_eq!(StateRoot::from_text(&state_root.to_text()).unwrap(), state_root);

    let tx = TransactionId::new(bytes.clone()).unwrap();
    assert!(tx.to_text().starts_with("at1"));
    assert_eq!(TransactionId::from_text(&tx.to_text()).unwrap(), tx);

    let transition = TransitionId::new(bytes).unwrap();
    assert!(transition.to_text().starts_with("as1"));
    assert_eq!(
        transition.to_text().parse::<TransitionId>().unwrap(),
        transition
    );
}

#[test]
fn zero_address_vector() {
    let address = Address::new(vec![0u8; 32]).unwrap();
    assert_eq!(address.to_string(), ZERO_ADDRESS);
    let parsed = Address::from_text(ZERO_ADDRESS).unwrap();
    assert_eq!(parsed.as_bytes(), &[0u8; 32]);
}

#[test]
fn foreign_prefix_is_rejected() {
    let err = BlockHash::from_text(ZERO_ADDRESS).expect_err("address is not a block hash");
    assert_eq!(err, CodecError::prefix_mismatch("ab", "aleo"));

    let hash = BlockHash::new(counting_bytes()).unwrap();
    let err = StateRoot::from_text(&hash.to_text()).expect_err("block hash is not a state root");
    assert!(matches!(err, CodecError::PrefixMismatch { expected: "ar", .. }));
}

#[test]
fn text_payload_must_match_size() {
    let short = Bech32m.encode("ab", &[1u8; 31]).unwrap();
    let err = BlockHash::from_text(&short).expect_err("31-byte payload");
    assert_eq!(
        err,
        CodecError::length_mismatch(SerKind::Identifier, "payload", 32, 31)
    );
}

#[test]
fn construction_requires_exact_size() {
    let err = BlockHash::new(vec![0u8; 31]).expect_err("too short");
    assert_eq!(
        err,
        CodecError::length_mismatch(SerKind::Identifier, "payload", 32, 31)
    );
    let err = Address::new(vec![0u8; 33]).expect_err("too long");
    assert_eq!(
        err,
        CodecError::length_mismatch(SerKind::Object, "payload", 32, 33)
    );
}

#[test]
fn decode_from_31_and_33_bytes() {
    let short = [0u8; 31];
    let mut cursor = ByteReader::new(&short);
    let err = BlockHash::decode(&mut cursor).expect_err("31 bytes");
    assert!(matches!(err, CodecError::LengthMismatch { .. }));
    assert_eq!(cursor.position(), 0);

    let long: Vec<u8> = (0u8..33).collect();
    let mut cursor = ByteReader::new(&long);
    let hash = BlockHash::decode(&mut cursor).unwrap();
    assert_eq!(hash.as_bytes(), &long[..32]);
    assert_eq!(cursor.remaining(), 1);
    assert_eq!(cursor.rest(), &[32]);
}

#[test]
fn corrupted_text_is_an_encoding_error() {
    let mut text = ZERO_ADDRESS.to_string();
    text.pop();
    text.push('q');
    let err = Address::from_text(&text).expect_err("bad checksum");
    assert!(matches!(err, CodecError::Encoding { .. }));
}

struct FixedCodec {
    prefix: &'static str,
    payload: Vec<u8>,
}

impl Bech32Codec for FixedCodec {
    fn encode(&self, hrp: &str, payload: &[u8]) -> CodecResult<String> {
        Ok(format!("{}:{}", hrp, payload.len()))
    }

    fn decode(&self, _text: &str) -> CodecResult<(String, Vec<u8>)> {
        Ok((self.prefix.to_string(), self.payload.clone()))
    }
}

#[test]
fn injected_codec_drives_text_handling() {
    let codec = FixedCodec {
        prefix: "at",
        payload: vec![5u8; 32],
    };
    let tx = TransactionId::from_text_with(&codec, "anything").unwrap();
    assert_eq!(tx.as_bytes(), &[5u8; 32]);
    assert_eq!(tx.as_str(), "at:32");
    // Equality is over bytes, not over the cached text.
    assert_eq!(tx, TransactionId::new(vec![5u8; 32]).unwrap());

    let err = TransitionId::from_text_with(&codec, "anything").expect_err("wrong prefix");
    assert_eq!(err, CodecError::prefix_mismatch("as", "at"));
}

#[test]
fn serde_uses_text_form() {
    let address = Address::new(vec![0u8; 32]).unwrap();
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, format!("\"{}\"", ZERO_ADDRESS));
    let restored: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, address);

    let err = serde_json::from_str::<BlockHash>(&json).expect_err("wrong prefix");
    assert!(err.to_string().contains("prefix mismatch"));
}
