#![no_main]
use libfuzzer_sys::fuzz_target;
use ontology_governance_codec::governance::{
    decode_peer_pool, AuthorizeInfo, GovernanceView, PeerAttributes, PeerPoolItem, Record,
    SplitFeeAddress, TotalStake,
};
use ontology_governance_codec::serialization::varint::{decode_varint, encode_varint};
use ontology_governance_codec::{BigInt, StreamReader};

fn check<R: Record + PartialEq + std::fmt::Debug>(data: &[u8]) {
    let mut reader = StreamReader::new(data);
    let start = reader.position();
    // Re-encoding a decoded record reproduces the consumed bytes
    if let Ok(record) = R::decode(&mut reader) {
        let consumed = &data[start..reader.position()];
        assert_eq!(record.to_hex(), hex::encode(consumed));
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok((value, len)) = decode_varint(data) {
        assert_eq!(encode_varint(value), data[..len].to_vec());
    }

    let value = BigInt::from_le_bytes(data);
    assert_eq!(BigInt::from_le_bytes(&value.to_le_bytes()), value);

    check::<GovernanceView>(data);
    check::<PeerPoolItem>(data);
    check::<PeerAttributes>(data);
    check::<SplitFeeAddress>(data);
    check::<AuthorizeInfo>(data);
    check::<TotalStake>(data);

    let mut reader = StreamReader::new(data);
    let _ = decode_peer_pool(&mut reader);
});
