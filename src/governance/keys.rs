//! Storage keys of the governance contract
//!
//! A key is the ASCII name of the storage field followed by the raw identity
//! bytes it is indexed by. Peer public keys arrive as hex strings and are
//! decoded before being appended.

use crate::constants::{
    AUTHORIZE_INFO_POOL, GOVERNANCE_VIEW, PEER_ATTRIBUTES, PEER_POOL, SPLIT_FEE_ADDRESS,
    TOTAL_STAKE,
};
use crate::error::Result;
use crate::types::Address;

fn key(name: &str, parts: &[&[u8]]) -> Vec<u8> {
    let len = name.len() + parts.iter().map(|p| p.len()).sum::<usize>();
    let mut key = Vec::with_capacity(len);
    key.extend_from_slice(name.as_bytes());
    for part in parts {
        key.extend_from_slice(part);
    }
    key
}

pub fn governance_view_key() -> Vec<u8> {
    key(GOVERNANCE_VIEW, &[])
}

/// Peer-pool snapshot of `view`, indexed by the view as a little-endian u32
pub fn peer_pool_key(view: u32) -> Vec<u8> {
    key(PEER_POOL, &[&view.to_le_bytes()])
}

/// Fails with [`CodecError::InvalidHex`](crate::CodecError::InvalidHex) if
/// `peer_pubkey` is not hex
pub fn peer_attributes_key(peer_pubkey: &str) -> Result<Vec<u8>> {
    let pubkey = hex::decode(peer_pubkey)?;
    Ok(key(PEER_ATTRIBUTES, &[pubkey.as_slice()]))
}

pub fn split_fee_address_key(address: &Address) -> Vec<u8> {
    key(SPLIT_FEE_ADDRESS, &[address.as_bytes()])
}

pub fn authorize_info_key(peer_pubkey: &str, address: &Address) -> Result<Vec<u8>> {
    let pubkey = hex::decode(peer_pubkey)?;
    Ok(key(AUTHORIZE_INFO_POOL, &[pubkey.as_slice(), address.as_bytes()]))
}

pub fn total_stake_key(address: &Address) -> Vec<u8> {
    key(TOTAL_STAKE, &[address.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_peer_pool_key() {
        assert_eq!(hex::encode(peer_pool_key(5)), "70656572506f6f6c05000000");
    }

    #[test]
    fn test_peer_attributes_key_uses_pubkey_bytes() {
        let key = peer_attributes_key("02ab").unwrap();
        assert_eq!(hex::encode(key), "706565724174747269627574657302ab");
    }

    #[test]
    fn test_authorize_info_key_order() {
        let addr = Address::new([0x11; 20]);
        let key = authorize_info_key("02ab", &addr).unwrap();
        let mut expected = b"voteInfoPool".to_vec();
        expected.extend_from_slice(&[0x02, 0xab]);
        expected.extend_from_slice(addr.as_bytes());
        assert_eq!(key, expected);
    }

    #[test]
    fn test_pubkey_must_be_hex() {
        let addr = Address::new([0x11; 20]);
        assert!(matches!(
            peer_attributes_key("not-hex"),
            Err(CodecError::InvalidHex(_))
        ));
        assert!(matches!(
            authorize_info_key("02a", &addr),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_governance_view_key() {
        assert_eq!(governance_view_key(), b"governanceView".to_vec());
    }
}
