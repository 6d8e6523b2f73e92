//! Parameter blobs for governance contract calls
//!
//! Each builder lays out the fields of one operation in the order the
//! contract reads them. Peer public keys and ONT IDs are passed as strings
//! and written as their UTF-8 bytes. Wrapping the blob in a transaction
//! (payer, gas, signatures) is left to the caller.

use crate::config::get_codec_config;
use crate::constants::methods;
use crate::error::{CodecError, Result};
use crate::structure::Struct;
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A native contract call ready to be wrapped in a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeInvoke {
    pub contract: Address,
    pub method: String,
    /// Hex parameter blob
    pub params: String,
}

impl NativeInvoke {
    fn governance(method: &str, params: &Struct) -> Self {
        Self {
            contract: get_codec_config().contracts.governance,
            method: method.to_string(),
            params: params.to_hex(),
        }
    }
}

fn check_peer_list(peer_pubkeys: &[&str]) -> Result<()> {
    if peer_pubkeys.is_empty() {
        return Err(CodecError::InvalidParams(Cow::Borrowed(
            "peer list must not be empty",
        )));
    }
    Ok(())
}

fn check_parallel(peer_pubkeys: &[&str], amounts: &[u64]) -> Result<()> {
    check_peer_list(peer_pubkeys)?;
    if peer_pubkeys.len() != amounts.len() {
        return Err(CodecError::InvalidParams(Cow::Owned(format!(
            "{} peers but {} amounts",
            peer_pubkeys.len(),
            amounts.len()
        ))));
    }
    Ok(())
}

/// `address, n, pk_1..pk_n, n, amount_1..amount_n`
fn peer_amount_struct(address: &Address, peer_pubkeys: &[&str], amounts: &[u64]) -> Result<Struct> {
    check_parallel(peer_pubkeys, amounts)?;
    let mut s = Struct::new();
    s.add(*address).add(peer_pubkeys.len() as u64);
    for pk in peer_pubkeys {
        s.add_str(pk);
    }
    s.add(amounts.len() as u64).add_all(amounts.iter().copied());
    Ok(s)
}

fn peer_address_struct(peer_pubkey: &str, address: &Address) -> Struct {
    let mut s = Struct::new();
    s.add_str(peer_pubkey).add(*address);
    s
}

pub fn register_candidate(
    peer_pubkey: &str,
    address: &Address,
    init_pos: u64,
    ont_id: &str,
    key_no: u64,
) -> NativeInvoke {
    let mut s = peer_address_struct(peer_pubkey, address);
    s.add(init_pos).add_str(ont_id).add(key_no);
    NativeInvoke::governance(methods::REGISTER_CANDIDATE, &s)
}

pub fn unregister_candidate(peer_pubkey: &str, address: &Address) -> NativeInvoke {
    let s = peer_address_struct(peer_pubkey, address);
    NativeInvoke::governance(methods::UNREGISTER_CANDIDATE, &s)
}

pub fn approve_candidate(peer_pubkey: &str) -> NativeInvoke {
    let mut s = Struct::new();
    s.add_str(peer_pubkey);
    NativeInvoke::governance(methods::APPROVE_CANDIDATE, &s)
}

pub fn reject_candidate(peer_pubkey: &str) -> NativeInvoke {
    let mut s = Struct::new();
    s.add_str(peer_pubkey);
    NativeInvoke::governance(methods::REJECT_CANDIDATE, &s)
}

pub fn black_node(peer_pubkeys: &[&str]) -> Result<NativeInvoke> {
    check_peer_list(peer_pubkeys)?;
    let mut s = Struct::new();
    s.add(peer_pubkeys.len() as u64);
    for pk in peer_pubkeys {
        s.add_str(pk);
    }
    Ok(NativeInvoke::governance(methods::BLACK_NODE, &s))
}

pub fn white_node(peer_pubkey: &str) -> NativeInvoke {
    let mut s = Struct::new();
    s.add_str(peer_pubkey);
    NativeInvoke::governance(methods::WHITE_NODE, &s)
}

pub fn quit_node(peer_pubkey: &str, address: &Address) -> NativeInvoke {
    let s = peer_address_struct(peer_pubkey, address);
    NativeInvoke::governance(methods::QUIT_NODE, &s)
}

pub fn authorize_for_peer(
    address: &Address,
    peer_pubkeys: &[&str],
    amounts: &[u64],
) -> Result<NativeInvoke> {
    let s = peer_amount_struct(address, peer_pubkeys, amounts)?;
    Ok(NativeInvoke::governance(methods::AUTHORIZE_FOR_PEER, &s))
}

pub fn unauthorize_for_peer(
    address: &Address,
    peer_pubkeys: &[&str],
    amounts: &[u64],
) -> Result<NativeInvoke> {
    let s = peer_amount_struct(address, peer_pubkeys, amounts)?;
    Ok(NativeInvoke::governance(methods::UNAUTHORIZE_FOR_PEER, &s))
}

pub fn withdraw(address: &Address, peer_pubkeys: &[&str], amounts: &[u64]) -> Result<NativeInvoke> {
    let s = peer_amount_struct(address, peer_pubkeys, amounts)?;
    Ok(NativeInvoke::governance(methods::WITHDRAW, &s))
}

pub fn change_max_authorization(
    peer_pubkey: &str,
    address: &Address,
    max_authorize: u64,
) -> NativeInvoke {
    let mut s = peer_address_struct(peer_pubkey, address);
    s.add(max_authorize);
    NativeInvoke::governance(methods::CHANGE_MAX_AUTHORIZATION, &s)
}

pub fn set_peer_cost(peer_pubkey: &str, address: &Address, peer_cost: u64) -> NativeInvoke {
    let mut s = peer_address_struct(peer_pubkey, address);
    s.add(peer_cost);
    NativeInvoke::governance(methods::SET_PEER_COST, &s)
}

pub fn add_init_pos(peer_pubkey: &str, address: &Address, pos: u64) -> NativeInvoke {
    let mut s = peer_address_struct(peer_pubkey, address);
    s.add(pos);
    NativeInvoke::governance(methods::ADD_INIT_POS, &s)
}

pub fn reduce_init_pos(peer_pubkey: &str, address: &Address, pos: u64) -> NativeInvoke {
    let mut s = peer_address_struct(peer_pubkey, address);
    s.add(pos);
    NativeInvoke::governance(methods::REDUCE_INIT_POS, &s)
}

pub fn withdraw_fee(address: &Address) -> NativeInvoke {
    let mut s = Struct::new();
    s.add(*address);
    NativeInvoke::governance(methods::WITHDRAW_FEE, &s)
}

pub fn withdraw_ong(address: &Address) -> NativeInvoke {
    let mut s = Struct::new();
    s.add(*address);
    NativeInvoke::governance(methods::WITHDRAW_ONG, &s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_lists_rejected() {
        let addr = Address::new([1; 20]);
        let err = authorize_for_peer(&addr, &["a", "b", "c"], &[1, 2]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidParams(_)));
        assert!(withdraw(&addr, &[], &[]).is_err());
        assert!(black_node(&[]).is_err());
    }

    #[test]
    fn test_approve_candidate_blob() {
        let call = approve_candidate("ab");
        assert_eq!(call.method, "approveCandidate");
        assert_eq!(call.params, "026162");
        assert_eq!(call.contract, Address::governance());
    }
}
