//! Governance call parameter tests

use ontology_governance_codec::governance::params::{
    add_init_pos, approve_candidate, authorize_for_peer, black_node, change_max_authorization,
    quit_node, reduce_init_pos, register_candidate, reject_candidate, set_peer_cost,
    unauthorize_for_peer, unregister_candidate, white_node, withdraw, withdraw_fee, withdraw_ong,
};
use ontology_governance_codec::types::Address;
use ontology_governance_codec::CodecError;

fn addr() -> Address {
    Address::new([0xab; 20])
}

fn addr_hex() -> String {
    "ab".repeat(20)
}

#[test]
fn test_register_candidate_layout() {
    let call = register_candidate("pk", &addr(), 1000, "did", 1);

    assert_eq!(call.method, "registerCandidate");
    assert_eq!(call.contract, Address::governance());
    let expected = format!("02706b{}02e80303646964 0101", addr_hex()).replace(' ', "");
    assert_eq!(call.params, expected);
}

#[test]
fn test_authorize_for_peer_layout() {
    let call = authorize_for_peer(&addr(), &["a", "b"], &[1, 300]).unwrap();

    assert_eq!(call.method, "authorizeForPeer");
    // address, count, keys, count, amounts
    let expected = format!("{}0102016101620102010102 2c01", addr_hex()).replace(' ', "");
    assert_eq!(call.params, expected);
}

#[test]
fn test_mismatched_lengths_rejected_before_encoding() {
    let peers = ["p1", "p2", "p3"];
    let amounts = [10, 20];

    for result in [
        authorize_for_peer(&addr(), &peers, &amounts),
        unauthorize_for_peer(&addr(), &peers, &amounts),
        withdraw(&addr(), &peers, &amounts),
    ] {
        assert!(matches!(result, Err(CodecError::InvalidParams(_))));
    }
}

#[test]
fn test_empty_lists_rejected() {
    assert!(matches!(
        authorize_for_peer(&addr(), &[], &[]),
        Err(CodecError::InvalidParams(_))
    ));
    assert!(matches!(black_node(&[]), Err(CodecError::InvalidParams(_))));
}

#[test]
fn test_single_peer_operations() {
    assert_eq!(approve_candidate("x").params, "0178");
    assert_eq!(reject_candidate("x").method, "rejectCandidate");
    assert_eq!(white_node("x").params, "0178");
    assert_eq!(black_node(&["x", "y"]).unwrap().params, "010201780179");
}

#[test]
fn test_peer_address_operations() {
    let base = format!("0178{}", addr_hex());

    assert_eq!(unregister_candidate("x", &addr()).params, base);
    assert_eq!(quit_node("x", &addr()).params, base);
    assert_eq!(change_max_authorization("x", &addr(), 5).params, format!("{base}0105"));
    assert_eq!(set_peer_cost("x", &addr(), 100).params, format!("{base}0164"));
    assert_eq!(add_init_pos("x", &addr(), 128).params, format!("{base}028000"));
    assert_eq!(reduce_init_pos("x", &addr(), 0).params, format!("{base}00"));
}

#[test]
fn test_address_only_operations() {
    assert_eq!(withdraw_fee(&addr()).params, addr_hex());
    assert_eq!(withdraw_fee(&addr()).method, "withdrawFee");
    assert_eq!(withdraw_ong(&addr()).method, "withdrawOng");
}
