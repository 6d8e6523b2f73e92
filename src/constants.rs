//! Wire-format and governance contract constants

/// Serialized width of an address in bytes
pub const ADDRESS_LEN: usize = 20;

/// Largest value encoded in the single-byte length form
pub const VARINT_SINGLE_BYTE_MAX: u64 = 0xfc;

/// Marker for a 2-byte little-endian length
pub const VARINT_MARKER_U16: u8 = 0xfd;

/// Marker for a 4-byte little-endian length
pub const VARINT_MARKER_U32: u8 = 0xfe;

/// Marker for an 8-byte little-endian length
pub const VARINT_MARKER_U64: u8 = 0xff;

/// ONT token native contract
pub const ONT_CONTRACT: [u8; ADDRESS_LEN] = native_contract(0x01);

/// ONG token native contract
pub const ONG_CONTRACT: [u8; ADDRESS_LEN] = native_contract(0x02);

/// Governance native contract
pub const GOVERNANCE_CONTRACT: [u8; ADDRESS_LEN] = native_contract(0x07);

const fn native_contract(id: u8) -> [u8; ADDRESS_LEN] {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[ADDRESS_LEN - 1] = id;
    bytes
}

// Storage key field names. Keys are the ASCII bytes of these names
// followed by identity bytes (public key string, address, view).

pub const GOVERNANCE_VIEW: &str = "governanceView";
pub const PEER_POOL: &str = "peerPool";
pub const PEER_ATTRIBUTES: &str = "peerAttributes";
pub const SPLIT_FEE_ADDRESS: &str = "splitFeeAddress";
pub const AUTHORIZE_INFO_POOL: &str = "voteInfoPool";
pub const TOTAL_STAKE: &str = "totalStake";

/// Governance contract method names
pub mod methods {
    pub const REGISTER_CANDIDATE: &str = "registerCandidate";
    pub const UNREGISTER_CANDIDATE: &str = "unRegisterCandidate";
    pub const APPROVE_CANDIDATE: &str = "approveCandidate";
    pub const REJECT_CANDIDATE: &str = "rejectCandidate";
    pub const BLACK_NODE: &str = "blackNode";
    pub const WHITE_NODE: &str = "whiteNode";
    pub const QUIT_NODE: &str = "quitNode";
    pub const AUTHORIZE_FOR_PEER: &str = "authorizeForPeer";
    pub const UNAUTHORIZE_FOR_PEER: &str = "unAuthorizeForPeer";
    pub const WITHDRAW: &str = "withdraw";
    pub const CHANGE_MAX_AUTHORIZATION: &str = "changeMaxAuthorization";
    pub const SET_PEER_COST: &str = "setPeerCost";
    pub const ADD_INIT_POS: &str = "addInitPos";
    pub const REDUCE_INIT_POS: &str = "reduceInitPos";
    pub const WITHDRAW_FEE: &str = "withdrawFee";
    pub const WITHDRAW_ONG: &str = "withdrawOng";
}
