//! Governance contract records, storage keys, queries and call parameters

pub mod keys;
pub mod params;
pub mod query;
pub mod records;

pub use params::NativeInvoke;
pub use query::{
    decode_peer_pool, get_attributes, get_authorize_info, get_governance_view,
    get_peer_pool_item, get_peer_pool_map, get_split_fee_address, get_total_stake,
    MemoryStorage, PeerPoolMap, StorageSource,
};
pub use records::{
    AuthorizeInfo, GovernanceView, PeerAttributes, PeerPoolItem, PeerStatus, Record,
    SplitFeeAddress, TotalStake,
};
