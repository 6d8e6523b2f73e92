//! Governance record lookups over contract storage
//!
//! Fetching is delegated to a [`StorageSource`]; everything here works on the
//! hex blob it returns. A missing value yields the record's default.

use super::keys::{
    authorize_info_key, governance_view_key, peer_attributes_key, peer_pool_key,
    split_fee_address_key, total_stake_key,
};
use super::records::{
    AuthorizeInfo, GovernanceView, PeerAttributes, PeerPoolItem, Record, SplitFeeAddress,
    TotalStake,
};
use crate::config::get_codec_config;
use crate::error::{CodecError, Result};
use crate::serialization::StreamReader;
use crate::types::Address;
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::HashMap;

/// Read access to native contract storage
pub trait StorageSource {
    /// Hex value stored under `key` in `contract`, or `None` if absent
    fn get_storage(&self, contract: &Address, key: &[u8]) -> Result<Option<String>>;
}

/// HashMap-backed storage, keyed by contract and raw key
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<(Address, Vec<u8>), String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, contract: Address, key: Vec<u8>, value_hex: impl Into<String>) {
        self.entries.insert((contract, key), value_hex.into());
    }

    /// Store the encoding of `record`
    pub fn insert_record<R: Record>(&mut self, contract: Address, key: Vec<u8>, record: &R) {
        self.insert(contract, key, record.to_hex());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageSource for MemoryStorage {
    fn get_storage(&self, contract: &Address, key: &[u8]) -> Result<Option<String>> {
        Ok(self.entries.get(&(*contract, key.to_vec())).cloned())
    }
}

/// Peer-pool entries keyed by peer public key, in on-chain order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerPoolMap {
    items: Vec<PeerPoolItem>,
    index: HashMap<String, usize>,
}

impl PeerPoolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`; an existing entry for the same key is replaced in place
    ///
    /// Returns the replaced entry.
    pub fn insert(&mut self, item: PeerPoolItem) -> Option<PeerPoolItem> {
        match self.index.get(&item.peer_pubkey) {
            Some(&pos) => Some(std::mem::replace(&mut self.items[pos], item)),
            None => {
                self.index.insert(item.peer_pubkey.clone(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    pub fn get(&self, peer_pubkey: &str) -> Option<&PeerPoolItem> {
        self.index.get(peer_pubkey).map(|&pos| &self.items[pos])
    }

    pub fn contains_key(&self, peer_pubkey: &str) -> bool {
        self.index.contains_key(peer_pubkey)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.peer_pubkey.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &PeerPoolItem> {
        self.items.iter()
    }

    pub fn into_values(self) -> Vec<PeerPoolItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a PeerPoolMap {
    type Item = &'a PeerPoolItem;
    type IntoIter = std::slice::Iter<'a, PeerPoolItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Decode a peer-pool blob: a u32 count followed by that many entries
pub fn decode_peer_pool(reader: &mut StreamReader<'_>) -> Result<PeerPoolMap> {
    let count = reader.read_u32()?;
    let max = get_codec_config().limits.max_peer_pool_entries;
    if count > max {
        return Err(CodecError::InvalidEncoding(Cow::Owned(format!(
            "peer pool count {count} exceeds limit {max}"
        ))));
    }

    let mut map = PeerPoolMap::new();
    for _ in 0..count {
        let item = PeerPoolItem::decode(reader)?;
        if let Some(old) = map.insert(item) {
            warn!("duplicate peer {} in peer pool blob", old.peer_pubkey);
        }
    }
    Ok(map)
}

fn fetch(storage: &impl StorageSource, key: &[u8]) -> Result<Option<StreamReader<'static>>> {
    let config = get_codec_config();
    if config.debug.log_storage_keys {
        debug!("governance storage lookup: {}", hex::encode(key));
    }
    match storage.get_storage(&config.contracts.governance, key)? {
        Some(value) if !value.is_empty() => {
            debug!("governance storage value: {} bytes", value.len() / 2);
            StreamReader::from_hex(&value).map(Some)
        }
        _ => Ok(None),
    }
}

fn fetch_record<R: Record>(storage: &impl StorageSource, key: &[u8]) -> Result<R> {
    match fetch(storage, key)? {
        Some(mut reader) => R::decode(&mut reader),
        None => Ok(R::default()),
    }
}

pub fn get_governance_view(storage: &impl StorageSource) -> Result<GovernanceView> {
    fetch_record(storage, &governance_view_key())
}

/// All peers of the current view
pub fn get_peer_pool_map(storage: &impl StorageSource) -> Result<PeerPoolMap> {
    let view = get_governance_view(storage)?;
    let map = match fetch(storage, &peer_pool_key(view.view))? {
        Some(mut reader) => decode_peer_pool(&mut reader)?,
        None => PeerPoolMap::new(),
    };
    debug!("peer pool for view {}: {} peers", view.view, map.len());
    Ok(map)
}

/// One peer of the current view, if present
pub fn get_peer_pool_item(
    storage: &impl StorageSource,
    peer_pubkey: &str,
) -> Result<Option<PeerPoolItem>> {
    let map = get_peer_pool_map(storage)?;
    Ok(map.get(peer_pubkey).cloned())
}

pub fn get_attributes(storage: &impl StorageSource, peer_pubkey: &str) -> Result<PeerAttributes> {
    fetch_record(storage, &peer_attributes_key(peer_pubkey)?)
}

pub fn get_split_fee_address(
    storage: &impl StorageSource,
    address: &Address,
) -> Result<SplitFeeAddress> {
    fetch_record(storage, &split_fee_address_key(address))
}

pub fn get_authorize_info(
    storage: &impl StorageSource,
    peer_pubkey: &str,
    address: &Address,
) -> Result<AuthorizeInfo> {
    fetch_record(storage, &authorize_info_key(peer_pubkey, address)?)
}

pub fn get_total_stake(storage: &impl StorageSource, address: &Address) -> Result<TotalStake> {
    fetch_record(storage, &total_stake_key(address))
}
