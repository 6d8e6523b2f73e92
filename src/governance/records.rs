//! Governance contract storage records
//!
//! Each record is a fixed sequence of fields read front to back with no
//! optional parts. Decoding either yields the whole record or an error;
//! trailing bytes after the last field are left in the reader.

use crate::error::{CodecError, Result};
use crate::serialization::{StreamReader, StreamWriter};
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A value with a fixed on-chain layout
pub trait Record: Sized + Default {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self>;

    fn encode(&self, writer: &mut StreamWriter);

    fn from_hex(hex_str: &str) -> Result<Self> {
        let mut reader = StreamReader::from_hex(hex_str)?;
        Self::decode(&mut reader)
    }

    fn to_hex(&self) -> String {
        let mut writer = StreamWriter::new();
        self.encode(&mut writer);
        writer.to_hex()
    }
}

/// Pointer to the current peer-pool snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GovernanceView {
    pub view: u32,
    pub height: u32,
    pub tx_hash: Vec<u8>,
}

impl Record for GovernanceView {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        Ok(Self {
            view: reader.read_u32()?,
            height: reader.read_u32()?,
            tx_hash: reader.read_var_bytes()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer
            .write_u32(self.view)
            .write_u32(self.height)
            .write_var_bytes(&self.tx_hash);
    }
}

/// Lifecycle state of a peer in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerStatus {
    Registered,
    Candidate,
    Consensus,
    QuitConsensus,
    Quitting,
    Blacklisted,
}

impl TryFrom<u8> for PeerStatus {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => PeerStatus::Registered,
            1 => PeerStatus::Candidate,
            2 => PeerStatus::Consensus,
            3 => PeerStatus::QuitConsensus,
            4 => PeerStatus::Quitting,
            5 => PeerStatus::Blacklisted,
            other => {
                return Err(CodecError::InvalidValue(Cow::Owned(format!(
                    "unknown peer status {other}"
                ))))
            }
        })
    }
}

impl From<PeerStatus> for u8 {
    fn from(status: PeerStatus) -> Self {
        status as u8
    }
}

/// One peer in a peer-pool snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerPoolItem {
    pub index: u32,
    pub peer_pubkey: String,
    pub address: Address,
    /// Raw status byte, see [`PeerPoolItem::peer_status`]
    pub status: u8,
    pub init_pos: u64,
    pub total_pos: u64,
}

impl PeerPoolItem {
    pub fn peer_status(&self) -> Result<PeerStatus> {
        PeerStatus::try_from(self.status)
    }
}

impl Record for PeerPoolItem {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        Ok(Self {
            index: reader.read_u32()?,
            peer_pubkey: reader.read_var_str()?,
            address: reader.read_address()?,
            status: reader.read_u8()?,
            init_pos: reader.read_u64()?,
            total_pos: reader.read_u64()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer
            .write_u32(self.index)
            .write_var_str(&self.peer_pubkey)
            .write_address(&self.address)
            .write_u8(self.status)
            .write_u64(self.init_pos)
            .write_u64(self.total_pos);
    }
}

/// Per-peer settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerAttributes {
    pub peer_pubkey: String,
    pub if_authorize: bool,
    pub old_peer_cost: u64,
    pub new_peer_cost: u64,
    pub set_cost_view: u32,
    /// Reserved, opaque
    pub field1: Vec<u8>,
    /// Reserved, opaque
    pub field2: Vec<u8>,
    /// Reserved, opaque
    pub field3: Vec<u8>,
    /// Reserved, opaque
    pub field4: Vec<u8>,
}

impl Record for PeerAttributes {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        let peer_pubkey = reader.read_var_str()?;
        let if_authorize = match reader.read_var_len()? {
            0 => false,
            1 => true,
            other => {
                return Err(CodecError::InvalidEncoding(Cow::Owned(format!(
                    "authorization flag must be 0 or 1, got {other}"
                ))))
            }
        };
        Ok(Self {
            peer_pubkey,
            if_authorize,
            old_peer_cost: reader.read_u64()?,
            new_peer_cost: reader.read_u64()?,
            set_cost_view: reader.read_u32()?,
            field1: reader.read_var_bytes()?,
            field2: reader.read_var_bytes()?,
            field3: reader.read_var_bytes()?,
            field4: reader.read_var_bytes()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer
            .write_var_str(&self.peer_pubkey)
            .write_var_len(self.if_authorize as u64)
            .write_u64(self.old_peer_cost)
            .write_u64(self.new_peer_cost)
            .write_u32(self.set_cost_view)
            .write_var_bytes(&self.field1)
            .write_var_bytes(&self.field2)
            .write_var_bytes(&self.field3)
            .write_var_bytes(&self.field4);
    }
}

/// Fee-split balance of one address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitFeeAddress {
    pub address: Address,
    pub amount: u64,
}

impl Record for SplitFeeAddress {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        Ok(Self {
            address: reader.read_address()?,
            amount: reader.read_u64()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer.write_address(&self.address).write_u64(self.amount);
    }
}

/// Stake one address has authorized to one peer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorizeInfo {
    pub peer_pubkey: String,
    pub address: Address,
    pub consensus_pos: u64,
    pub freeze_pos: u64,
    pub new_pos: u64,
    pub withdraw_pos: u64,
    pub withdraw_freeze_pos: u64,
    pub withdraw_unfreeze_pos: u64,
}

impl Record for AuthorizeInfo {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        Ok(Self {
            peer_pubkey: reader.read_var_str()?,
            address: reader.read_address()?,
            consensus_pos: reader.read_u64()?,
            freeze_pos: reader.read_u64()?,
            new_pos: reader.read_u64()?,
            withdraw_pos: reader.read_u64()?,
            withdraw_freeze_pos: reader.read_u64()?,
            withdraw_unfreeze_pos: reader.read_u64()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer
            .write_var_str(&self.peer_pubkey)
            .write_address(&self.address)
            .write_u64(self.consensus_pos)
            .write_u64(self.freeze_pos)
            .write_u64(self.new_pos)
            .write_u64(self.withdraw_pos)
            .write_u64(self.withdraw_freeze_pos)
            .write_u64(self.withdraw_unfreeze_pos);
    }
}

/// Total stake of one address and when it last changed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TotalStake {
    pub address: Address,
    pub stake: u64,
    pub time_offset: u32,
}

impl Record for TotalStake {
    fn decode(reader: &mut StreamReader<'_>) -> Result<Self> {
        Ok(Self {
            address: reader.read_address()?,
            stake: reader.read_u64()?,
            time_offset: reader.read_u32()?,
        })
    }

    fn encode(&self, writer: &mut StreamWriter) {
        writer
            .write_address(&self.address)
            .write_u64(self.stake)
            .write_u32(self.time_offset);
    }
}
