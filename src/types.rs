//! Core value types shared by the codec and governance records

use crate::constants::{ADDRESS_LEN, GOVERNANCE_CONTRACT, ONG_CONTRACT, ONT_CONTRACT};
use crate::error::{CodecError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A 20-byte account or contract identifier.
///
/// Serialized on the wire as exactly [`ADDRESS_LEN`] raw bytes with no
/// length prefix. Human-readable forms (base58 etc.) are not handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Governance native contract
    pub const fn governance() -> Self {
        Self(GOVERNANCE_CONTRACT)
    }

    /// ONT native contract
    pub const fn ont() -> Self {
        Self(ONT_CONTRACT)
    }

    /// ONG native contract
    pub const fn ong() -> Self {
        Self(ONG_CONTRACT)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            CodecError::InvalidValue(Cow::Owned(format!(
                "address must be {ADDRESS_LEN} bytes, got {}",
                bytes.len()
            )))
        })?;
        Ok(Self(raw))
    }

    /// Parse the 40-digit hex form of the serialized address
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
