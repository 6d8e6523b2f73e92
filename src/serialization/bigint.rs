//! Arbitrary-precision non-negative integers in the VM's integer layout
//!
//! The VM stores integers as little-endian two's complement byte strings of
//! minimal length. For a non-negative value that is the minimal big-endian
//! representation, with a `00` sign byte prepended when the top bit is set,
//! then byte-reversed. Zero is the empty byte string.

use crate::error::{CodecError, Result};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Non-negative integer value
///
/// Construction is the only fallible step: negative or fractional inputs are
/// rejected with [`CodecError::InvalidValue`], after which encoding cannot
/// fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigInt(Natural);

impl BigInt {
    pub fn zero() -> Self {
        Self(Natural::from(0u32))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Natural::from(0u32)
    }

    /// Parse a base-10 string. Signs, decimal points and exponents are rejected.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidValue(Cow::Owned(format!(
                "not a non-negative integer: {s:?}"
            ))));
        }
        Natural::from_str(s)
            .map(Self)
            .map_err(|_| CodecError::InvalidValue(Cow::Owned(format!("unparsable integer: {s:?}"))))
    }

    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    /// The value as a `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }

    /// Encode as little-endian bytes with sign extension
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = PowerOf2Digits::<u8>::to_power_of_2_digits_asc(&self.0, 8);
        // Keep the value positive when read back as two's complement
        if bytes.last().is_some_and(|b| b & 0x80 != 0) {
            bytes.push(0x00);
        }
        bytes
    }

    /// Decode little-endian bytes. The empty slice is zero.
    ///
    /// The bytes are read as an unsigned magnitude; a set top bit is not
    /// treated as a sign.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        // Any sequence of base-256 digits is valid
        Self(
            <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(8, bytes.iter().copied())
                .unwrap_or_default(),
        )
    }

    /// Reversed-endian hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_le_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::from_le_bytes(&hex::decode(s)?))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self(Natural::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self(Natural::from(value))
    }
}

impl TryFrom<i64> for BigInt {
    type Error = CodecError;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| CodecError::InvalidValue(Cow::Owned(format!("negative integer: {value}"))))
    }
}

impl TryFrom<f64> for BigInt {
    type Error = CodecError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(CodecError::InvalidValue(Cow::Owned(format!(
                "not a non-negative integer: {value}"
            ))));
        }
        Self::from_decimal_str(&format!("{value:.0}"))
    }
}

impl FromStr for BigInt {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigInt::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}
