//! Variable-length integer prefix
//!
//! Lengths and counts on the wire use a self-describing prefix of 1, 3, 5 or
//! 9 bytes:
//! - If value < 0xfd: single byte
//! - If value <= 0xffff: 0xfd marker + 2 bytes (little-endian)
//! - If value <= 0xffffffff: 0xfe marker + 4 bytes (little-endian)
//! - Otherwise: 0xff marker + 8 bytes (little-endian)
//!
//! Decoding rejects a value written with a longer form than it needs, so each
//! value has exactly one encoding.

use crate::constants::{
    VARINT_MARKER_U16, VARINT_MARKER_U32, VARINT_MARKER_U64, VARINT_SINGLE_BYTE_MAX,
};
use crate::error::{CodecError, Result};
use std::borrow::Cow;

/// Number of bytes `encode_varint(value)` produces
pub fn varint_len(value: u64) -> usize {
    if value <= VARINT_SINGLE_BYTE_MAX {
        1
    } else if value <= 0xffff {
        3
    } else if value <= 0xffff_ffff {
        5
    } else {
        9
    }
}

/// Encode a length or count as a variable-length prefix
///
/// # Examples
///
/// ```
/// use ontology_governance_codec::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(252), vec![252]);
/// assert_eq!(encode_varint(253), vec![0xfd, 253, 0]);
/// assert_eq!(encode_varint(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(varint_len(value));
    if value <= VARINT_SINGLE_BYTE_MAX {
        result.push(value as u8);
    } else if value <= 0xffff {
        result.push(VARINT_MARKER_U16);
        result.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        result.push(VARINT_MARKER_U32);
        result.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        result.push(VARINT_MARKER_U64);
        result.extend_from_slice(&value.to_le_bytes());
    }

    debug_assert_eq!(result.len(), varint_len(value));
    result
}

/// Decode a variable-length prefix from the front of `data`
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use ontology_governance_codec::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0]), Ok((0, 1)));
/// assert_eq!(decode_varint(&[0xfd, 253, 0]), Ok((253, 3)));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let first_byte = *data.first().ok_or(CodecError::TruncatedInput {
        needed: 1,
        remaining: 0,
    })?;

    let (width, min_value) = match first_byte {
        b if b < VARINT_MARKER_U16 => return Ok((b as u64, 1)),
        VARINT_MARKER_U16 => (2, VARINT_SINGLE_BYTE_MAX + 1),
        VARINT_MARKER_U32 => (4, 0x1_0000),
        VARINT_MARKER_U64 => (8, 0x1_0000_0000),
        _ => unreachable!("all byte values are covered above"),
    };

    let payload = data.get(1..1 + width).ok_or(CodecError::TruncatedInput {
        needed: 1 + width,
        remaining: data.len(),
    })?;
    let mut buf = [0u8; 8];
    buf[..width].copy_from_slice(payload);
    let value = u64::from_le_bytes(buf);

    if value < min_value {
        return Err(CodecError::InvalidEncoding(Cow::Owned(format!(
            "non-canonical length prefix: {value} encoded with marker {first_byte:#04x}"
        ))));
    }

    Ok((value, 1 + width))
}
