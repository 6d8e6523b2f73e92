//! Length-prefixed byte strings
//!
//! A byte string is written as its length (see [`super::varint`]) followed by
//! the raw bytes. Text fields are carried as the UTF-8 bytes of the string, so
//! the empty string and the empty byte string both encode as a single `00`.

use super::varint::{decode_varint, encode_varint};
use crate::error::{CodecError, Result};
use std::borrow::Cow;

/// Append `bytes` with its length prefix to `buf`
pub fn write_var_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&encode_varint(bytes.len() as u64));
    buf.extend_from_slice(bytes);
}

/// Encode `bytes` with its length prefix
pub fn encode_var_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bytes.len() + 9);
    write_var_bytes(&mut buf, bytes);
    buf
}

/// Split a length-prefixed byte string off the front of `data`
///
/// Returns the payload and the total number of bytes consumed (prefix plus
/// payload). A declared length above `max_len` is rejected before the payload
/// is looked at.
pub fn split_var_bytes(data: &[u8], max_len: usize) -> Result<(&[u8], usize)> {
    let (declared, prefix_len) = decode_varint(data)?;
    let len = usize::try_from(declared)
        .ok()
        .filter(|len| *len <= max_len)
        .ok_or_else(|| {
            CodecError::InvalidEncoding(Cow::Owned(format!(
                "byte string length {declared} exceeds limit {max_len}"
            )))
        })?;

    let remaining = data.len() - prefix_len;
    if remaining < len {
        return Err(CodecError::TruncatedInput {
            needed: len,
            remaining,
        });
    }
    Ok((&data[prefix_len..prefix_len + len], prefix_len + len))
}

/// Hex of a length-prefixed UTF-8 string, as used for text parameters
pub fn encode_var_str_hex(s: &str) -> String {
    hex::encode(encode_var_bytes(s.as_bytes()))
}

pub(crate) fn utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(Cow::Owned(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes() {
        assert_eq!(encode_var_bytes(&[]), vec![0x00]);
        assert_eq!(split_var_bytes(&[0x00], usize::MAX), Ok((&[][..], 1)));
    }

    #[test]
    fn test_prefix_switches_at_0xfd() {
        let short = encode_var_bytes(&[0xaa; 0xfc]);
        assert_eq!(short[0], 0xfc);
        assert_eq!(short.len(), 1 + 0xfc);

        let long = encode_var_bytes(&[0xaa; 0xfd]);
        assert_eq!(&long[..3], &[0xfd, 0xfd, 0x00]);
        assert_eq!(long.len(), 3 + 0xfd);
    }

    #[test]
    fn test_split_truncated_payload() {
        assert_eq!(
            split_var_bytes(&[0x03, 0x01, 0x02], usize::MAX),
            Err(CodecError::TruncatedInput {
                needed: 3,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_split_over_limit() {
        assert!(matches!(
            split_var_bytes(&[0x03, 0x01, 0x02, 0x03], 2),
            Err(CodecError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_var_str_hex() {
        assert_eq!(encode_var_str_hex("abc"), "03616263");
        assert_eq!(encode_var_str_hex(""), "00");
    }
}
