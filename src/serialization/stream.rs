//! Sequential reader and writer over the wire format
//!
//! `StreamReader` walks a byte buffer with a cursor; `StreamWriter` appends to
//! one. Both cross the system boundary as even-length hex strings via
//! [`StreamReader::from_hex`] and [`StreamWriter::to_hex`].
//!
//! A failed read leaves the cursor where it was before the call.

use super::bigint::BigInt;
use super::bytes::{split_var_bytes, utf8, write_var_bytes};
use super::varint::{decode_varint, encode_varint};
use crate::config::get_codec_config;
use crate::constants::ADDRESS_LEN;
use crate::error::{CodecError, Result};
use crate::types::Address;
use std::borrow::Cow;

/// Width of a fixed-size little-endian unsigned integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    U64,
}

impl IntWidth {
    pub const fn bytes(self) -> usize {
        match self {
            IntWidth::U8 => 1,
            IntWidth::U16 => 2,
            IntWidth::U32 => 4,
            IntWidth::U64 => 8,
        }
    }

    pub const fn max_value(self) -> u64 {
        match self {
            IntWidth::U8 => u8::MAX as u64,
            IntWidth::U16 => u16::MAX as u64,
            IntWidth::U32 => u32::MAX as u64,
            IntWidth::U64 => u64::MAX,
        }
    }
}

impl TryFrom<usize> for IntWidth {
    type Error = CodecError;

    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            1 => Ok(IntWidth::U8),
            2 => Ok(IntWidth::U16),
            4 => Ok(IntWidth::U32),
            8 => Ok(IntWidth::U64),
            other => Err(CodecError::InvalidValue(Cow::Owned(format!(
                "unsupported integer width: {other} bytes"
            )))),
        }
    }
}

/// Cursor over a serialized record
#[derive(Debug, Clone)]
pub struct StreamReader<'a> {
    data: Cow<'a, [u8]>,
    pos: usize,
    max_var_bytes_len: usize,
}

impl<'a> StreamReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_cow(Cow::Borrowed(data))
    }

    /// Decode a hex blob and read from the resulting bytes
    pub fn from_hex(hex_str: &str) -> Result<StreamReader<'static>> {
        Ok(StreamReader::from_cow(Cow::Owned(hex::decode(hex_str)?)))
    }

    fn from_cow(data: Cow<'a, [u8]>) -> Self {
        Self {
            data,
            pos: 0,
            max_var_bytes_len: get_codec_config().limits.max_var_bytes_len,
        }
    }

    /// Override the length-prefix limit taken from the global config
    pub fn with_max_var_bytes_len(mut self, max: usize) -> Self {
        self.max_var_bytes_len = max;
        self
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn rest(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// Consume exactly `n` bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::TruncatedInput {
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Consume `width` bytes as a little-endian unsigned integer
    pub fn read_uint(&mut self, width: IntWidth) -> Result<u64> {
        match width {
            IntWidth::U8 => self.read_u8().map(u64::from),
            IntWidth::U16 => self.read_u16().map(u64::from),
            IntWidth::U32 => self.read_u32().map(u64::from),
            IntWidth::U64 => self.read_u64(),
        }
    }

    /// Single-byte boolean; only `00` and `01` are accepted
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.rest().first().copied() {
            Some(0) => {
                self.pos += 1;
                Ok(false)
            }
            Some(1) => {
                self.pos += 1;
                Ok(true)
            }
            Some(other) => Err(CodecError::InvalidEncoding(Cow::Owned(format!(
                "boolean byte must be 00 or 01, got {other:#04x}"
            )))),
            None => Err(CodecError::TruncatedInput {
                needed: 1,
                remaining: 0,
            }),
        }
    }

    /// Self-describing variable-length integer
    pub fn read_var_len(&mut self) -> Result<u64> {
        let (value, consumed) = decode_varint(self.rest())?;
        self.pos += consumed;
        Ok(value)
    }

    /// Length-prefixed byte string
    pub fn read_var_bytes(&mut self) -> Result<Vec<u8>> {
        let (payload, consumed) = split_var_bytes(self.rest(), self.max_var_bytes_len)?;
        let payload = payload.to_vec();
        self.pos += consumed;
        Ok(payload)
    }

    /// Length-prefixed byte string holding UTF-8 text
    pub fn read_var_str(&mut self) -> Result<String> {
        let start = self.pos;
        let text = utf8(self.read_var_bytes()?);
        if text.is_err() {
            self.pos = start;
        }
        text
    }

    /// Fixed 20-byte address, no prefix
    pub fn read_address(&mut self) -> Result<Address> {
        self.read_array::<ADDRESS_LEN>().map(Address::new)
    }

    /// Length-prefixed big integer
    pub fn read_bigint(&mut self) -> Result<BigInt> {
        self.read_var_bytes().map(|b| BigInt::from_le_bytes(&b))
    }
}

/// Append-only builder for serialized records and parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamWriter {
    buf: Vec<u8>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.buf)
    }

    /// Append bytes as-is
    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    /// Write `value` in exactly `width` little-endian bytes
    ///
    /// Fails with `InvalidValue` if the value does not fit.
    pub fn write_uint(&mut self, value: u64, width: IntWidth) -> Result<&mut Self> {
        if value > width.max_value() {
            return Err(CodecError::InvalidValue(Cow::Owned(format!(
                "{value} does not fit in {} bytes",
                width.bytes()
            ))));
        }
        Ok(self.write_raw(&value.to_le_bytes()[..width.bytes()]))
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(value as u8)
    }

    pub fn write_var_len(&mut self, value: u64) -> &mut Self {
        self.write_raw(&encode_varint(value))
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        write_var_bytes(&mut self.buf, bytes);
        self
    }

    pub fn write_var_str(&mut self, s: &str) -> &mut Self {
        self.write_var_bytes(s.as_bytes())
    }

    pub fn write_address(&mut self, address: &Address) -> &mut Self {
        self.write_raw(address.as_bytes())
    }

    pub fn write_bigint(&mut self, value: &BigInt) -> &mut Self {
        self.write_var_bytes(&value.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fixed_width_little_endian() {
        let mut reader = StreamReader::from_hex("01").unwrap();
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert!(reader.is_empty());

        let mut reader = StreamReader::from_hex("3412785634120000efcdab8967452301").unwrap();
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0x12345678);
        assert_eq!(reader.read_uint(IntWidth::U16).unwrap(), 0);
        assert_eq!(reader.read_u64().unwrap(), 0x0123456789abcdef);
        assert_eq!(reader.position(), 16);
    }

    #[test]
    fn test_truncated_read_keeps_cursor() {
        let mut reader = StreamReader::new(&[0x01, 0x02, 0x03]);
        assert_eq!(
            reader.read_u32(),
            Err(CodecError::TruncatedInput {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn test_truncated_var_bytes_keeps_cursor() {
        let mut reader = StreamReader::new(&[0x05, 0xaa, 0xbb]);
        assert!(matches!(
            reader.read_var_bytes(),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_bool() {
        let mut reader = StreamReader::new(&[0x00, 0x01, 0x02]);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(matches!(reader.read_bool(), Err(CodecError::InvalidEncoding(_))));
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_read_var_str_rejects_bad_utf8() {
        let mut reader = StreamReader::new(&[0x01, 0xff]);
        assert!(matches!(reader.read_var_str(), Err(CodecError::InvalidUtf8(_))));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_var_bytes_limit() {
        let mut reader = StreamReader::new(&[0x03, 1, 2, 3]).with_max_var_bytes_len(2);
        assert!(matches!(
            reader.read_var_bytes(),
            Err(CodecError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_odd_length() {
        assert!(matches!(
            StreamReader::from_hex("abc"),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_write_uint_range() {
        let mut writer = StreamWriter::new();
        writer.write_uint(0xffff, IntWidth::U16).unwrap();
        assert_eq!(writer.to_hex(), "ffff");
        assert!(matches!(
            writer.write_uint(0x1_0000, IntWidth::U16),
            Err(CodecError::InvalidValue(_))
        ));
        assert_eq!(writer.len(), 2);
    }

    #[test]
    fn test_int_width_from_bytes() {
        assert_eq!(IntWidth::try_from(4).unwrap(), IntWidth::U32);
        assert!(matches!(IntWidth::try_from(3), Err(CodecError::InvalidValue(_))));
    }

    #[test]
    fn test_writer_chain() {
        let mut writer = StreamWriter::new();
        writer
            .write_u32(1)
            .write_var_str("abc")
            .write_address(&Address::governance())
            .write_bool(true);
        assert_eq!(
            writer.to_hex(),
            "0100000003616263000000000000000000000000000000000000000701"
        );
    }

    #[test]
    fn test_bigint_field() {
        let mut writer = StreamWriter::new();
        writer.write_bigint(&BigInt::from(1000u64)).write_bigint(&BigInt::zero());
        assert_eq!(writer.to_hex(), "02e80300");

        let mut reader = StreamReader::new(writer.as_bytes());
        assert_eq!(reader.read_bigint().unwrap(), BigInt::from(1000u64));
        assert_eq!(reader.read_bigint().unwrap(), BigInt::zero());
        assert!(reader.is_empty());
    }
}
