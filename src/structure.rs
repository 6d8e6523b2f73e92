//! Ordered field list for native-contract call parameters
//!
//! A [`Struct`] serializes to the plain concatenation of its fields in the
//! order they were added. There is no framing, so the reader of a blob must
//! already know the field layout of the operation it belongs to.

use crate::error::Result;
use crate::serialization::{BigInt, StreamWriter};
use crate::types::Address;

/// A single typed parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Length-prefixed byte string
    Bytes(Vec<u8>),
    /// Raw 20-byte address, no prefix
    Address(Address),
    /// Length-prefixed VM integer bytes
    Int(BigInt),
}

impl Field {
    pub fn encode(&self, writer: &mut StreamWriter) {
        match self {
            Field::Bytes(bytes) => {
                writer.write_var_bytes(bytes);
            }
            Field::Address(address) => {
                writer.write_address(address);
            }
            Field::Int(value) => {
                writer.write_bigint(value);
            }
        }
    }
}

impl From<Address> for Field {
    fn from(address: Address) -> Self {
        Field::Address(address)
    }
}

impl From<BigInt> for Field {
    fn from(value: BigInt) -> Self {
        Field::Int(value)
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        Field::Int(BigInt::from(value))
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Int(BigInt::from(value))
    }
}

impl From<Vec<u8>> for Field {
    fn from(bytes: Vec<u8>) -> Self {
        Field::Bytes(bytes)
    }
}

impl From<&[u8]> for Field {
    fn from(bytes: &[u8]) -> Self {
        Field::Bytes(bytes.to_vec())
    }
}

/// Heterogeneous, insertion-ordered parameter list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Struct {
    fields: Vec<Field>,
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one field
    pub fn add(&mut self, field: impl Into<Field>) -> &mut Self {
        self.fields.push(field.into());
        self
    }

    /// Append several fields, keeping their order
    pub fn add_all<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Append the UTF-8 bytes of `s` as a byte-string field
    pub fn add_str(&mut self, s: &str) -> &mut Self {
        self.add(s.as_bytes())
    }

    /// Append a byte-string field given as hex; bad hex fails here
    pub fn add_hex(&mut self, hex_str: &str) -> Result<&mut Self> {
        let bytes = hex::decode(hex_str)?;
        Ok(self.add(bytes))
    }

    /// Append a signed integer; negative values fail here
    pub fn add_i64(&mut self, value: i64) -> Result<&mut Self> {
        let value = BigInt::try_from(value)?;
        Ok(self.add(value))
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn write_to(&self, writer: &mut StreamWriter) {
        for field in &self.fields {
            field.encode(writer);
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut writer = StreamWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_empty_struct() {
        assert!(Struct::new().serialize().is_empty());
    }

    #[test]
    fn test_field_encodings() {
        let mut s = Struct::new();
        s.add_str("ab");
        assert_eq!(s.to_hex(), "026162");

        let mut s = Struct::new();
        s.add(Address::governance());
        assert_eq!(s.to_hex(), "0000000000000000000000000000000000000007");

        let mut s = Struct::new();
        s.add(0u64).add(255u64);
        assert_eq!(s.to_hex(), "0002ff00");
    }

    #[test]
    fn test_add_time_validation() {
        let mut s = Struct::new();
        assert!(matches!(s.add_hex("0g"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(s.add_i64(-5), Err(CodecError::InvalidValue(_))));
        assert!(s.is_empty());
        s.add_hex("beef").unwrap();
        assert_eq!(s.fields(), &[Field::Bytes(vec![0xbe, 0xef])]);
    }
}
