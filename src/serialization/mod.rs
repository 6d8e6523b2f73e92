//! Wire format serialization/deserialization
//!
//! Encoders and decoders for the native-contract parameter format and the
//! governance storage records. Integers are little-endian; big integers use
//! the VM's reversed-endian layout. At the boundary every value travels as an
//! even-length hex string.

pub mod bigint;
pub mod bytes;
pub mod stream;
pub mod varint;

pub use bigint::BigInt;
pub use bytes::{encode_var_bytes, encode_var_str_hex, split_var_bytes};
pub use stream::{IntWidth, StreamReader, StreamWriter};
pub use varint::{decode_varint, encode_varint, varint_len};
