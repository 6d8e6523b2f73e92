//! # Ontology Governance Codec
//!
//! Binary encoding for Ontology native-contract call parameters and the
//! governance contract's storage records.
//!
//! This crate provides the codec layer only: typed values go in, an even-length
//! hex blob comes out, and hex fetched from contract storage is decoded back
//! into typed records. Fetching, transaction envelopes and signing belong to the
//! caller.
//!
//! ## Layout
//!
//! - [`serialization`]: variable-length prefixes, the stream reader/writer,
//!   length-prefixed byte strings and VM big integers
//! - [`structure`]: ordered parameter lists for contract calls
//! - [`governance`]: record codecs, storage keys, queries and call builders
//!
//! ## Usage
//!
//! ```rust
//! use ontology_governance_codec::governance::{PeerPoolItem, Record};
//! use ontology_governance_codec::types::Address;
//!
//! let item = PeerPoolItem {
//!     index: 1,
//!     peer_pubkey: "abc".to_string(),
//!     address: Address::new([0u8; 20]),
//!     status: 1,
//!     init_pos: 1000,
//!     total_pos: 2000,
//! };
//! let hex = item.to_hex();
//! assert_eq!(PeerPoolItem::from_hex(&hex).unwrap(), item);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod governance;
pub mod serialization;
pub mod structure;
pub mod types;

pub use error::{CodecError, Result};
pub use serialization::{BigInt, IntWidth, StreamReader, StreamWriter};
pub use structure::{Field, Struct};
pub use types::Address;
