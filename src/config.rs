//! Configuration for the governance codec
//!
//! Provides the native contract identifiers queried by the governance getters
//! and the decode limits applied to untrusted storage blobs. Settings can be
//! loaded from environment variables, deserialized from a config file, or
//! passed programmatically.

use crate::types::Address;
use serde::{Deserialize, Serialize};

/// Native contract identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsConfig {
    /// Governance contract (default: 0000000000000000000000000000000000000007)
    #[serde(default = "Address::governance")]
    pub governance: Address,

    /// ONT token contract (default: ...0001)
    #[serde(default = "Address::ont")]
    pub ont: Address,

    /// ONG token contract (default: ...0002)
    #[serde(default = "Address::ong")]
    pub ong: Address,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            governance: Address::governance(),
            ont: Address::ont(),
            ong: Address::ong(),
        }
    }
}

/// Decode limits for blobs fetched from storage
///
/// Truncated input is always caught by the reader; these limits reject
/// oversized declared lengths and counts before any work is done on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum entries accepted in one peer-pool blob
    #[serde(default = "default_max_peer_pool_entries")]
    pub max_peer_pool_entries: u32,

    /// Maximum declared length of a length-prefixed byte string
    #[serde(default = "default_max_var_bytes_len")]
    pub max_var_bytes_len: usize,
}

fn default_max_peer_pool_entries() -> u32 {
    10_000
}

fn default_max_var_bytes_len() -> usize {
    16 * 1024 * 1024
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_peer_pool_entries: default_max_peer_pool_entries(),
            max_var_bytes_len: default_max_var_bytes_len(),
        }
    }
}

/// Debugging switches
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log the hex storage key of every governance query at debug level
    #[serde(default)]
    pub log_storage_keys: bool,
}

/// Complete codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub contracts: ContractsConfig,

    #[serde(default)]
    pub limits: DecodeLimits,

    #[serde(default)]
    pub debug: DebugConfig,
}

impl CodecConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables keep their defaults:
    /// - `ONT_CODEC_GOVERNANCE_CONTRACT`, `ONT_CODEC_ONT_CONTRACT`,
    ///   `ONT_CODEC_ONG_CONTRACT` (40 hex digits)
    /// - `ONT_CODEC_MAX_PEER_POOL_ENTRIES`
    /// - `ONT_CODEC_MAX_VAR_BYTES_LEN`
    /// - `ONT_CODEC_LOG_STORAGE_KEYS` (`true`/`false`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ONT_CODEC_GOVERNANCE_CONTRACT") {
            if let Ok(addr) = Address::from_hex(&val) {
                config.contracts.governance = addr;
            }
        }
        if let Ok(val) = std::env::var("ONT_CODEC_ONT_CONTRACT") {
            if let Ok(addr) = Address::from_hex(&val) {
                config.contracts.ont = addr;
            }
        }
        if let Ok(val) = std::env::var("ONT_CODEC_ONG_CONTRACT") {
            if let Ok(addr) = Address::from_hex(&val) {
                config.contracts.ong = addr;
            }
        }

        if let Ok(val) = std::env::var("ONT_CODEC_MAX_PEER_POOL_ENTRIES") {
            if let Ok(max) = val.parse::<u32>() {
                config.limits.max_peer_pool_entries = max;
            }
        }
        if let Ok(val) = std::env::var("ONT_CODEC_MAX_VAR_BYTES_LEN") {
            if let Ok(max) = val.parse::<usize>() {
                config.limits.max_var_bytes_len = max;
            }
        }

        if let Ok(val) = std::env::var("ONT_CODEC_LOG_STORAGE_KEYS") {
            if let Ok(enabled) = val.parse::<bool>() {
                config.debug.log_storage_keys = enabled;
            }
        }

        config
    }
}

/// Global codec configuration instance
static GLOBAL_CODEC_CONFIG: std::sync::OnceLock<CodecConfig> = std::sync::OnceLock::new();

/// Initialize global codec configuration
///
/// Call once at startup. Returns the rejected config if the global was
/// already initialized. Readers built before this call keep the limits they
/// were created with.
pub fn init_codec_config(config: CodecConfig) -> Result<(), CodecConfig> {
    GLOBAL_CODEC_CONFIG.set(config)
}

/// Get global codec configuration
///
/// Returns the global config if initialized, otherwise
/// [`CodecConfig::from_env`].
pub fn get_codec_config() -> CodecConfig {
    GLOBAL_CODEC_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(CodecConfig::from_env)
}
