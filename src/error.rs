//! Error types for the governance codec

use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CodecError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(Cow<'static, str>),

    #[error("Invalid parameters: {0}")]
    InvalidParams(Cow<'static, str>),

    #[error("Invalid hex: {0}")]
    InvalidHex(Cow<'static, str>),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(Cow<'static, str>),

    #[error("Invalid UTF-8 in string field: {0}")]
    InvalidUtf8(Cow<'static, str>),

    #[error("Storage error: {0}")]
    Storage(Cow<'static, str>),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(Cow::Owned(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
