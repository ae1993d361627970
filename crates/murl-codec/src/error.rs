use thiserror::Error;

#[derive(Error, Debug)]
pub enum MurlError {
    #[error("Invalid base64url input: {0}")]
    InvalidBase64(String),
    #[error("Reserved control byte: {0:#04x}")]
    ReservedControlByte(u8),
    #[error("Unknown encapsulation identifier: {0}")]
    UnknownEncapsulation(u8),
    #[error("Interned ordinal never assigned: {0}")]
    DictionaryMiss(u32),
    #[error("Truncated stream: needed {needed} bytes, {available} available")]
    TruncatedStream { needed: usize, available: usize },
    #[error("Corrupt stream: {0}")]
    CorruptStream(String),
    #[error("Token count {0} exceeds the 15-bit prefix limit")]
    TooManyTokens(usize),
}

pub type Result<T> = std::result::Result<T, MurlError>;
