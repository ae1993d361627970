//! Control byte: the leading tag byte of every record.
//!
//! The byte is bit-partitioned into a 2-bit embedding selector in the high
//! bits plus mode-specific fields. Rather than overlapping in-memory views,
//! every mode is an explicit enum variant constructed and parsed with bit
//! masks, so each case is independently testable and layout-free.

use crate::error::{MurlError, Result};

/// Embedding selector values (bits 7-6).
const EMBED_INT: u8 = 0b00;
const EMBED_NONE: u8 = 0b01;
const EMBED_ORDINAL: u8 = 0b10;
const EMBED_LENGTH: u8 = 0b11;

/// Coding values (bits 5-4, only when the embedding selector is `none`).
const CODING_WIDTH: u8 = 0b00;
const CODING_ENCAPSULATED: u8 = 0b01;
const CODING_INDEXED: u8 = 0b10;
const CODING_BASE64: u8 = 0b11;

/// Data-type flag (bit 3): set for string data, clear for integer data.
const DATA_STRING: u8 = 0b1000;

/// Encapsulation identifier for JWTs. Identifier 0 is reserved.
pub const ENCAP_JWT: u8 = 1;

/// Decoded form of a record's leading byte.
///
/// `width` fields are the external byte count (1-8); the wire carries
/// `width - 1` in 3 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlByte {
    /// Integer 0-63 embedded in the low 6 bits; no payload.
    SmallInt(u8),
    /// Interned ordinal 0-63 embedded in the low 6 bits; no payload.
    SmallOrdinal(u8),
    /// Literal length 0-63 embedded in the low 6 bits; raw bytes follow.
    SmallLength(u8),
    /// Big-endian integer of `width` bytes follows.
    WideInt { width: u8 },
    /// Length of `width` bytes follows, then that many raw bytes.
    WideLength { width: u8 },
    /// Reserved separator character at the given table index; no payload.
    Separator { index: u8 },
    /// Interned ordinal of `width` bytes follows.
    WideOrdinal { width: u8 },
    /// Encapsulated structured value; sub-records follow.
    Encapsulated { id: u8 },
    /// Base64url payload: decoded length of `width` bytes, then the
    /// decoded bytes.
    Base64 { width: u8 },
}

impl ControlByte {
    pub fn encode(self) -> u8 {
        match self {
            Self::SmallInt(value) => EMBED_INT << 6 | value & 0x3f,
            Self::SmallOrdinal(ordinal) => EMBED_ORDINAL << 6 | ordinal & 0x3f,
            Self::SmallLength(length) => EMBED_LENGTH << 6 | length & 0x3f,
            Self::WideInt { width } => {
                EMBED_NONE << 6 | CODING_WIDTH << 4 | (width - 1) & 0x07
            }
            Self::WideLength { width } => {
                EMBED_NONE << 6 | CODING_WIDTH << 4 | DATA_STRING | (width - 1) & 0x07
            }
            Self::Separator { index } => {
                EMBED_NONE << 6 | CODING_INDEXED << 4 | index & 0x07
            }
            Self::WideOrdinal { width } => {
                EMBED_NONE << 6 | CODING_INDEXED << 4 | DATA_STRING | (width - 1) & 0x07
            }
            Self::Encapsulated { id } => {
                EMBED_NONE << 6 | CODING_ENCAPSULATED << 4 | id & 0x0f
            }
            Self::Base64 { width } => {
                EMBED_NONE << 6 | CODING_BASE64 << 4 | DATA_STRING | (width - 1) & 0x07
            }
        }
    }

    /// Parse a control byte.
    ///
    /// The base64-coding-of-integer-type combination is reserved in the tag
    /// space and never produced by the encoder; it decodes to an explicit
    /// error so hostile or future-version input cannot slip through.
    pub fn decode(byte: u8) -> Result<Self> {
        let low = byte & 0x3f;
        match byte >> 6 {
            EMBED_INT => Ok(Self::SmallInt(low)),
            EMBED_ORDINAL => Ok(Self::SmallOrdinal(low)),
            EMBED_LENGTH => Ok(Self::SmallLength(low)),
            _ => {
                let width = (byte & 0x07) + 1;
                let is_string = byte & DATA_STRING != 0;
                match byte >> 4 & 0b11 {
                    CODING_WIDTH if is_string => Ok(Self::WideLength { width }),
                    CODING_WIDTH => Ok(Self::WideInt { width }),
                    CODING_ENCAPSULATED => {
                        Ok(Self::Encapsulated { id: byte & 0x0f })
                    }
                    CODING_INDEXED if is_string => Ok(Self::WideOrdinal { width }),
                    CODING_INDEXED => Ok(Self::Separator { index: byte & 0x07 }),
                    _ if is_string => Ok(Self::Base64 { width }),
                    _ => Err(MurlError::ReservedControlByte(byte)),
                }
            }
        }
    }
}
