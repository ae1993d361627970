//! murl-codec — tagged binary codec for URL components.
//!
//! Compresses tokenized paths, query strings, and full URLs into a compact
//! byte stream and reconstructs the original text losslessly. Each token is
//! encoded as one control byte plus an optional payload:
//!
//! ```text
//! 0 0  n n n n n n   embedded integer, value = n (0-63)
//! 0 1  0 0 0 w w w   integer, external width = w+1 bytes, big-endian value
//! 0 1  0 0 1 w w w   string, external length in w+1 bytes, then raw bytes
//! 0 1  1 0 0 i i i   separator character at table index i (no payload)
//! 0 1  1 0 1 w w w   interned-string ordinal, external width = w+1 bytes
//! 0 1  0 1 c c c c   encapsulated value, identifier c (1 = JWT)
//! 0 1  1 1 1 w w w   base64-decoded string, length width = w+1 bytes
//! 1 0  i i i i i i   embedded interned-string ordinal = i (0-63)
//! 1 1  s s s s s s   embedded string length = s (0-63), then raw bytes
//! ```
//!
//! Repeated tokens are deduplicated through a session-scoped interning
//! dictionary owned by the [`Compactor`]; a stream can only be expanded by a
//! compactor whose dictionary has seen at least the interning history the
//! stream references.

pub mod base64url;
pub mod compactor;
pub mod control;
pub mod error;
pub mod intern;
pub mod varint;

pub use compactor::{
    CompactionStats, Compactor, PathCompactor, QueryCompactor, UrlCompactor,
};
pub use error::{MurlError, Result};

#[cfg(test)]
mod tests;
