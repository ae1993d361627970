//! Append-only string interning store.
//!
//! Maps distinct byte strings to dense ordinals assigned in first-occurrence
//! order. Entries are byte strings rather than `str` because encapsulated
//! payloads (JWT headers) intern base64url-decoded bytes that need not be
//! UTF-8. Ordinals are never reused or reassigned while the store lives;
//! the store outlives individual compact/expand calls on purpose, forming a
//! session-scoped dictionary.

use std::collections::HashMap;

use crate::error::{MurlError, Result};

#[derive(Debug, Default)]
pub struct InternedStore {
    entries: Vec<Vec<u8>>,
    index: HashMap<Vec<u8>, u32>,
}

impl InternedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ordinal for `bytes`, assigning the next dense ordinal on
    /// first occurrence.
    pub fn intern(&mut self, bytes: &[u8]) -> u32 {
        if let Some(&ordinal) = self.index.get(bytes) {
            return ordinal;
        }
        let ordinal = self.entries.len() as u32;
        self.entries.push(bytes.to_vec());
        self.index.insert(bytes.to_vec(), ordinal);
        ordinal
    }

    /// Look up a previously assigned ordinal.
    ///
    /// An ordinal this store never assigned signals a corrupt stream or a
    /// store/stream ordering mismatch.
    pub fn get(&self, ordinal: u32) -> Result<&[u8]> {
        self.entries
            .get(ordinal as usize)
            .map(Vec::as_slice)
            .ok_or(MurlError::DictionaryMiss(ordinal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, invalidating every previously returned ordinal.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
