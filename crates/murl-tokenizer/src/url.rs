//! Full-URL tokenizer: reserved separators become their own tokens.

use crate::traits::Tokenizer;

/// Reserved single-character separators, in table order.
///
/// The codec assigns each of these a 3-bit table index, so the order here
/// is part of the wire format and must not change.
pub const RESERVED_SEPARATORS: [u8; 8] = *b":/@?=&#;";

fn is_separator(byte: u8) -> bool {
    RESERVED_SEPARATORS.contains(&byte)
}

/// Tokenizer for full URLs.
///
/// Every reserved separator becomes a single-character token and every
/// non-empty run between separators becomes one token; empty runs are
/// skipped since the separators themselves carry the structure. `join` is
/// plain concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlTokenizer;

impl Tokenizer for UrlTokenizer {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut start = 0;
        // Separators are ASCII, so byte positions are valid char boundaries.
        for (i, &byte) in text.as_bytes().iter().enumerate() {
            if is_separator(byte) {
                if i > start {
                    parts.push(&text[start..i]);
                }
                parts.push(&text[i..i + 1]);
                start = i + 1;
            }
        }
        if start < text.len() {
            parts.push(&text[start..]);
        }
        parts
    }

    fn join(&self, parts: &[String]) -> String {
        parts.concat()
    }
}
