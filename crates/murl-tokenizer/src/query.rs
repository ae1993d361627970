//! Query-string tokenizer: `&`-separated pairs, three tokens per pair.

use crate::traits::Tokenizer;

/// Tokenizer for URL query strings.
///
/// Each `&`-separated pair contributes exactly three tokens: a pair that
/// contains `=` becomes (key, `"="`, value); a pair without `=` becomes
/// (pair, `""`, `""`). The fixed group size lets `join` reassemble pairs
/// without re-parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryTokenizer;

impl Tokenizer for QueryTokenizer {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut parts = Vec::new();
        for pair in text.split('&') {
            match pair.split_once('=') {
                Some((key, value)) => {
                    parts.push(key);
                    parts.push("=");
                    parts.push(value);
                }
                None => {
                    parts.push(pair);
                    parts.push("");
                    parts.push("");
                }
            }
        }
        parts
    }

    fn join(&self, parts: &[String]) -> String {
        parts
            .chunks(3)
            .map(|group| group.concat())
            .collect::<Vec<_>>()
            .join("&")
    }
}
