//! Path tokenizer: splits on `/`, keeping empty segments.

use crate::traits::Tokenizer;

/// Tokenizer for URL path strings.
///
/// `"a//b"` splits into `["a", "", "b"]`; a lone `"/"` into `["", ""]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTokenizer;

impl Tokenizer for PathTokenizer {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split('/').collect()
    }

    fn join(&self, parts: &[String]) -> String {
        parts.join("/")
    }
}
