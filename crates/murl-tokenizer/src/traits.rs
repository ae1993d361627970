/// Trait for splitting text into tokens and rejoining them.
///
/// Implementations must be lossless: `join` applied to the output of
/// `split` reproduces the original text byte for byte. Token order is
/// significant and preserved.
pub trait Tokenizer {
    /// Split text into an ordered sequence of tokens.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Join tokens back into text.
    fn join(&self, parts: &[String]) -> String;
}
