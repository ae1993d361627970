//! Separator-based tokenizers for URL components.
//!
//! A tokenizer splits a path, query string, or full URL into an ordered
//! sequence of textual tokens and joins them back, such that
//! `join(split(x)) == x` for every input the variant accepts. Tokenizers
//! carry no encoding logic; the binary codec lives in `murl-codec`.

pub mod path;
pub mod query;
pub mod traits;
pub mod url;

pub use path::PathTokenizer;
pub use query::QueryTokenizer;
pub use traits::Tokenizer;
pub use url::{UrlTokenizer, RESERVED_SEPARATORS};

#[cfg(test)]
mod tests;
