use crate::*;

fn roundtrip<T: Tokenizer>(tok: &T, text: &str) {
    let parts: Vec<String> = tok.split(text).iter().map(|s| s.to_string()).collect();
    assert_eq!(tok.join(&parts), text, "tokenizer round trip for {text:?}");
}

// ========== Path ==========

#[test]
fn test_path_split_basic() {
    let tok = PathTokenizer;
    assert_eq!(tok.split("a/b/c"), vec!["a", "b", "c"]);
}

#[test]
fn test_path_split_empty_segments() {
    let tok = PathTokenizer;
    assert_eq!(tok.split("/"), vec!["", ""]);
    assert_eq!(tok.split("a//b"), vec!["a", "", "b"]);
    assert_eq!(tok.split(""), vec![""]);
}

#[test]
fn test_path_roundtrip() {
    let tok = PathTokenizer;
    for text in ["", "/", "///", "1/", "/2", "a/b/c/d", "0/1/2/3"] {
        roundtrip(&tok, text);
    }
}

// ========== Query ==========

#[test]
fn test_query_split_pair() {
    let tok = QueryTokenizer;
    assert_eq!(tok.split("key=value"), vec!["key", "=", "value"]);
}

#[test]
fn test_query_split_no_equals() {
    let tok = QueryTokenizer;
    assert_eq!(tok.split("flag"), vec!["flag", "", ""]);
}

#[test]
fn test_query_split_triple_per_pair() {
    let tok = QueryTokenizer;
    let parts = tok.split("a=1&b=2&c");
    assert_eq!(parts.len(), 9);
    assert_eq!(parts, vec!["a", "=", "1", "b", "=", "2", "c", "", ""]);
}

#[test]
fn test_query_roundtrip() {
    let tok = QueryTokenizer;
    for text in ["", "&&", "&key=&", "key=0", "number=0&string=alma", "a=b=c"] {
        roundtrip(&tok, text);
    }
}

// ========== URL ==========

#[test]
fn test_url_split_separators() {
    let tok = UrlTokenizer;
    assert_eq!(
        tok.split("https://example.com/a?b=1"),
        vec!["https", ":", "/", "/", "example.com", "/", "a", "?", "b", "=", "1"]
    );
}

#[test]
fn test_url_split_skips_empty_runs() {
    let tok = UrlTokenizer;
    assert_eq!(tok.split("//"), vec!["/", "/"]);
}

#[test]
fn test_url_separator_table_order() {
    assert_eq!(&RESERVED_SEPARATORS, b":/@?=&#;");
}

#[test]
fn test_url_roundtrip() {
    let tok = UrlTokenizer;
    for text in [
        "",
        "https://user@example.com:8080/a/b?k=v&x=y#frag",
        ":;#",
        "plain",
        "a=b;c=d",
    ] {
        roundtrip(&tok, text);
    }
}

#[test]
fn test_url_multibyte_run() {
    let tok = UrlTokenizer;
    assert_eq!(tok.split("caf\u{e9}/men\u{fc}"), vec!["caf\u{e9}", "/", "men\u{fc}"]);
    roundtrip(&tok, "caf\u{e9}/men\u{fc}");
}
