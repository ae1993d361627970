use criterion::{black_box, criterion_group, criterion_main, Criterion};
use murl_tokenizer::{PathTokenizer, QueryTokenizer, Tokenizer, UrlTokenizer};

fn bench_split(c: &mut Criterion) {
    let path = "/api/v2/users/1234/orders/5678/items/91011/details";
    let query = "page=1&limit=50&sort=created_at&order=desc&filter=active&q=widgets";
    let url = "https://user@shop.example.com:8443/api/v2/orders?page=1&limit=50#summary";

    let path_tok = PathTokenizer;
    c.bench_function("split_path", |b| {
        b.iter(|| black_box(path_tok.split(black_box(path))))
    });

    let query_tok = QueryTokenizer;
    c.bench_function("split_query", |b| {
        b.iter(|| black_box(query_tok.split(black_box(query))))
    });

    let url_tok = UrlTokenizer;
    c.bench_function("split_url", |b| {
        b.iter(|| black_box(url_tok.split(black_box(url))))
    });
}

fn bench_join(c: &mut Criterion) {
    let url_tok = UrlTokenizer;
    let parts: Vec<String> = url_tok
        .split("https://shop.example.com/api/v2/orders?page=1&limit=50")
        .iter()
        .map(|s| s.to_string())
        .collect();
    c.bench_function("join_url", |b| {
        b.iter(|| black_box(url_tok.join(black_box(&parts))))
    });
}

criterion_group!(benches, bench_split, bench_join);
criterion_main!(benches);
