use criterion::{black_box, criterion_group, criterion_main, Criterion};
use murl_codec::{PathCompactor, QueryCompactor, UrlCompactor};
use rand::Rng;

fn generate_paths(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let segments = ["api", "v2", "users", "orders", "items", "details", "search"];
    (0..n)
        .map(|_| {
            let depth = rng.gen_range(2..6);
            let mut path = String::new();
            for _ in 0..depth {
                path.push('/');
                if rng.gen_bool(0.3) {
                    path.push_str(&rng.gen_range(0..100_000u32).to_string());
                } else {
                    path.push_str(segments[rng.gen_range(0..segments.len())]);
                }
            }
            path
        })
        .collect()
}

fn generate_queries(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let keys = ["page", "limit", "sort", "order", "filter", "q"];
    (0..n)
        .map(|_| {
            let pairs = rng.gen_range(1..6);
            (0..pairs)
                .map(|_| {
                    format!(
                        "{}={}",
                        keys[rng.gen_range(0..keys.len())],
                        rng.gen_range(0..10_000u32)
                    )
                })
                .collect::<Vec<_>>()
                .join("&")
        })
        .collect()
}

fn bench_compact(c: &mut Criterion) {
    let paths = generate_paths(1000);
    c.bench_function("compact_paths_1k", |b| {
        b.iter(|| {
            let mut compactor = PathCompactor::default();
            for path in &paths {
                black_box(compactor.compact(black_box(path)).unwrap());
            }
        })
    });

    let queries = generate_queries(1000);
    c.bench_function("compact_queries_1k", |b| {
        b.iter(|| {
            let mut compactor = QueryCompactor::default();
            for query in &queries {
                black_box(compactor.compact(black_box(query)).unwrap());
            }
        })
    });
}

fn bench_expand(c: &mut Criterion) {
    let paths = generate_paths(1000);
    let mut compactor = PathCompactor::default();
    let encoded: Vec<Vec<u8>> = paths
        .iter()
        .map(|p| compactor.compact(p).unwrap())
        .collect();
    c.bench_function("expand_paths_1k", |b| {
        b.iter(|| {
            for enc in &encoded {
                black_box(compactor.expand(black_box(enc)).unwrap());
            }
        })
    });
}

fn bench_roundtrip_url(c: &mut Criterion) {
    let url = "https://user@shop.example.com:8443/api/v2/orders?page=1&limit=50#summary";
    c.bench_function("roundtrip_url", |b| {
        let mut compactor = UrlCompactor::default();
        b.iter(|| {
            let enc = compactor.compact(black_box(url)).unwrap();
            black_box(compactor.expand(&enc).unwrap())
        })
    });
}

criterion_group!(benches, bench_compact, bench_expand, bench_roundtrip_url);
criterion_main!(benches);
