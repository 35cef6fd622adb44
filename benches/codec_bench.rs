use browsercookies::cookies::attributes::CookieAttributes;
use browsercookies::cookies::codec::CookieCodec;
use browsercookies::cookies::jar::EmulatedCookieJar;
use browsercookies::cookies::storage::InMemoryStorage;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_cookie_set(c: &mut Criterion) {
    let cookies = CookieCodec::new(InMemoryStorage::new());
    let options = CookieAttributes::new()
        .expires(30)
        .domain("www.test.com")
        .secure(true);

    c.bench_function("cookie_set", |b| {
        b.iter(|| {
            cookies.set(
                black_box("báñâñâ"),
                black_box("¿yéllów? with spaces"),
                Some(black_box(&options)),
            );
        })
    });
}

fn benchmark_cookie_get(c: &mut Criterion) {
    let cookies = CookieCodec::new(EmulatedCookieJar::new());
    // Pre-populate
    for i in 0..100 {
        cookies.set(&format!("cookie{}", i), "val", None);
    }

    c.bench_function("cookie_get", |b| {
        b.iter(|| {
            black_box(cookies.get(black_box("cookie99")));
        })
    });

    c.bench_function("cookie_all", |b| {
        b.iter(|| {
            black_box(cookies.all());
        })
    });
}

criterion_group!(benches, benchmark_cookie_set, benchmark_cookie_get);
criterion_main!(benches);
