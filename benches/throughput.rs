use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use std::hint::black_box;
use routemap::{
    route::{RequestTarget, Route},
    router::RouteCollection,
    UrlBuilder,
};

fn zoo_routes(cached: bool) -> RouteCollection<&'static str> {
    RouteCollection::with_defaults()
        .add(Route::new(Method::GET, "/", "root_handler"))
        .add(Route::new(Method::GET, "/zoo/animals", "get_animals"))
        .add(Route::new(Method::POST, "/zoo/animals", "create_animal"))
        .add(Route::new(Method::GET, "/zoo/animals/{id}", "get_animal"))
        .add(Route::new(Method::PUT, "/zoo/animals/{id}", "update_animal"))
        .add(Route::new(Method::GET, "/zoo/animals/{id}/toys/{toy_id}", "animal_toy"))
        .add(Route::new(
            Method::GET,
            "/zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}",
            "habitat_section",
        ))
        .add(Route::new(
            Method::POST,
            "/inventory/{warehouse_id}/feeds/{feed_id}/items/{item_id}/batches/{batch_id}",
            "post_item_batch",
        ))
        .add(Route::new(
            Method::GET,
            "/complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}",
            "complex_many_params",
        ))
        .add(Route::new(Method::HEAD, "/zoo/health", "health_check"))
        .with_pattern_cache(cached)
}

fn bench_match(c: &mut Criterion) {
    let cached = zoo_routes(true);
    let uncached = zoo_routes(false);
    let requests = [
        RequestTarget::new(Method::GET, "/zoo/animals"),
        RequestTarget::new(Method::GET, "/zoo/animals/123/toys/ball"),
        RequestTarget::new(Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
        RequestTarget::new(Method::GET, "/does/not/exist"),
    ];

    c.bench_function("match_cached", |b| {
        b.iter(|| {
            for req in &requests {
                black_box(cached.match_request(black_box(req)).ok());
            }
        })
    });

    c.bench_function("match_uncached", |b| {
        b.iter(|| {
            for req in &requests {
                black_box(uncached.match_request(black_box(req)).ok());
            }
        })
    });

    c.bench_function("match_with_params_cached", |b| {
        b.iter(|| {
            black_box(cached.match_with_params(black_box(&requests[1])).ok());
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let builder = UrlBuilder::default();
    let params = [("category", "cats"), ("id", "9"), ("habitat_id", "h1"), ("section_id", "north")];
    c.bench_function("build_path", |b| {
        b.iter(|| {
            black_box(
                builder
                    .build(
                        black_box("/zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}"),
                        &params,
                        false,
                    )
                    .ok(),
            )
        })
    });
}

criterion_group!(benches, bench_match, bench_build);
criterion_main!(benches);
