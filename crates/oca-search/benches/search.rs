use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;

use oca_search::{
    divisors, find_order, max_period, sylvester_matrix, LinearRule, MaxPeriodSearch, SearchConfig,
};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for parallel in [false, true] {
        let name = if parallel {
            "diameter_5_parallel"
        } else {
            "diameter_5_sequential"
        };
        let search = MaxPeriodSearch::with_config(SearchConfig {
            diameter: 5,
            parallel,
        })
        .unwrap();
        group.bench_function(name, |b| {
            b.iter(|| search.run().unwrap());
        });
    }
    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let degree = 8;
    let period: BigUint = max_period(degree);
    let divs = divisors(&period);
    let p1 = LinearRule::from_index(0, degree + 1).unwrap();
    let p2 = LinearRule::from_index(5, degree + 1).unwrap();
    let matrix = sylvester_matrix(p1.coefficients(), p2.coefficients()).unwrap();
    let bit_len = period.bits() as usize;

    let mut group = c.benchmark_group("order");
    group.bench_function("find_order_degree_8", |b| {
        b.iter(|| find_order(&matrix, &divs, bit_len).unwrap());
    });
    group.bench_function("pow_max_period_degree_8", |b| {
        b.iter(|| matrix.pow(&period, bit_len).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_order);
criterion_main!(benches);
