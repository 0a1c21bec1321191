extern crate criterion;

use criterion::*;
use dec_big_num::BigInt;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    group.sample_size(10);
    group.bench_function("fibo(3000)", move |b| {
        let n = BigInt::from(3000);
        b.iter(|| black_box(&n).fibo())
    });
    group.bench_function("fact(50)", move |b| {
        let n = BigInt::from(50);
        b.iter(|| black_box(&n).fact())
    });
    group.bench_function("collatz(989345275647)", move |b| {
        let n: BigInt = "989345275647".into();
        b.iter(|| black_box(&n).collatz(false))
    });
    group.finish();

    let mut group = c.benchmark_group("division");
    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".into();
    let d: BigInt = "526738495607659438721653478560954837265378495607".into();
    group.bench_function("div_rem", move |b| {
        b.iter(|| black_box(&a).div_rem(black_box(&d)))
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
