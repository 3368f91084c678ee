use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tickbench::model::tick::MarketDataPoint;
use tickbench::strategy::naive_ma::NaiveMaStrategy;
use tickbench::strategy::windowed_ma::WindowedMaStrategy;
use tickbench::strategy::Strategy;

fn make_ticks(n: usize) -> Vec<MarketDataPoint> {
    (0..n)
        .map(|i| {
            let trend = (i as f64) * 0.001;
            let swing = ((i as f64) * 0.1).sin() * 0.5;
            MarketDataPoint::from_price(100.0 + trend + swing)
        })
        .collect()
}

fn feed_all(strategy: &mut dyn Strategy, ticks: &[MarketDataPoint]) {
    for tick in ticks {
        let signal = strategy.on_tick(black_box(tick)).unwrap();
        black_box(signal);
    }
}

fn bench_naive_10k(c: &mut Criterion) {
    let ticks = make_ticks(10_000);
    c.bench_function("naive_ma_10k_w50", |b| {
        b.iter(|| {
            let mut strategy = NaiveMaStrategy::new(50).unwrap();
            feed_all(&mut strategy, &ticks);
        });
    });
}

fn bench_windowed_10k(c: &mut Criterion) {
    let ticks = make_ticks(10_000);
    c.bench_function("windowed_ma_10k_w50", |b| {
        b.iter(|| {
            let mut strategy = WindowedMaStrategy::new(50).unwrap();
            feed_all(&mut strategy, &ticks);
        });
    });
}

fn bench_windowed_100k(c: &mut Criterion) {
    let ticks = make_ticks(100_000);
    c.bench_function("windowed_ma_100k_w50", |b| {
        b.iter(|| {
            let mut strategy = WindowedMaStrategy::new(50).unwrap();
            feed_all(&mut strategy, &ticks);
        });
    });
}

criterion_group!(benches, bench_naive_10k, bench_windowed_10k, bench_windowed_100k);
criterion_main!(benches);
