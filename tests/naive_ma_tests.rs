use tickbench::model::signal::Signal;
use tickbench::model::tick::MarketDataPoint;
use tickbench::strategy::naive_ma::NaiveMaStrategy;
use tickbench::strategy::Strategy;

fn tick(price: f64) -> MarketDataPoint {
    MarketDataPoint::from_price(price)
}

#[test]
fn withholds_signals_until_window_is_full() {
    let mut strat = NaiveMaStrategy::new(4).unwrap();
    for &p in &[100.0, 101.0, 102.0] {
        assert_eq!(strat.on_tick(&tick(p)).unwrap(), None);
    }
    assert!(strat.on_tick(&tick(103.0)).unwrap().is_some());
}

#[test]
fn mean_uses_only_the_trailing_window() {
    let mut strat = NaiveMaStrategy::new(2).unwrap();
    strat.on_tick(&tick(10.0)).unwrap();
    strat.on_tick(&tick(20.0)).unwrap();
    // mean of [20, 90] is 55; the 10 from three ticks ago must not count
    let sig = strat.on_tick(&tick(90.0)).unwrap();
    assert_eq!(sig, Some(Signal::Buy));
    assert!((strat.mean().unwrap() - 55.0).abs() < 1e-12);
}

#[test]
fn emits_the_expected_sequence_for_a_short_scenario() {
    let mut strat = NaiveMaStrategy::new(3).unwrap();
    let expected = [
        None,
        None,
        Some(Signal::Buy),
        Some(Signal::Sell),
        Some(Signal::Buy),
    ];
    for (&p, &want) in [10.0, 20.0, 30.0, 5.0, 50.0].iter().zip(expected.iter()) {
        let got = strat.on_tick(&tick(p)).unwrap();
        assert_eq!(got, want, "price {} produced {:?}", p, got);
    }
}

#[test]
fn history_and_memory_grow_with_the_stream() {
    let mut short = NaiveMaStrategy::new(10).unwrap();
    for i in 0..100 {
        short.on_tick(&tick(100.0 + i as f64)).unwrap();
    }

    let mut long = NaiveMaStrategy::new(10).unwrap();
    for i in 0..10_000 {
        long.on_tick(&tick(100.0 + (i % 97) as f64)).unwrap();
    }

    assert_eq!(short.history_len(), 100);
    assert_eq!(long.history_len(), 10_000);
    assert!(
        long.memory_bytes() > short.memory_bytes(),
        "unbounded history should keep allocating: {} vs {}",
        long.memory_bytes(),
        short.memory_bytes()
    );
}

#[test]
fn malformed_price_is_rejected_and_history_untouched() {
    let mut strat = NaiveMaStrategy::new(3).unwrap();
    strat.on_tick(&tick(100.0)).unwrap();

    assert!(strat.on_tick(&tick(f64::NAN)).is_err());
    assert!(strat.on_tick(&tick(f64::INFINITY)).is_err());
    assert_eq!(strat.history_len(), 1);

    // the stream keeps going after a rejected tick
    strat.on_tick(&tick(101.0)).unwrap();
    let sig = strat.on_tick(&tick(102.0)).unwrap();
    assert!(sig.is_some());
}
