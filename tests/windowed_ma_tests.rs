use tickbench::model::signal::Signal;
use tickbench::model::tick::MarketDataPoint;
use tickbench::strategy::windowed_ma::WindowedMaStrategy;
use tickbench::strategy::Strategy;

fn tick(price: f64) -> MarketDataPoint {
    MarketDataPoint::from_price(price)
}

#[test]
fn window_holds_the_last_k_prices_in_arrival_order() {
    let prices: Vec<f64> = (1..=20).map(|i| i as f64 * 3.5).collect();
    let mut strat = WindowedMaStrategy::new(5).unwrap();
    for (i, &p) in prices.iter().enumerate() {
        strat.on_tick(&tick(p)).unwrap();
        let start = (i + 1).saturating_sub(5);
        assert_eq!(
            strat.window(),
            prices[start..=i].to_vec(),
            "window contents wrong after tick {}",
            i
        );
    }
}

#[test]
fn running_sum_stays_on_the_window_contents() {
    let prices: Vec<f64> = (0..500)
        .map(|i| 100.0 + ((i as f64) * 0.37).sin() * 25.0)
        .collect();
    let mut strat = WindowedMaStrategy::new(7).unwrap();
    for (i, &p) in prices.iter().enumerate() {
        strat.on_tick(&tick(p)).unwrap();
        let direct: f64 = strat.window().iter().sum();
        let diff = (strat.running_sum() - direct).abs();
        assert!(
            diff <= 1e-9 * direct.abs().max(1.0),
            "sum drifted by {} at tick {}",
            diff,
            i
        );
    }
}

#[test]
fn state_size_is_identical_across_stream_lengths() {
    let mut peaks = Vec::new();
    for &n in &[10_usize, 10_000, 1_000_000] {
        let mut strat = WindowedMaStrategy::new(50).unwrap();
        let mut peak = strat.memory_bytes();
        for i in 0..n {
            strat.on_tick(&tick(100.0 + (i % 97) as f64)).unwrap();
            peak = peak.max(strat.memory_bytes());
        }
        peaks.push(peak);
    }
    assert_eq!(peaks[0], peaks[1]);
    assert_eq!(peaks[1], peaks[2]);
}

#[test]
fn emits_the_expected_sequence_for_a_short_scenario() {
    let mut strat = WindowedMaStrategy::new(3).unwrap();
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
fn equal_price_and_mean_holds() {
    let mut strat = WindowedMaStrategy::new(2).unwrap();
    assert_eq!(strat.on_tick(&tick(10.0)).unwrap(), None);
    assert_eq!(strat.on_tick(&tick(10.0)).unwrap(), Some(Signal::Hold));
}

#[test]
fn malformed_price_is_rejected_and_window_untouched() {
    let mut strat = WindowedMaStrategy::new(3).unwrap();
    strat.on_tick(&tick(100.0)).unwrap();
    strat.on_tick(&tick(101.0)).unwrap();

    assert!(strat.on_tick(&tick(f64::NAN)).is_err());
    assert!(strat.on_tick(&tick(f64::NEG_INFINITY)).is_err());
    assert_eq!(strat.window(), vec![100.0, 101.0]);
    assert_eq!(strat.len(), 2);

    let sig = strat.on_tick(&tick(102.0)).unwrap();
    assert!(sig.is_some());
}
