use bubble_risk_dashboard::domain::sentiment::{
    SampleBounds, TrendParams, generate_history, generate_trend,
};
use chrono::NaiveDate;
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn zero_noise_and_cycle_is_linear_interpolation() {
    let params = TrendParams::new(10.0, 20.0, 0.0, 0.0);
    let mut rng = StdRng::seed_from_u64(7);
    let values = generate_trend(&params, 11, &mut rng);

    assert_eq!(values.len(), 11);
    for (i, value) in values.iter().enumerate() {
        let expected = 10.0 + i as f64;
        assert!((value - expected).abs() < 1e-9, "step {i}: {value} != {expected}");
    }
}

#[test]
fn endpoints_hit_start_and_end_without_noise() {
    let params = TrendParams::new(80.0, 195.0, 0.0, 25.0);
    let mut rng = StdRng::seed_from_u64(1);
    let values = generate_trend(&params, 240, &mut rng);

    // sin(0) and sin(6π) are both (numerically) zero
    assert!((values[0] - 80.0).abs() < 0.011);
    assert!((values[239] - 195.0).abs() < 0.011);
}

#[test]
fn noise_stays_within_half_volatility() {
    let params = TrendParams::new(50.0, 50.0, 4.0, 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    let values = generate_trend(&params, 500, &mut rng);

    assert!(values.iter().all(|v| (v - 50.0).abs() <= 2.0 + 0.005));
    assert!(values.iter().any(|v| (v - 50.0).abs() > 0.01), "noise never applied");
}

#[test]
fn values_have_at_most_two_decimals() {
    let params = TrendParams::new(0.95, 0.55, 0.1, 0.2);
    let mut rng = StdRng::seed_from_u64(3);
    for value in generate_trend(&params, 240, &mut rng) {
        let scaled = value * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "{value} has extra precision");
    }
}

#[test]
fn same_seed_reproduces_series() {
    let params = TrendParams::new(24.0, 35.0, 2.0, 8.0);
    let a = generate_trend(&params, 240, &mut StdRng::seed_from_u64(99));
    let b = generate_trend(&params, 240, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn history_applies_bounds() {
    let params = TrendParams::new(1.0, -1.0, 2.0, 3.0);
    let mut rng = StdRng::seed_from_u64(11);
    let history = generate_history(&params, SampleBounds::Floor(0.5), 120, today(), &mut rng);

    assert_eq!(history.len(), 120);
    assert!(history.iter().all(|p| p.value >= 0.5));
}

#[test]
fn history_rounds_counts_to_whole_numbers() {
    let params = TrendParams::new(15.0, 35.0, 5.0, 20.0);
    let mut rng = StdRng::seed_from_u64(5);
    let history = generate_history(&params, SampleBounds::WholeFloor(0.0), 240, today(), &mut rng);

    assert!(history.iter().all(|p| p.value >= 0.0 && p.value.fract() == 0.0));
}

#[test]
fn history_is_labelled_oldest_first() {
    let params = TrendParams::new(1.0, 2.0, 0.0, 0.0);
    let mut rng = StdRng::seed_from_u64(0);
    let history = generate_history(&params, SampleBounds::Unbounded, 240, today(), &mut rng);

    assert_eq!(history.first().unwrap().date, "2005-07");
    assert_eq!(history.last().unwrap().date, "2025-06");
    assert!(history.windows(2).all(|w| w[0].date < w[1].date));
}

#[quickcheck]
fn generated_length_matches_step_count(steps: u8, seed: u64) -> bool {
    let params = TrendParams::new(5.0, 12.0, 5.0, 20.0);
    let mut rng = StdRng::seed_from_u64(seed);
    generate_trend(&params, steps as usize, &mut rng).len() == steps as usize
}

#[quickcheck]
fn range_bounds_always_hold(seed: u64) -> bool {
    let params = TrendParams::new(50.0, 78.0, 15.0, 15.0);
    let bounds = SampleBounds::Range { min: 0.0, max: 100.0 };
    let mut rng = StdRng::seed_from_u64(seed);
    generate_history(&params, bounds, 240, today(), &mut rng)
        .iter()
        .all(|p| bounds.contains(p.value))
}
