use super::value_objects::{HistoricalPoint, SampleBounds, TrendParams};
use crate::time_utils::trailing_month_labels;
use chrono::NaiveDate;
use rand::Rng;
use std::f64::consts::PI;

/// Number of full business cycles drawn across a generated series
pub const CYCLE_COUNT: f64 = 3.0;

/// Round to two decimal places
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesize `step_count` samples: a linear trend from `start` to `end`,
/// plus a sine completing exactly three periods, plus uniform noise in
/// `[-volatility/2, volatility/2)`, each rounded to two decimals.
///
/// A single step sits at progress 0 (the start value).
pub fn generate_trend<R: Rng + ?Sized>(
    params: &TrendParams,
    step_count: usize,
    rng: &mut R,
) -> Vec<f64> {
    let last_index = step_count.saturating_sub(1).max(1) as f64;

    (0..step_count)
        .map(|i| {
            let progress = i as f64 / last_index;
            let trend = params.start + (params.end - params.start) * progress;
            let cycle = (progress * 2.0 * PI * CYCLE_COUNT).sin() * params.cycle_amplitude;
            let noise = (rng.r#gen::<f64>() - 0.5) * params.volatility;
            round_cents(trend + cycle + noise)
        })
        .collect()
}

/// Generate a bounded monthly history ending at the month of `today`
pub fn generate_history<R: Rng + ?Sized>(
    params: &TrendParams,
    bounds: SampleBounds,
    step_count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<HistoricalPoint> {
    let values = generate_trend(params, step_count, rng);
    trailing_month_labels(today, step_count)
        .into_iter()
        .zip(values)
        .map(|(date, value)| HistoricalPoint::new(date, bounds.apply(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_step_is_start_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = TrendParams::new(12.5, 40.0, 0.0, 9.0);
        assert_eq!(generate_trend(&params, 1, &mut rng), vec![12.5]);
    }

    #[test]
    fn zero_steps_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = TrendParams::new(1.0, 2.0, 1.0, 1.0);
        assert!(generate_trend(&params, 0, &mut rng).is_empty());
    }

    #[test]
    fn cycle_peaks_at_one_twelfth() {
        // sin(progress * 6π) peaks at progress = 1/12
        let mut rng = StdRng::seed_from_u64(1);
        let params = TrendParams::new(0.0, 0.0, 0.0, 10.0);
        let values = generate_trend(&params, 13, &mut rng);
        assert_eq!(values[1], 10.0);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[12], 0.0);
    }

    #[test]
    fn round_cents_truncates_to_two_places() {
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(-0.456), -0.46);
        assert_eq!(round_cents(7.0), 7.0);
    }
}
