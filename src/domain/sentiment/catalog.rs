//! Embedded definitions of the eight dashboard indicators.

use super::value_objects::{IndicatorId, SampleBounds, Thresholds, TrendParams};

/// Twenty years of monthly samples
pub const HISTORY_LENGTH: usize = 240;

/// Static description of an indicator before any series is generated
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDefinition {
    pub id: IndicatorId,
    pub unit: &'static str,
    pub trend: TrendParams,
    pub bounds: SampleBounds,
    pub thresholds: Thresholds,
    pub benchmark_value: f64,
    /// English default; localized labels come from `i18n`
    pub benchmark_label: &'static str,
}

static CATALOG: [IndicatorDefinition; 8] = [
    // Market cap / GDP, climbing through heavy cycles
    IndicatorDefinition {
        id: IndicatorId::Buffett,
        unit: "%",
        trend: TrendParams { start: 80.0, end: 195.0, volatility: 5.0, cycle_amplitude: 25.0 },
        bounds: SampleBounds::Floor(0.0),
        thresholds: Thresholds { fair: 100.0, overvalued: 140.0, extreme: 170.0 },
        benchmark_value: 142.0,
        benchmark_label: "Dotcom Peak (2000)",
    },
    IndicatorDefinition {
        id: IndicatorId::Shiller,
        unit: "x",
        trend: TrendParams { start: 24.0, end: 35.0, volatility: 2.0, cycle_amplitude: 8.0 },
        bounds: SampleBounds::Floor(0.0),
        thresholds: Thresholds { fair: 20.0, overvalued: 30.0, extreme: 38.0 },
        benchmark_value: 44.19,
        benchmark_label: "Dotcom Peak (2000)",
    },
    // Inverse: falling yield means richer valuations
    IndicatorDefinition {
        id: IndicatorId::Yield,
        unit: "%",
        trend: TrendParams { start: 2.5, end: 1.35, volatility: 0.1, cycle_amplitude: 0.4 },
        bounds: SampleBounds::Floor(0.5),
        thresholds: Thresholds { fair: 2.5, overvalued: 1.8, extreme: 1.4 },
        benchmark_value: 1.11,
        benchmark_label: "Dotcom Low (2000)",
    },
    IndicatorDefinition {
        id: IndicatorId::Margin,
        unit: "%",
        trend: TrendParams { start: 5.0, end: 12.0, volatility: 5.0, cycle_amplitude: 20.0 },
        bounds: SampleBounds::Unbounded,
        thresholds: Thresholds { fair: 10.0, overvalued: 20.0, extreme: 40.0 },
        benchmark_value: 20.0,
        benchmark_label: "Danger Zone (>20%)",
    },
    IndicatorDefinition {
        id: IndicatorId::FearGreed,
        unit: "/ 100",
        trend: TrendParams { start: 50.0, end: 78.0, volatility: 15.0, cycle_amplitude: 15.0 },
        bounds: SampleBounds::Range { min: 0.0, max: 100.0 },
        thresholds: Thresholds { fair: 50.0, overvalued: 75.0, extreme: 90.0 },
        benchmark_value: 50.0,
        benchmark_label: "Neutral (50)",
    },
    IndicatorDefinition {
        id: IndicatorId::NdxDeviation,
        unit: "%",
        trend: TrendParams { start: 5.0, end: 25.0, volatility: 3.0, cycle_amplitude: 12.0 },
        bounds: SampleBounds::Unbounded,
        thresholds: Thresholds { fair: 15.0, overvalued: 20.0, extreme: 30.0 },
        benchmark_value: 60.0,
        benchmark_label: "Dotcom Peak Deviation",
    },
    // Inverse: low put/call is greed
    IndicatorDefinition {
        id: IndicatorId::PutCall,
        unit: "",
        trend: TrendParams { start: 0.95, end: 0.55, volatility: 0.1, cycle_amplitude: 0.2 },
        bounds: SampleBounds::Floor(0.3),
        thresholds: Thresholds { fair: 1.0, overvalued: 0.7, extreme: 0.6 },
        benchmark_value: 0.9,
        benchmark_label: "Historical Avg",
    },
    IndicatorDefinition {
        id: IndicatorId::IpoHeat,
        unit: "Deals",
        trend: TrendParams { start: 15.0, end: 35.0, volatility: 5.0, cycle_amplitude: 20.0 },
        bounds: SampleBounds::WholeFloor(0.0),
        thresholds: Thresholds { fair: 20.0, overvalued: 30.0, extreme: 50.0 },
        benchmark_value: 50.0,
        benchmark_label: "Market Cycle Peak",
    },
];

/// All indicator definitions in dashboard order
pub fn catalog() -> &'static [IndicatorDefinition] {
    &CATALOG
}

/// Rows are stored in `IndicatorId` declaration order
pub fn definition(id: IndicatorId) -> &'static IndicatorDefinition {
    &CATALOG[id as usize]
}
