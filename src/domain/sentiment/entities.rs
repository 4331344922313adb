use super::catalog::{HISTORY_LENGTH, IndicatorDefinition, catalog};
use super::series_generator::generate_history;
use super::value_objects::{
    Benchmark, HistoricalPoint, IndicatorId, Polarity, Thresholds, ValuationStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

/// Domain entity - one indicator with its generated history.
///
/// Fields are private: the current value is always the last history point
/// and thresholds cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    id: IndicatorId,
    unit: &'static str,
    status: ValuationStatus,
    history: Vec<HistoricalPoint>,
    thresholds: Thresholds,
    benchmark: Benchmark,
}

impl Indicator {
    /// Build from a definition and a finished history; the status is
    /// classified from the last point.
    pub fn from_history(
        definition: &IndicatorDefinition,
        history: Vec<HistoricalPoint>,
    ) -> DomainResult<Self> {
        let current = history
            .last()
            .ok_or(DomainError::EmptyHistory(definition.id))?
            .value;
        let status = definition
            .thresholds
            .classify(current, definition.id.polarity());

        Ok(Self {
            id: definition.id,
            unit: definition.unit,
            status,
            history,
            thresholds: definition.thresholds,
            benchmark: Benchmark::new(
                definition.benchmark_value,
                definition.benchmark_label.to_string(),
            ),
        })
    }

    pub fn id(&self) -> IndicatorId {
        self.id
    }

    pub fn polarity(&self) -> Polarity {
        self.id.polarity()
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    pub fn status(&self) -> ValuationStatus {
        self.status
    }

    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    pub fn current_value(&self) -> f64 {
        // `from_history` rejects empty histories
        self.history.last().map(|p| p.value).unwrap_or_default()
    }
}

/// Aggregate - the indicator set generated once per session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSnapshot {
    indicators: Vec<Indicator>,
    generated_at: u64,
}

impl SentimentSnapshot {
    pub fn new(indicators: Vec<Indicator>, generated_at: u64) -> Self {
        Self { indicators, generated_at }
    }

    /// Generate every catalog indicator with `HISTORY_LENGTH` monthly points
    /// ending at the month of `today`.
    pub fn generate<R: Rng + ?Sized>(
        today: NaiveDate,
        generated_at: u64,
        rng: &mut R,
    ) -> DomainResult<Self> {
        let indicators = catalog()
            .iter()
            .map(|definition| {
                let history = generate_history(
                    &definition.trend,
                    definition.bounds,
                    HISTORY_LENGTH,
                    today,
                    rng,
                );
                Indicator::from_history(definition, history)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::new(indicators, generated_at))
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn get(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Milliseconds since the Unix epoch
    pub fn generated_at(&self) -> u64 {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
