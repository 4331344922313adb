use crate::{
    domain::{
        errors::DomainResult,
        logging::{LogComponent, get_logger},
        narrative::IndicatorSummary,
        sentiment::{
            Benchmark, HistoricalPoint, Indicator, IndicatorId, Language, RiskScore, RiskScorer,
            SentimentSnapshot, Thresholds, ValuationStatus,
        },
    },
    i18n::indicator_text,
};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::rc::Rc;

/// Display form of an indicator for one language; the benchmark label is
/// the translated one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedIndicator<'a> {
    pub id: IndicatorId,
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub current_value: f64,
    pub status: ValuationStatus,
    pub history: &'a [HistoricalPoint],
    pub thresholds: Thresholds,
    pub benchmark: Benchmark,
}

impl<'a> LocalizedIndicator<'a> {
    pub fn new(indicator: &'a Indicator, lang: Language) -> Self {
        let text = indicator_text(lang, indicator.id());
        Self {
            id: indicator.id(),
            name: text.name,
            description: text.description,
            unit: indicator.unit(),
            current_value: indicator.current_value(),
            status: indicator.status(),
            history: indicator.history(),
            thresholds: *indicator.thresholds(),
            benchmark: Benchmark::new(indicator.benchmark().value, text.benchmark_label.to_string()),
        }
    }
}

/// Application service owning the session snapshot.
///
/// The snapshot is generated once and shared read-only (`Rc`); the score is
/// derived from it at construction and never set independently.
#[derive(Debug, Clone)]
pub struct DashboardService {
    snapshot: Rc<SentimentSnapshot>,
    score: RiskScore,
}

impl DashboardService {
    pub fn new(snapshot: SentimentSnapshot) -> DomainResult<Self> {
        let score = RiskScorer::new().overall_score(snapshot.indicators())?;
        Ok(Self { snapshot: Rc::new(snapshot), score })
    }

    /// Generate the session snapshot ending at the month of `today`
    pub fn initialize<R: Rng + ?Sized>(
        today: NaiveDate,
        generated_at: u64,
        rng: &mut R,
    ) -> DomainResult<Self> {
        let snapshot = SentimentSnapshot::generate(today, generated_at, rng)?;
        let service = Self::new(snapshot)?;

        get_logger().info(
            LogComponent::Application("DashboardService"),
            &format!(
                "✅ Generated {} indicators, bubble risk score {}",
                service.snapshot.len(),
                service.score
            ),
        );

        Ok(service)
    }

    pub fn snapshot(&self) -> &SentimentSnapshot {
        &self.snapshot
    }

    pub fn shared_snapshot(&self) -> Rc<SentimentSnapshot> {
        Rc::clone(&self.snapshot)
    }

    pub fn score(&self) -> RiskScore {
        self.score
    }

    pub fn localized(&self, lang: Language) -> Vec<LocalizedIndicator<'_>> {
        self.snapshot
            .indicators()
            .iter()
            .map(|indicator| LocalizedIndicator::new(indicator, lang))
            .collect()
    }

    /// Plain-text summary rows handed to the narrative prompt
    pub fn summaries(&self, lang: Language) -> Vec<IndicatorSummary> {
        summarize(self.snapshot.indicators(), lang)
    }
}

pub fn summarize(indicators: &[Indicator], lang: Language) -> Vec<IndicatorSummary> {
    indicators
        .iter()
        .map(|indicator| IndicatorSummary {
            name: indicator_text(lang, indicator.id()).name.to_string(),
            current_value: indicator.current_value(),
            unit: indicator.unit().to_string(),
            status: indicator.status(),
        })
        .collect()
}
