use super::entities::Indicator;
use super::value_objects::{Polarity, RiskScore, Thresholds};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Contribution of a direct indicator on the safe side of `fair`
pub const DIRECT_SAFE: u8 = 30;
/// Contribution of an inverse indicator on the safe side of `fair`
pub const INVERSE_SAFE: u8 = 20;
/// Contribution between (or exactly on) the outer thresholds
pub const ELEVATED: u8 = 70;
/// Contribution strictly past `extreme`
pub const EXTREME: u8 = 95;

/// Domain service turning an indicator set into a single bubble risk score.
///
/// A coarse three-bucket step function: comparisons are strict, so values
/// sitting exactly on `fair` or `extreme` land in the elevated bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Risk contribution of a single reading
    pub fn contribution(&self, value: f64, thresholds: &Thresholds, polarity: Polarity) -> u8 {
        match polarity {
            Polarity::Direct => {
                if value < thresholds.fair {
                    DIRECT_SAFE
                } else if value > thresholds.extreme {
                    EXTREME
                } else {
                    ELEVATED
                }
            }
            Polarity::Inverse => {
                if value > thresholds.fair {
                    INVERSE_SAFE
                } else if value < thresholds.extreme {
                    EXTREME
                } else {
                    ELEVATED
                }
            }
        }
    }

    pub fn indicator_contribution(&self, indicator: &Indicator) -> u8 {
        self.contribution(
            indicator.current_value(),
            indicator.thresholds(),
            indicator.polarity(),
        )
    }

    /// Mean of the per-indicator contributions, rounded half up, capped
    /// at 100. An empty set is rejected.
    pub fn overall_score(&self, indicators: &[Indicator]) -> DomainResult<RiskScore> {
        let contributions: Vec<u8> = indicators
            .iter()
            .map(|indicator| self.indicator_contribution(indicator))
            .collect();

        let score = Self::rounded_mean(&contributions)?;
        log_debug!(
            LogComponent::Domain("RiskScorer"),
            "📊 {} contributions {:?} -> score {}",
            contributions.len(),
            contributions,
            score
        );
        Ok(score)
    }

    /// Round-half-up mean in integer arithmetic: `(2·sum + n) / 2n`
    pub fn rounded_mean(contributions: &[u8]) -> DomainResult<RiskScore> {
        if contributions.is_empty() {
            return Err(DomainError::EmptyIndicatorSet);
        }
        let n = contributions.len() as u32;
        let sum: u32 = contributions.iter().map(|&c| c as u32).sum();
        Ok(RiskScore::new((2 * sum + n) / (2 * n)))
    }
}
