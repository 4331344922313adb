use derive_more::{Constructor, Display, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - stable key of one of the eight dashboard indicators
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    Buffett,
    Shiller,
    Yield,
    Margin,
    FearGreed,
    NdxDeviation,
    PutCall,
    IpoHeat,
}

impl IndicatorId {
    /// Scarcity indicators (dividend yield, put/call ratio) get riskier as
    /// they fall; everything else gets riskier as it rises.
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Yield | Self::PutCall => Polarity::Inverse,
            _ => Polarity::Direct,
        }
    }
}

/// Direction in which an indicator signals danger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Higher raw value is riskier
    Direct,
    /// Lower raw value is riskier
    Inverse,
}

/// Qualitative reading of an indicator against its thresholds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr, Serialize, Deserialize,
)]
pub enum ValuationStatus {
    Undervalued,
    Fair,
    Overvalued,
    #[strum(serialize = "Extreme Bubble")]
    #[serde(rename = "Extreme Bubble")]
    ExtremeBubble,
}

/// Dashboard language
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Language name as written into the narrative prompt
    pub fn prompt_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese (Simplified)",
        }
    }
}

/// Value Object - one monthly sample
#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// `YYYY-MM`
    pub date: String,
    pub value: f64,
}

/// Value Object - cut-offs between the valuation buckets.
///
/// For direct indicators `fair < overvalued < extreme`; inverse indicators
/// run the other way.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Thresholds {
    pub fair: f64,
    pub overvalued: f64,
    pub extreme: f64,
}

impl Thresholds {
    /// Whether the triple is ordered in the riskier direction of `polarity`
    pub fn is_monotonic(&self, polarity: Polarity) -> bool {
        match polarity {
            Polarity::Direct => self.fair < self.overvalued && self.overvalued < self.extreme,
            Polarity::Inverse => self.fair > self.overvalued && self.overvalued > self.extreme,
        }
    }

    /// Bucket `value` with the same strict outer comparisons the risk scorer
    /// uses: only values strictly past `extreme` are a bubble, only values
    /// strictly on the safe side of `fair` are undervalued.
    pub fn classify(&self, value: f64, polarity: Polarity) -> ValuationStatus {
        match polarity {
            Polarity::Direct => {
                if value < self.fair {
                    ValuationStatus::Undervalued
                } else if value > self.extreme {
                    ValuationStatus::ExtremeBubble
                } else if value >= self.overvalued {
                    ValuationStatus::Overvalued
                } else {
                    ValuationStatus::Fair
                }
            }
            Polarity::Inverse => {
                if value > self.fair {
                    ValuationStatus::Undervalued
                } else if value < self.extreme {
                    ValuationStatus::ExtremeBubble
                } else if value <= self.overvalued {
                    ValuationStatus::Overvalued
                } else {
                    ValuationStatus::Fair
                }
            }
        }
    }
}

/// Value Object - fixed historical reference shown next to a series
#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Benchmark {
    pub value: f64,
    pub label: String,
}

/// Value Object - aggregate bubble risk in `[0, 100]`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into, Display, Serialize, Deserialize,
)]
#[serde(from = "u32")]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    /// Saturates at 100
    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u32> for RiskScore {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Parameters of the trend + cycle + noise generator
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct TrendParams {
    pub start: f64,
    pub end: f64,
    pub volatility: f64,
    pub cycle_amplitude: f64,
}

/// Post-generation bound applied to every sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleBounds {
    Unbounded,
    Floor(f64),
    Range { min: f64, max: f64 },
    /// Counts: rounded to a whole number, then floored
    WholeFloor(f64),
}

impl SampleBounds {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Self::Unbounded => value,
            Self::Floor(min) => value.max(min),
            Self::Range { min, max } => value.clamp(min, max),
            Self::WholeFloor(min) => value.round().max(min),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Self::Unbounded => value.is_finite(),
            Self::Floor(min) => value >= min,
            Self::Range { min, max } => (min..=max).contains(&value),
            Self::WholeFloor(min) => value >= min && value.fract() == 0.0,
        }
    }
}
