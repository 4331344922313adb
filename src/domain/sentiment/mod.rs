//! Sentiment aggregate: indicator catalog, synthetic series and risk scoring.

pub mod catalog;
pub mod entities;
pub mod risk_scorer;
pub mod series_generator;
pub mod value_objects;

pub use catalog::{HISTORY_LENGTH, IndicatorDefinition, catalog, definition};
pub use entities::*;
pub use risk_scorer::RiskScorer;
pub use series_generator::{generate_history, generate_trend};
pub use value_objects::*;
