pub mod dashboard_service;
pub mod narrative_service;

pub use dashboard_service::{DashboardService, LocalizedIndicator};
pub use narrative_service::{MarketNarrativeService, NarrativeOutcome};
