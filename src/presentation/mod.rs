//! View-side helpers: pure geometry/formatting used by the Leptos
//! components, plus the JS bridge.

pub mod analysis_format;
pub mod gauge;
pub mod sparkline;
pub mod wasm_api;

use crate::{
    application::DashboardService,
    domain::{errors::DomainResult, logging::get_time_provider},
    infrastructure::BrowserTimeProvider,
    time_utils::local_datetime,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Local calendar date for a timestamp in the browser's time zone
pub fn local_date(timestamp_ms: u64) -> NaiveDate {
    let offset = BrowserTimeProvider::new().timezone_offset_minutes();
    local_datetime(timestamp_ms, offset)
        .map(|t| t.date())
        .unwrap_or_default()
}

/// Generate the session snapshot from the installed clock and an
/// entropy-seeded RNG
pub fn bootstrap_dashboard() -> DomainResult<DashboardService> {
    let now = get_time_provider().current_timestamp();
    let mut rng = StdRng::from_entropy();
    DashboardService::initialize(local_date(now), now, &mut rng)
}
