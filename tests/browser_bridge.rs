#![cfg(target_arch = "wasm32")]

use bubble_risk_dashboard::domain::logging::TimeProvider;
use bubble_risk_dashboard::infrastructure::BrowserTimeProvider;
use bubble_risk_dashboard::presentation::wasm_api::DashboardApi;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_reads_wall_time() {
    // 2020-01-01T00:00:00Z
    assert!(BrowserTimeProvider::new().current_timestamp() > 1_577_836_800_000);
}

#[wasm_bindgen_test]
fn timezone_offset_is_within_a_day() {
    let offset = BrowserTimeProvider::new().timezone_offset_minutes();
    assert!(offset.abs() <= 14 * 60);
}

#[wasm_bindgen_test]
fn api_exposes_localized_snapshot() {
    let api = DashboardApi::new().unwrap();
    let json: serde_json::Value = serde_json::from_str(&api.snapshot_json("en").unwrap()).unwrap();

    assert_eq!(json["language"], "en");
    assert_eq!(json["overallScore"], api.overall_score());
    assert_eq!(json["indicators"].as_array().unwrap().len(), 8);
    assert_eq!(json["indicators"][0]["name"], "Buffett Indicator");
    assert_eq!(json["indicators"][0]["benchmark"]["label"], "Dotcom Peak (2000)");
    assert!(!api.is_analyzing());
}

#[wasm_bindgen_test]
fn api_rejects_unknown_language() {
    let api = DashboardApi::new().unwrap();
    let error = api.snapshot_json("fr").unwrap_err();
    assert_eq!(error.as_string().as_deref(), Some("Unsupported language: fr"));
}
