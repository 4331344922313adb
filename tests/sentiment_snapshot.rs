use bubble_risk_dashboard::domain::errors::DomainError;
use bubble_risk_dashboard::domain::sentiment::{
    HISTORY_LENGTH, Indicator, IndicatorId, Polarity, SentimentSnapshot, Thresholds,
    ValuationStatus, catalog, definition,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn snapshot(seed: u64) -> SentimentSnapshot {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    SentimentSnapshot::generate(today, 1_750_000_000_000, &mut rng).unwrap()
}

#[test]
fn catalog_has_eight_unique_indicators() {
    let ids: HashSet<IndicatorId> = catalog().iter().map(|d| d.id).collect();
    assert_eq!(catalog().len(), 8);
    assert_eq!(ids.len(), 8);
    assert_eq!(IndicatorId::iter().count(), 8);
}

#[test]
fn definition_lookup_matches_id() {
    for id in IndicatorId::iter() {
        assert_eq!(definition(id).id, id);
    }
}

#[test]
fn only_yield_and_put_call_are_inverse() {
    let inverse: Vec<IndicatorId> = IndicatorId::iter()
        .filter(|id| id.polarity() == Polarity::Inverse)
        .collect();
    assert_eq!(inverse, vec![IndicatorId::Yield, IndicatorId::PutCall]);
}

#[test]
fn thresholds_are_monotonic_in_risk_direction() {
    for def in catalog() {
        assert!(
            def.thresholds.is_monotonic(def.id.polarity()),
            "{} thresholds out of order",
            def.id
        );
    }
}

#[test]
fn snapshot_has_full_histories() {
    let snapshot = snapshot(1);
    assert_eq!(snapshot.len(), 8);
    assert_eq!(snapshot.generated_at(), 1_750_000_000_000);

    for indicator in snapshot.indicators() {
        assert_eq!(indicator.history().len(), HISTORY_LENGTH);
        assert_eq!(indicator.history().first().unwrap().date, "2005-07");
        assert_eq!(indicator.history().last().unwrap().date, "2025-06");
        assert_eq!(
            indicator.current_value(),
            indicator.history().last().unwrap().value
        );
    }
}

#[test]
fn snapshot_respects_catalog_order_and_bounds() {
    let snapshot = snapshot(2);
    for (indicator, def) in snapshot.indicators().iter().zip(catalog()) {
        assert_eq!(indicator.id(), def.id);
        assert_eq!(indicator.unit(), def.unit);
        assert!(
            indicator.history().iter().all(|p| def.bounds.contains(p.value)),
            "{} escaped its bounds",
            def.id
        );
    }
}

#[test]
fn status_follows_current_value() {
    let snapshot = snapshot(3);
    for indicator in snapshot.indicators() {
        let expected = indicator
            .thresholds()
            .classify(indicator.current_value(), indicator.polarity());
        assert_eq!(indicator.status(), expected);
    }
}

#[test]
fn get_finds_indicator_by_id() {
    let snapshot = snapshot(4);
    let put_call = snapshot.get(IndicatorId::PutCall).unwrap();
    assert_eq!(put_call.id(), IndicatorId::PutCall);
    assert_eq!(put_call.benchmark().value, 0.9);
}

#[test]
fn direct_classification_boundaries() {
    let t = Thresholds::new(100.0, 140.0, 170.0);
    assert_eq!(t.classify(99.0, Polarity::Direct), ValuationStatus::Undervalued);
    assert_eq!(t.classify(100.0, Polarity::Direct), ValuationStatus::Fair);
    assert_eq!(t.classify(140.0, Polarity::Direct), ValuationStatus::Overvalued);
    assert_eq!(t.classify(170.0, Polarity::Direct), ValuationStatus::Overvalued);
    assert_eq!(t.classify(170.5, Polarity::Direct), ValuationStatus::ExtremeBubble);
}

#[test]
fn inverse_classification_boundaries() {
    let t = Thresholds::new(1.0, 0.7, 0.6);
    assert_eq!(t.classify(1.1, Polarity::Inverse), ValuationStatus::Undervalued);
    assert_eq!(t.classify(1.0, Polarity::Inverse), ValuationStatus::Fair);
    assert_eq!(t.classify(0.7, Polarity::Inverse), ValuationStatus::Overvalued);
    assert_eq!(t.classify(0.6, Polarity::Inverse), ValuationStatus::Overvalued);
    assert_eq!(t.classify(0.55, Polarity::Inverse), ValuationStatus::ExtremeBubble);
}

#[test]
fn empty_history_is_rejected() {
    let result = Indicator::from_history(definition(IndicatorId::Shiller), Vec::new());
    assert_eq!(result, Err(DomainError::EmptyHistory(IndicatorId::Shiller)));
}

#[test]
fn snapshot_serializes_status_labels() {
    let snapshot = snapshot(5);
    let json = serde_json::to_value(&snapshot).unwrap();
    let statuses: Vec<&str> = json["indicators"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["status"].as_str().unwrap())
        .collect();
    assert!(
        statuses
            .iter()
            .all(|s| ["Undervalued", "Fair", "Overvalued", "Extreme Bubble"].contains(s))
    );
    assert_eq!(json["indicators"][0]["id"], "buffett");
}
