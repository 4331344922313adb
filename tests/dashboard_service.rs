use bubble_risk_dashboard::application::DashboardService;
use bubble_risk_dashboard::domain::errors::DomainError;
use bubble_risk_dashboard::domain::sentiment::{
    IndicatorId, Language, RiskScorer, SentimentSnapshot,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn service(seed: u64) -> DashboardService {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    DashboardService::initialize(today, 1_750_000_000_000, &mut rng).unwrap()
}

#[test]
fn score_is_derived_from_snapshot() {
    let service = service(10);
    let expected = RiskScorer::new()
        .overall_score(service.snapshot().indicators())
        .unwrap();
    assert_eq!(service.score(), expected);
    assert!(service.score().value() <= 100);
}

#[test]
fn empty_snapshot_cannot_be_served() {
    let result = DashboardService::new(SentimentSnapshot::new(Vec::new(), 0));
    assert_eq!(result.err(), Some(DomainError::EmptyIndicatorSet));
}

#[test]
fn summaries_use_localized_names() {
    let service = service(11);
    let en = service.summaries(Language::En);
    let zh = service.summaries(Language::Zh);

    assert_eq!(en.len(), 8);
    assert_eq!(en[0].name, "Buffett Indicator");
    assert_eq!(zh[0].name, "巴菲特指标");
    assert_eq!(en[0].current_value, zh[0].current_value);

    let buffett = service.snapshot().get(IndicatorId::Buffett).unwrap();
    assert_eq!(en[0].current_value, buffett.current_value());
    assert_eq!(en[0].status, buffett.status());
}

#[test]
fn localized_view_carries_indicator_and_text() {
    let service = service(12);
    let localized = service.localized(Language::En);
    let json = serde_json::to_value(&localized).unwrap();

    assert_eq!(json[2]["id"], "yield");
    assert_eq!(json[2]["name"], "S&P 500 Dividend Yield");
    assert_eq!(json[2]["history"].as_array().unwrap().len(), 240);
    assert_eq!(json[2]["currentValue"], localized[2].current_value);
    assert_eq!(json[2]["benchmark"]["label"], "Dotcom Low (2000)");
}

#[test]
fn chinese_view_translates_benchmark_label_in_place() {
    let service = service(14);
    let json = serde_json::to_value(service.localized(Language::Zh)).unwrap();
    let buffett = json[0].as_object().unwrap();

    assert_eq!(buffett["name"], "巴菲特指标");
    assert_eq!(buffett["benchmark"]["label"], "互联网泡沫顶峰 (2000)");
    assert_eq!(
        buffett["benchmark"]["value"],
        service.snapshot().indicators()[0].benchmark().value
    );
    assert!(!buffett.contains_key("benchmark_label"));
    assert!(buffett.keys().all(|key| !key.contains('_')));
}

#[test]
fn shared_snapshot_is_the_same_instance() {
    let service = service(13);
    let shared = service.shared_snapshot();
    assert!(std::ptr::eq(&*shared, service.snapshot()));
}
