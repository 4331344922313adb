use bubble_risk_dashboard::domain::sentiment::Language;
use bubble_risk_dashboard::time_utils::{
    format_last_updated, local_datetime, trailing_month_labels,
};
use chrono::NaiveDate;

#[test]
fn twenty_years_of_labels() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let labels = trailing_month_labels(today, 240);

    assert_eq!(labels.len(), 240);
    assert_eq!(labels[0], "2005-07");
    assert_eq!(labels[239], "2025-06");
    assert!(labels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn labels_cross_year_boundary() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    assert_eq!(trailing_month_labels(today, 3), vec!["2023-11", "2023-12", "2024-01"]);
}

#[test]
fn zero_count_is_empty() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert!(trailing_month_labels(today, 0).is_empty());
}

#[test]
fn local_time_applies_js_offset() {
    // 2024-03-01T00:30:00Z seen from UTC+8 (offset -480)
    let time = local_datetime(1_709_253_000_000, -480).unwrap();
    assert_eq!(format_last_updated(time, Language::Zh), "2024/03/01 08:30:00");
    assert_eq!(format_last_updated(time, Language::En), "03/01/2024, 08:30:00");
}

#[test]
fn negative_local_time_rolls_back_a_day() {
    // same instant from UTC-5 (offset 300)
    let time = local_datetime(1_709_253_000_000, 300).unwrap();
    assert_eq!(time.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}
