use crate::domain::sentiment::Language;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

/// `YYYY-MM` labels for the `count` months ending at the month of `today`,
/// oldest first.
pub fn trailing_month_labels(today: NaiveDate, count: usize) -> Vec<String> {
    let month_start = today.with_day(1).unwrap_or(today);
    (0..count)
        .rev()
        .map(|months_ago| {
            month_start
                .checked_sub_months(Months::new(months_ago as u32))
                .unwrap_or(NaiveDate::MIN)
                .format("%Y-%m")
                .to_string()
        })
        .collect()
}

/// Convert a millisecond Unix timestamp into local wall-clock time.
///
/// `offset_minutes` follows the JS `Date::getTimezoneOffset` sign
/// convention (UTC minus local, so UTC+8 is `-480`).
pub fn local_datetime(timestamp_ms: u64, offset_minutes: i32) -> Option<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms as i64)?;
    let local = utc.naive_utc() - chrono::Duration::minutes(offset_minutes as i64);
    Some(local)
}

/// Header timestamp, 24h clock.
///
/// - `en` -> `MM/DD/YYYY, HH:MM:SS`
/// - `zh` -> `YYYY/MM/DD HH:MM:SS`
pub fn format_last_updated(time: NaiveDateTime, lang: Language) -> String {
    match lang {
        Language::En => time.format("%m/%d/%Y, %H:%M:%S").to_string(),
        Language::Zh => time.format("%Y/%m/%d %H:%M:%S").to_string(),
    }
}
