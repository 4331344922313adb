use crate::domain::sentiment::{RiskScore, ValuationStatus};

/// Semicircle gauge for the overall score
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    pub score: u8,
    pub band: ValuationStatus,
    pub color: &'static str,
    /// 180° at score 0 (left), 0° at score 100 (right)
    pub needle_angle: f64,
}

impl GaugeReading {
    pub fn new(score: RiskScore) -> Self {
        let band = gauge_band(score);
        Self {
            score: score.value(),
            band,
            color: band_color(band),
            needle_angle: needle_angle(score),
        }
    }
}

pub fn gauge_band(score: RiskScore) -> ValuationStatus {
    match score.value() {
        81..=u8::MAX => ValuationStatus::ExtremeBubble,
        61..=80 => ValuationStatus::Overvalued,
        41..=60 => ValuationStatus::Fair,
        _ => ValuationStatus::Undervalued,
    }
}

/// Gauge fill colour
pub fn band_color(band: ValuationStatus) -> &'static str {
    match band {
        ValuationStatus::Undervalued => "#22c55e",
        ValuationStatus::Fair => "#eab308",
        ValuationStatus::Overvalued => "#f97316",
        ValuationStatus::ExtremeBubble => "#ef4444",
    }
}

/// Badge colour on indicator cards
pub fn status_badge_color(status: ValuationStatus) -> &'static str {
    match status {
        ValuationStatus::Undervalued => "#94a3b8",
        ValuationStatus::Fair => "#4ade80",
        ValuationStatus::Overvalued => "#fb923c",
        ValuationStatus::ExtremeBubble => "#ef4444",
    }
}

pub fn needle_angle(score: RiskScore) -> f64 {
    180.0 - (score.value() as f64 / 100.0) * 180.0
}

fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

/// SVG path of the donut slice from 180° down to `end_angle`
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, end_angle: f64) -> String {
    let (ox0, oy0) = polar(cx, cy, outer, 180.0);
    let (ox1, oy1) = polar(cx, cy, outer, end_angle);
    let (ix1, iy1) = polar(cx, cy, inner, end_angle);
    let (ix0, iy0) = polar(cx, cy, inner, 180.0);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 0 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 0 0 {ix0:.2} {iy0:.2} Z"
    )
}

/// Tip of the needle for a given angle
pub fn needle_tip(cx: f64, cy: f64, length: f64, angle: f64) -> (f64, f64) {
    polar(cx, cy, length, angle)
}
