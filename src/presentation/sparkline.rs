use crate::domain::sentiment::HistoricalPoint;

/// Screen-space geometry of an indicator's history chart
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineGeometry {
    pub points: Vec<(f64, f64)>,
    /// Polyline through `points`
    pub line_path: String,
    /// Line closed down to the baseline, for the gradient fill
    pub area_path: String,
    /// Y of the benchmark reference line, `None` when it is off the plot
    pub benchmark_y: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl SparklineGeometry {
    pub fn new(history: &[HistoricalPoint], benchmark: Option<f64>, width: f64, height: f64) -> Self {
        let values: Vec<f64> = history.iter().map(|p| p.value).collect();
        let (min, max) = value_range(&values);
        let span = max - min;
        let to_y = |v: f64| height - (v - min) / span * height;

        let last_index = values.len().saturating_sub(1);
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = if last_index == 0 {
                    width / 2.0
                } else {
                    i as f64 / last_index as f64 * width
                };
                (x, to_y(v))
            })
            .collect();

        let line_path = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{}{:.2},{:.2}", if i == 0 { "M" } else { " L" }, x, y))
            .collect::<String>();

        let area_path = match (points.first(), points.last()) {
            (Some(first), Some(last)) => format!(
                "{line_path} L{:.2},{height:.2} L{:.2},{height:.2} Z",
                last.0, first.0
            ),
            _ => String::new(),
        };

        let benchmark_y = benchmark
            .filter(|b| (min..=max).contains(b))
            .map(to_y);

        Self { points, line_path, area_path, benchmark_y, min, max }
    }
}

/// Min/max of the series, widened by one unit each way when flat
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}
