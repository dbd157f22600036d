use crate::models::chart::{
    AxisOptions, ChartConfig, ChartData, ChartKind, ChartOptions, CumulativeSeries, Dataset,
    Scales,
};
use crate::models::datapoint::DataPoint;

const DATASET_LABEL: &str = "Cumulative Production per Hour";
const BACKGROUND_COLOR: &str = "rgba(75, 192, 192, 0.2)";
const BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";
const BORDER_WIDTH: u32 = 1;

/// Generates chart-ready series and configuration from data points.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the cumulative series from an ordered sequence of data points.
    ///
    /// Pure and deterministic: `labels[i]` is `points[i].start_date`,
    /// `values[i]` is the running total of `average_per_hour` over
    /// `points[0..=i]` (native f64 addition). An empty input yields two
    /// empty sequences, and the chart renders with no bars.
    pub fn cumulative_series(&self, points: &[DataPoint]) -> CumulativeSeries {
        let mut labels = Vec::with_capacity(points.len());
        let mut values = Vec::with_capacity(points.len());
        let mut running_total = 0.0;

        for point in points {
            running_total += point.average_per_hour;
            labels.push(point.start_date.clone());
            values.push(running_total);
        }

        CumulativeSeries { labels, values }
    }

    /// Build the single-dataset vertical bar chart configuration for a
    /// cumulative series. The serialized shape is exactly what Chart.js
    /// expects; rendering and interaction stay on the frontend.
    pub fn bar_config(&self, series: &CumulativeSeries) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![Dataset {
                    label: DATASET_LABEL.to_string(),
                    data: series.values.clone(),
                    background_color: BACKGROUND_COLOR.to_string(),
                    border_color: BORDER_COLOR.to_string(),
                    border_width: BORDER_WIDTH,
                }],
            },
            options: ChartOptions {
                scales: Scales {
                    y: AxisOptions {
                        begin_at_zero: true,
                    },
                },
            },
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
