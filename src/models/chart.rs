//! Chart models

use serde::Serialize;

/// Labels shared by the actual and forecast value series
///
/// Absent values are gaps in a series. Both value series always have the
/// same length as `labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub actual: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(index, value)` for the present values of a series
    pub fn present(values: &[Option<f64>]) -> impl Iterator<Item = (usize, f64)> + '_ {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|price| (i, price)))
    }
}

/// One line of the chart document handed to the charting frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub tension: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
}

/// `{ labels, datasets }` document consumed by the charting frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}
