//! Dashboard view models

use serde::Serialize;

use super::chart::ChartSeries;
use super::price::{ForecastRecord, PriceWindow};

/// Everything the dashboard shows, derived from one price window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSnapshot {
    pub window: PriceWindow,
    pub current_price: Option<f64>,
    pub last_week_price: Option<f64>,
    pub trend: Option<f64>,
    pub forecast: Vec<ForecastRecord>,
    pub chart: ChartSeries,
}

/// State of the dashboard view for one activation
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing loaded yet, or the load failed
    #[default]
    Loading,
    Ready(SeriesSnapshot),
}

/// View-model for the single dashboard view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub state: ViewState,
}

impl DashboardView {
    pub fn snapshot(&self) -> Option<&SeriesSnapshot> {
        match &self.state {
            ViewState::Ready(snapshot) => Some(snapshot),
            ViewState::Loading => None,
        }
    }
}
