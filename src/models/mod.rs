//! Data models for the Brent dashboard
//!
//! Price series as loaded from the data source, the derived forecast,
//! chart-ready series and the dashboard view state built from them.

pub mod price;
pub mod chart;
pub mod dashboard;

// Re-export commonly used types for convenience
pub use price::{PriceRecord, PriceWindow, ForecastRecord, WINDOW_SIZE};
pub use chart::{ChartSeries, ChartData, Dataset};
pub use dashboard::{DashboardView, SeriesSnapshot, ViewState};
