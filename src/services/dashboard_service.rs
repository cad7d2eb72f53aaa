use chrono::NaiveDate;
use tracing::{error, info};

use crate::api::price_source::PriceSourceClient;
use crate::models::{DashboardView, ViewState};
use crate::services::{chart_service, loader_service, transform_service};
use crate::utils::Table;

pub const HEADING: &str = "Tägliches Brent-Öl Dashboard";
pub const CHART_TITLE: &str = "Brent Ölpreis – Verlauf & Prognose";
pub const LOADING_PLACEHOLDER: &str = "Lade...";

/// Load once, then transform; a failed load leaves the view loading
pub async fn activate(client: &PriceSourceClient, today: NaiveDate) -> DashboardView {
    let mut view = DashboardView::default();

    match loader_service::load(client).await {
        Ok(window) => {
            let snapshot = transform_service::transform(window, today);
            info!(
                "📈 Dashboard ready: {} observations, {} forecast days",
                snapshot.window.len(),
                snapshot.forecast.len()
            );
            view.state = ViewState::Ready(snapshot);
        }
        Err(e) => {
            error!("Fehler beim Laden der Preisdaten: {}", e);
        }
    }

    view
}

/// "Aktueller Preis: 82.5 USD", or the placeholder while nothing is known
pub fn current_price_text(view: &DashboardView) -> String {
    match view.snapshot().and_then(|s| s.current_price) {
        Some(price) => format!("Aktueller Preis: {} USD", price),
        None => format!("Aktueller Preis: {}", LOADING_PLACEHOLDER),
    }
}

/// Signed week-over-week change, e.g. "+2.00 USD zur Vorwoche"
pub fn trend_text(view: &DashboardView) -> String {
    match view.snapshot().and_then(|s| s.trend) {
        Some(delta) => {
            let sign = if transform_service::round2(delta) > 0.0 { "+" } else { "" };
            format!("{}{:.2} USD zur Vorwoche", sign, delta)
        }
        None => LOADING_PLACEHOLDER.to_string(),
    }
}

/// One row per chart label with the actual and forecast value
pub fn chart_table(view: &DashboardView) -> Option<Table> {
    let chart = &view.snapshot()?.chart;
    let cell = |v: &Option<f64>| v.map(|p| format!("{:.2}", p)).unwrap_or_default();

    let mut table = Table::new(&[
        "Datum",
        chart_service::ACTUAL_LABEL,
        chart_service::FORECAST_LABEL,
    ]);
    for ((label, actual), forecast) in chart.labels.iter().zip(&chart.actual).zip(&chart.forecast) {
        table.add_row(vec![label.clone(), cell(actual), cell(forecast)]);
    }

    Some(table)
}

/// Full text rendering of the dashboard
pub fn render_text(view: &DashboardView) -> String {
    let mut out = vec![
        HEADING.to_string(),
        "=".repeat(HEADING.chars().count()),
        current_price_text(view),
        trend_text(view),
    ];

    if let Some(table) = chart_table(view) {
        out.push(String::new());
        out.push(CHART_TITLE.to_string());
        out.push(table.render());
    }

    out.join("\n")
}
