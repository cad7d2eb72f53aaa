use chrono::{Duration, NaiveDate};

use crate::models::{ChartSeries, ForecastRecord, PriceWindow, SeriesSnapshot};

/// Number of projected days appended after the window
pub const FORECAST_DAYS: usize = 5;

/// Price increase per projected day
pub const FORECAST_STEP: f64 = 0.3;

/// Base price used when there is no observation to project from
pub const FALLBACK_BASE_PRICE: f64 = 80.0;

/// Distance from the latest record to the "last week" reference record
pub const LAST_WEEK_OFFSET: usize = 7;

/// Round the exact binary value to 2 decimal places, ties away from zero
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    // x.125, x.375, x.625 and x.875 are the only exact ties
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return scaled.round() / 100.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Linear projection: step `i` (1-based) is `base + i * FORECAST_STEP`
///
/// Dates follow `anchor` by one calendar day per step.
pub fn forecast(base: f64, anchor: NaiveDate) -> Vec<ForecastRecord> {
    (1..=FORECAST_DAYS)
        .map(|step| ForecastRecord {
            date: anchor + Duration::days(step as i64),
            price: round2(base + step as f64 * FORECAST_STEP),
        })
        .collect()
}

/// Signed change from the reference price to the current one
pub fn trend_delta(current: Option<f64>, last_week: Option<f64>) -> Option<f64> {
    match (current, last_week) {
        (Some(current), Some(last_week)) => Some(current - last_week),
        _ => None,
    }
}

/// Align window prices and forecast prices on one label axis
pub fn chart_series(window: &PriceWindow, projection: &[ForecastRecord]) -> ChartSeries {
    let observed = window.len();
    let projected = projection.len();

    let labels = window
        .records()
        .iter()
        .map(|r| r.date.to_string())
        .chain(projection.iter().map(|f| f.date.to_string()))
        .collect();

    let actual = window
        .records()
        .iter()
        .map(|r| Some(r.price))
        .chain(std::iter::repeat(None).take(projected))
        .collect();

    let forecast = std::iter::repeat(None)
        .take(observed)
        .chain(projection.iter().map(|f| Some(f.price)))
        .collect();

    ChartSeries {
        labels,
        actual,
        forecast,
    }
}

/// Derive everything the dashboard shows from a price window
///
/// `today` anchors the forecast dates only when the window is empty.
pub fn transform(window: PriceWindow, today: NaiveDate) -> SeriesSnapshot {
    let current_price = window.latest().map(|r| r.price);
    let last_week_price = window.back(LAST_WEEK_OFFSET).map(|r| r.price);

    let anchor = window.latest().map(|r| r.date).unwrap_or(today);
    let projection = forecast(current_price.unwrap_or(FALLBACK_BASE_PRICE), anchor);
    let chart = chart_series(&window, &projection);

    SeriesSnapshot {
        current_price,
        last_week_price,
        trend: trend_delta(current_price, last_week_price),
        forecast: projection,
        chart,
        window,
    }
}
