use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::models::{ChartData, ChartSeries, Dataset};
use crate::utils::ChartError;

pub const ACTUAL_LABEL: &str = "Brent (real)";
pub const FORECAST_LABEL: &str = "Prognose (5 Tage)";

const ACTUAL_COLOR: RGBColor = RGBColor(0x00, 0x7b, 0xff);
const FORECAST_COLOR: RGBColor = RGBColor(0xff, 0x57, 0x33);
const LINE_TENSION: f64 = 0.3;
const FORECAST_DASH: [u32; 2] = [5, 5];

/// Build the `{ labels, datasets }` document for the charting frontend
pub fn chart_data(series: &ChartSeries) -> ChartData {
    ChartData {
        labels: series.labels.clone(),
        datasets: vec![
            Dataset {
                label: ACTUAL_LABEL.to_string(),
                data: series.actual.clone(),
                border_color: "#007bff".to_string(),
                tension: LINE_TENSION,
                border_dash: None,
            },
            Dataset {
                label: FORECAST_LABEL.to_string(),
                data: series.forecast.clone(),
                border_color: "#ff5733".to_string(),
                tension: LINE_TENSION,
                border_dash: Some(FORECAST_DASH),
            },
        ],
    }
}

/// Write the chart document as pretty-printed JSON
pub fn write_chart_json(data: &ChartData, path: &Path) -> Result<(), ChartError> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    info!("Chart data written to {}", path.display());
    Ok(())
}

/// Y axis bounds with 10% padding, never below zero
fn price_bounds(series: &ChartSeries) -> Option<(f64, f64)> {
    let prices = series.actual.iter().chain(&series.forecast).flatten();

    let (min_price, max_price) = prices.fold(None, |acc: Option<(f64, f64)>, &p| match acc {
        None => Some((p, p)),
        Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
    })?;

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    Some(((min_price - padding).max(0.0), max_price + padding))
}

fn label_at(labels: &[String], x: usize) -> String {
    labels.get(x).cloned().unwrap_or_default()
}

/// Render the actual and forecast series as a PNG line chart
pub fn render_chart_png(
    series: &ChartSeries,
    title: &str,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    if series.is_empty() {
        return Err(ChartError::Empty);
    }
    let (y_min, y_max) = price_bounds(series).ok_or(ChartError::Empty)?;
    let x_max = series.len().saturating_sub(1).max(1);

    let actual: Vec<(usize, f64)> = ChartSeries::present(&series.actual).collect();
    let forecast: Vec<(usize, f64)> = ChartSeries::present(&series.forecast).collect();

    {
        let backend = BitMapBackend::new(path, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 32.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0usize..x_max, y_min..y_max)
            .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

        let labels = &series.labels;
        chart
            .configure_mesh()
            .x_labels(series.len().min(12))
            .x_label_formatter(&|x: &usize| label_at(labels, *x))
            .y_desc("USD")
            .x_desc("Datum")
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

        chart
            .draw_series(LineSeries::new(actual.iter().copied(), ACTUAL_COLOR.stroke_width(2)))
            .map_err(|e| ChartError::Render(format!("Failed to draw line: {}", e)))?
            .label(ACTUAL_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACTUAL_COLOR));

        chart
            .draw_series(actual.iter().map(|&p| Circle::new(p, 3, ACTUAL_COLOR.filled())))
            .map_err(|e| ChartError::Render(format!("Failed to draw point: {}", e)))?;

        chart
            .draw_series(DashedLineSeries::new(
                forecast.iter().copied(),
                FORECAST_DASH[0],
                FORECAST_DASH[1],
                FORECAST_COLOR.stroke_width(2),
            ))
            .map_err(|e| ChartError::Render(format!("Failed to draw forecast: {}", e)))?
            .label(FORECAST_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FORECAST_COLOR));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;
    }

    info!("Chart image written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> ChartSeries {
        ChartSeries {
            labels: vec!["2024-05-01".into(), "2024-05-02".into(), "2024-05-03".into()],
            actual: vec![Some(82.0), Some(84.0), None],
            forecast: vec![None, None, Some(84.3)],
        }
    }

    #[test]
    fn test_chart_data_document() {
        let data = chart_data(&sample_series());
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["labels"][0], "2024-05-01");
        assert_eq!(json["datasets"][0]["label"], "Brent (real)");
        assert_eq!(json["datasets"][0]["borderColor"], "#007bff");
        assert_eq!(json["datasets"][0]["data"][2], serde_json::Value::Null);
        assert!(json["datasets"][0].get("borderDash").is_none());
        assert_eq!(json["datasets"][1]["label"], "Prognose (5 Tage)");
        assert_eq!(json["datasets"][1]["borderDash"], serde_json::json!([5, 5]));
        assert_eq!(json["datasets"][1]["data"][2], 84.3);
        assert_eq!(json["datasets"][1]["tension"], 0.3);
    }

    #[test]
    fn test_write_chart_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        write_chart_json(&chart_data(&sample_series()), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["datasets"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_price_bounds_padding() {
        let (lo, hi) = price_bounds(&sample_series()).unwrap();
        assert!((lo - (82.0 - 0.23)).abs() < 1e-9);
        assert!((hi - (84.3 + 0.23)).abs() < 1e-9);
        assert!(price_bounds(&ChartSeries::default()).is_none());
    }

    #[test]
    fn test_label_at() {
        let labels = sample_series().labels;
        assert_eq!(label_at(&labels, 0), "2024-05-01");
        assert_eq!(label_at(&labels, 2), "2024-05-03");
        assert_eq!(label_at(&labels, 7), "");
    }

    fn week_series() -> ChartSeries {
        use crate::models::{PriceRecord, PriceWindow};
        use crate::services::transform_service;
        use chrono::{Duration, NaiveDate};

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let prices = [80.0, 80.5, 81.0, 81.2, 80.9, 81.4, 81.7, 82.0];
        let window = PriceWindow::from_series(
            prices
                .iter()
                .enumerate()
                .map(|(i, &price)| PriceRecord {
                    date: start + Duration::days(i as i64),
                    price,
                })
                .collect(),
        );
        transform_service::transform(window, start).chart
    }

    #[test]
    fn test_render_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brent-chart.png");

        render_chart_png(&week_series(), "Brent", &path, 640, 360).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_render_forecast_only_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.png");
        let start = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let chart = crate::services::transform_service::transform(Default::default(), start).chart;

        render_chart_png(&chart, "Brent", &path, 320, 240).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_render_empty_series_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_chart_png(&ChartSeries::default(), "t", &dir.path().join("c.png"), 100, 100);
        assert!(matches!(result, Err(ChartError::Empty)));
    }
}
