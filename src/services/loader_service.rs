use tracing::{debug, info, warn};

use crate::api::price_source::{LoadError, PriceSourceClient};
use crate::models::{PriceWindow, WINDOW_SIZE};

/// Fetch the full price series and keep the most recent window
///
/// One attempt per call. An empty series yields an empty window.
pub async fn load(client: &PriceSourceClient) -> Result<PriceWindow, LoadError> {
    info!("📥 Loading price series from {}", client.source());

    let series = client.fetch_series().await?;
    let total = series.len();
    let window = PriceWindow::from_series(series);

    debug!(
        "Series has {} records, window keeps {} (limit {})",
        total,
        window.len(),
        WINDOW_SIZE
    );
    if window.is_empty() {
        warn!("Price series is empty, dashboard will show the fallback forecast only");
    }
    if let (Some(first), Some(last)) = (window.records().first(), window.latest()) {
        info!("Window covers {} to {}", first.date, last.date);
    }

    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::price_source::PriceSource;
    use chrono::{Duration, NaiveDate};
    use std::io::Write;

    fn write_series(n: usize) -> tempfile::NamedTempFile {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let records: Vec<serde_json::Value> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "date": (start + Duration::days(i as i64)).to_string(),
                    "price": 75.0 + i as f64 * 0.25,
                })
            })
            .collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::Value::Array(records)).unwrap();
        file
    }

    #[tokio::test]
    async fn test_window_length_is_min_of_series_and_limit() {
        for n in [0, 1, 8, 30, 31, 90] {
            let file = write_series(n);
            let client = PriceSourceClient::new(PriceSource::File(file.path().to_path_buf()));
            let window = load(&client).await.unwrap();
            assert_eq!(window.len(), n.min(WINDOW_SIZE), "series of {}", n);
        }
    }

    #[tokio::test]
    async fn test_window_keeps_latest_records_in_order() {
        let file = write_series(40);
        let client = PriceSourceClient::new(PriceSource::File(file.path().to_path_buf()));
        let window = load(&client).await.unwrap();

        let first = &window.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert!(window.records().windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(window.latest().unwrap().date, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"prices": []}}"#).unwrap();
        let client = PriceSourceClient::new(PriceSource::File(file.path().to_path_buf()));
        assert!(matches!(load(&client).await, Err(LoadError::Malformed(_))));
    }
}
