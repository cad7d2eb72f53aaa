use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{LoadError, PriceSource};
use crate::models::PriceRecord;

/// Client reading the raw Brent price series from its configured source
pub struct PriceSourceClient {
    http_client: HttpClient,
    source: PriceSource,
}

impl PriceSourceClient {
    pub fn new(source: PriceSource) -> Self {
        Self {
            http_client: HttpClient::new(),
            source,
        }
    }

    pub fn source(&self) -> &PriceSource {
        &self.source
    }

    /// Fetch and validate the full series, oldest record first
    pub async fn fetch_series(&self) -> Result<Vec<PriceRecord>, LoadError> {
        let body = match &self.source {
            PriceSource::Http(url) => self.fetch_http(url).await?,
            PriceSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Unreachable(format!("{}: {}", path.display(), e)))?,
        };

        debug!("Read {} bytes from {}", body.len(), self.source);
        parse_series(&body)
    }

    async fn fetch_http(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Unreachable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("Price source returned {}: {}", status, body_text);
            return Err(LoadError::Unreachable(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Unreachable(format!("Failed to read response body: {}", e)))
    }
}

/// Parse a JSON array of `{ "date", "price" }` objects
///
/// Dates must be strictly ascending.
pub fn parse_series(body: &str) -> Result<Vec<PriceRecord>, LoadError> {
    let records: Vec<PriceRecord> = serde_json::from_str(body)?;

    for (i, record) in records.iter().enumerate() {
        if i > 0 && records[i - 1].date >= record.date {
            return Err(LoadError::Malformed(format!(
                "dates not strictly ascending at {} (after {})",
                record.date,
                records[i - 1].date
            )));
        }
    }

    Ok(records)
}
