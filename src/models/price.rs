//! Price series models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of most recent observations kept for display
pub const WINDOW_SIZE: usize = 30;

/// A single daily price observation as found in the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub price: f64,
}

/// A projected price for a day after the last observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub price: f64,
}

/// The most recent slice of a price series, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceWindow {
    records: Vec<PriceRecord>,
}

impl PriceWindow {
    /// Keep only the last `WINDOW_SIZE` records of an ascending series
    pub fn from_series(mut series: Vec<PriceRecord>) -> Self {
        if series.len() > WINDOW_SIZE {
            series.drain(..series.len() - WINDOW_SIZE);
        }
        Self { records: series }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent observation
    pub fn latest(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    /// Record `offset` positions before the most recent one (0 = latest)
    pub fn back(&self, offset: usize) -> Option<&PriceRecord> {
        self.records
            .len()
            .checked_sub(offset + 1)
            .and_then(|idx| self.records.get(idx))
    }
}
