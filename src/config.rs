use std::path::PathBuf;

use crate::api::price_source::PriceSource;
use crate::utils::ConfigError;

/// Runtime configuration read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PriceSource,
    pub output_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    pub const DEFAULT_SOURCE: &'static str = "./brent-data.json";
    pub const DEFAULT_WIDTH: u32 = 1024;
    pub const DEFAULT_HEIGHT: u32 = 576;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup("BRENT_DATA_SOURCE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SOURCE.to_string());

        let output_dir = lookup("DASHBOARD_OUTPUT_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            source: PriceSource::parse(&source),
            output_dir,
            chart_width: dimension(&lookup, "CHART_WIDTH", Self::DEFAULT_WIDTH)?,
            chart_height: dimension(&lookup, "CHART_HEIGHT", Self::DEFAULT_HEIGHT)?,
        })
    }
}

fn dimension<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidDimension {
                key: key.to_string(),
                value,
            }),
        },
    }
}
