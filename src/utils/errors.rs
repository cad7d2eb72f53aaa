use thiserror::Error;

/// Failure while producing chart output
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to plot")]
    Empty,
    #[error("{0}")]
    Render(String),
    #[error("failed to write chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize chart data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Invalid value in the environment configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidDimension { key: String, value: String },
}
