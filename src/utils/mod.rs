pub mod table;
pub mod errors;

pub use table::Table;
pub use errors::{ChartError, ConfigError};
