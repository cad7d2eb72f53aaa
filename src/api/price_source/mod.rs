pub mod client;
pub mod models;

pub use client::PriceSourceClient;
pub use models::{LoadError, PriceSource};
