pub mod loader_service;
pub mod transform_service;
pub mod chart_service;
pub mod dashboard_service;
