use chrono::Utc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::{Directive, EnvFilter};

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::price_source::PriceSourceClient;
use config::Config;
use services::{chart_service, dashboard_service};

const CHART_JSON_FILE: &str = "brent-chart.json";
const CHART_PNG_FILE: &str = "brent-chart.png";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "brent_dashboard=debug".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🛢️  Starting Brent dashboard...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    debug!("Configuration: {:?}", config);

    let client = PriceSourceClient::new(config.source.clone());
    let view = dashboard_service::activate(&client, Utc::now().date_naive()).await;

    println!("{}", dashboard_service::render_text(&view));

    let Some(snapshot) = view.snapshot() else {
        warn!("No price data available, skipping chart output");
        return;
    };

    let data = chart_service::chart_data(&snapshot.chart);
    if let Err(e) = chart_service::write_chart_json(&data, &config.output_dir.join(CHART_JSON_FILE)) {
        error!("Failed to write chart data: {}", e);
    }

    if let Err(e) = chart_service::render_chart_png(
        &snapshot.chart,
        dashboard_service::CHART_TITLE,
        &config.output_dir.join(CHART_PNG_FILE),
        config.chart_width,
        config.chart_height,
    ) {
        error!("Failed to render chart image: {}", e);
    }
}
