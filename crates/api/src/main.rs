//! Churn Prediction Service - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, Settings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("failed to load configuration")?;
    init_logging(&settings);

    info!("=== Churn Prediction API v{} ===", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.workers.max(1))
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    runtime.block_on(run_server(settings))
}
