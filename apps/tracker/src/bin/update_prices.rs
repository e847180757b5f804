use minefolio_core::TrackerConfig;
use minefolio_tracker::{init_tracing, run_price_update};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = TrackerConfig::default();
    run_price_update(&config).await
}
