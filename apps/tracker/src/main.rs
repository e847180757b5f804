use minefolio_core::TrackerConfig;
use minefolio_tracker::{init_tracing, run_snapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = TrackerConfig::default();
    run_snapshot(&config).await
}
