use anyhow::Result;
use tempeste::config::Config;
use tempeste::sensors;
use tempeste::worker::PollWorker;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

    tempeste::logging::init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Tempeste RTE Tempo service starting up");

    let worker = PollWorker::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create worker: {}", e))?;
    let handle = worker.spawn();

    // Run until interrupted
    tokio::signal::ctrl_c().await?;

    let states = sensors::sensor_states(&handle.snapshot());
    info!(
        "Shutting down - last known state: color_of_day={:?}, blue={}, white={}, red={}",
        states.color_of_day,
        states.blue_days_remaining,
        states.white_days_remaining,
        states.red_days_remaining
    );

    handle.stop();
    handle.stopped().await;
    info!("Shutdown complete");
    Ok(())
}
