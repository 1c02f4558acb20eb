use anyhow::Context;
use front_desk::console::handle_line;
use front_desk::{TablesStore, directory_from_config, setup_environment};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment();
    tracing::info!(environment = %config.environment, "Front desk starting");

    // 2. Directory source and store (initial load is dispatched here)
    let directory = directory_from_config(&config).context("Failed to build table directory")?;
    let store = TablesStore::with_capacity(directory, config.event_channel_capacity)?;

    match store.wait_initial_load().await {
        Ok(count) => tracing::info!(count, "Tables ready"),
        Err(e) => tracing::warn!(error = %e, "Initial table load failed, directory is empty"),
    }

    // 3. One action per line until stdin closes
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = handle_line(&store, line).await;
        println!("{}", serde_json::to_string(&response)?);
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}
