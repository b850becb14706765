//! Headless blockfall runner (default binary).
//!
//! Reads one action name per line from stdin (`moveLeft`, `rotate`, `hardDrop`, ...) and feeds
//! it to a real-time game. Gravity keeps running between lines. On EOF or `quit` the final
//! snapshot is printed to stdout as JSON. Logs go to stderr, filtered by `BLOCKFALL_LOG`.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::engine::{EngineConfig, GameRunner};
use blockfall::types::GameAction;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_logging(&config.log_filter);

    info!(
        seed = config.seed,
        autostart = config.autostart,
        publish_on_tick = config.publish_on_tick,
        "starting blockfall"
    );

    let handle = GameRunner::spawn(config);
    let mut events = handle.events();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") {
                    break;
                }
                match GameAction::from_str(line) {
                    Some(action) => handle.send(action).await?,
                    None => warn!(input = line, "unknown action"),
                }
            }
            event = events.recv() => {
                match event {
                    Ok(event) => info!(?event, "game event"),
                    Err(err) => warn!(%err, "event stream lagged"),
                }
            }
        }
    }

    let state = handle.shutdown().await?;
    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{json}");
    Ok(())
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
