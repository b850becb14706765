//! Runner configuration, read from the environment.

use std::env;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Piece generator seed.
    pub seed: u32,
    /// Begin a run as soon as the runner is spawned.
    pub autostart: bool,
    /// Publish a snapshot after every automatic drop. When off, gravity only publishes when it
    /// raises an event (lock, level up, game over); commands always publish.
    pub publish_on_tick: bool,
    /// Capacity of the command channel.
    pub command_buffer: usize,
    /// `tracing-subscriber` filter directive for hosts that install logging.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            autostart: true,
            publish_on_tick: true,
            command_buffer: 64,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_SEED`: u32 seed; a random one is picked when unset or unparsable
    /// - `BLOCKFALL_AUTOSTART`: `0`/`false`/`no`/`off` disables the automatic start
    /// - `BLOCKFALL_SNAPSHOT_ON_TICK`: same boolean syntax
    /// - `BLOCKFALL_COMMAND_BUFFER`: channel capacity (minimum 1)
    /// - `BLOCKFALL_LOG`: log filter (default "info")
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = env::var("BLOCKFALL_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u32>);

        let autostart = env::var("BLOCKFALL_AUTOSTART")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.autostart);

        let publish_on_tick = env::var("BLOCKFALL_SNAPSHOT_ON_TICK")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.publish_on_tick);

        let command_buffer = env::var("BLOCKFALL_COMMAND_BUFFER")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.command_buffer)
            .max(1);

        let log_filter = env::var("BLOCKFALL_LOG")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed,
            autostart,
            publish_on_tick,
            command_buffer,
            log_filter,
        }
    }
}

fn parse_flag(s: &str) -> bool {
    !matches!(
        s.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
