//! Real-time host driver for the blockfall engine.
//!
//! `blockfall-core` is purely synchronous: time only moves when someone calls
//! `GameState::tick`. This crate is that someone. A [`GameRunner`] spawns one tokio task that
//! exclusively owns the game state and:
//!
//! - sleeps until the drop timer's next deadline, then ticks with the measured elapsed time
//! - waits on commands only while the timer is stopped (paused, stopped, game over)
//! - applies queued [`GameAction`](crate::types::GameAction)s in arrival order
//! - publishes a [`GameSnapshot`](crate::core::GameSnapshot) through a `watch` channel and
//!   game events through a `broadcast` channel
//!
//! The [`GameHandle`] owns the task: dropping it aborts the task, `shutdown()` ends it
//! cleanly and returns the final state.
//!
//! # Environment Variables
//!
//! See [`EngineConfig::from_env`]:
//!
//! - `BLOCKFALL_SEED`
//! - `BLOCKFALL_AUTOSTART`
//! - `BLOCKFALL_SNAPSHOT_ON_TICK`
//! - `BLOCKFALL_COMMAND_BUFFER`
//! - `BLOCKFALL_LOG`

pub mod config;
pub mod runtime;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::EngineConfig;
pub use runtime::{GameHandle, GameRunner};
