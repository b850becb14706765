//! Real-time driver.
//!
//! Bridges wall-clock time and host commands into a single-owner `GameState`.

use std::future;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState};
use crate::types::{GameAction, GameEvent};

/// Events buffered per subscriber before old ones are dropped.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Command delivered to the runner task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Action(GameAction),
    Shutdown,
}

/// Spawns runner tasks.
pub struct GameRunner;

impl GameRunner {
    /// Spawn a runner on the current tokio runtime.
    ///
    /// Must be called from within a runtime. The returned handle owns the task; dropping it
    /// aborts the task and releases the gravity timer.
    pub fn spawn(config: EngineConfig) -> GameHandle {
        let mut state = GameState::new(config.seed);
        if config.autostart {
            state.start();
        }

        let (cmd_tx, cmd_rx) = mpsc::channel(config.command_buffer.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let runner = Runner {
            state,
            cmd_rx,
            snapshot_tx,
            event_tx: event_tx.clone(),
            publish_on_tick: config.publish_on_tick,
        };
        let task = tokio::spawn(runner.run());

        info!(seed = config.seed, autostart = config.autostart, "game runner spawned");

        GameHandle {
            cmd_tx,
            snapshot_rx,
            event_tx,
            task: Some(task),
        }
    }
}

/// Owning handle to a running game.
pub struct GameHandle {
    cmd_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
    event_tx: broadcast::Sender<GameEvent>,
    task: Option<JoinHandle<GameState>>,
}

impl GameHandle {
    /// Queue a player/host action.
    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.cmd_tx
            .send(Command::Action(action))
            .await
            .context("game runner has stopped")
    }

    /// Queue an action without waiting; fails when the queue is full or the runner is gone.
    pub fn try_send(&self, action: GameAction) -> Result<()> {
        self.cmd_tx
            .try_send(Command::Action(action))
            .context("game runner cannot accept commands")
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Receiver for lock, level-up and game-over events.
    pub fn events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Stop the runner and hand back the final state.
    pub async fn shutdown(mut self) -> Result<GameState> {
        let task = self.task.take().context("game runner already shut down")?;
        // A closed channel means the task is already finishing.
        let _ = self.cmd_tx.send(Command::Shutdown).await;
        task.await.context("game runner task failed")
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("game runner aborted");
        }
    }
}

struct Runner {
    state: GameState,
    cmd_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    event_tx: broadcast::Sender<GameEvent>,
    publish_on_tick: bool,
}

impl Runner {
    async fn run(mut self) -> GameState {
        let mut last = Instant::now();

        loop {
            let deadline = self
                .state
                .next_drop_in_ms()
                .map(|ms| last + Duration::from_millis(ms as u64));

            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    // Account for time spent waiting before the action lands.
                    self.advance(&mut last);
                    match cmd {
                        Some(Command::Action(action)) => {
                            let accepted = self.state.apply_action(action);
                            trace!(action = action.as_str(), accepted, "applied action");
                            self.publish();
                        }
                        Some(Command::Shutdown) | None => break,
                    }
                }
                _ = sleep_until_opt(deadline) => {
                    let steps = self.advance(&mut last);
                    // Locks, clears and top-outs always reach the snapshot.
                    if self.state.has_events() || (steps > 0 && self.publish_on_tick) {
                        self.publish();
                    }
                }
            }
        }

        self.publish();
        debug!(score = self.state.score(), "game runner stopped");
        self.state
    }

    /// Feed whole elapsed milliseconds into the game; fractions carry over.
    fn advance(&mut self, last: &mut Instant) -> u32 {
        let now = Instant::now();
        let ms = now.saturating_duration_since(*last).as_millis();
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        *last += Duration::from_millis(ms as u64);
        self.state.tick(ms)
    }

    fn publish(&mut self) {
        let state = &self.state;
        self.snapshot_tx.send_modify(|snap| state.snapshot_into(snap));
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.state.take_events() {
            // No subscribers is fine.
            let _ = self.event_tx.send(event);
        }
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}
