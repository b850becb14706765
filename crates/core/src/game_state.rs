//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, generator, scoring and the
//! drop timer. It handles piece movement, rotation, locking, line clears and the game
//! lifecycle.
//!
//! Player actions mutate the state directly. Gravity only advances through [`GameState::tick`],
//! which feeds elapsed time into the [`DropTimer`] and performs one downward step per expiry.
//! A downward step that cannot move lands the piece: it is locked, full rows are cleared and the
//! next piece spawns.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::pieces::{get_shape, spawn_x, try_rotate, Shape};
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_drop_interval_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::DropTimer;
use crate::types::*;
use crate::{Board, PieceGenerator};

/// Pending events kept for the host; the oldest is dropped when full.
pub const EVENT_CAPACITY: usize = 16;

/// Events drained by [`GameState::take_events`].
pub type EventBuffer = ArrayVec<GameEvent, EVENT_CAPACITY>;

/// Merged view of locked cells and the falling piece.
pub type DisplayGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current bitmap, after any rotations.
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino centered on the top row
    pub fn new(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Check if any filled cell overlaps a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    generator: PieceGenerator,
    timer: DropTimer,
    events: EventBuffer,
    /// Pieces spawned since the last `start()` (including a topped-out one).
    pieces_spawned: u32,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            generator: PieceGenerator::new(seed),
            timer: DropTimer::new(BASE_DROP_MS),
            events: EventBuffer::new(),
            pieces_spawned: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Reset everything and begin a new run.
    ///
    /// The generator keeps its RNG stream, so the first piece is fresh but still determined by
    /// the seed.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.events.clear();
        self.pieces_spawned = 0;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.timer.stop();
        self.timer.restart(get_drop_interval_ms(self.level));
        self.generator.reroll();

        info!(seed = self.generator.seed(), "game started");

        if self.spawn_piece() {
            self.timer.resume();
        }
    }

    /// Halt automatic falling. State is kept; `start()` or a pause/resume cycle starts the
    /// timer again. Returns false if the timer was already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.timer.is_running();
        self.timer.stop();
        was_running
    }

    /// Pause the run. Rejected once the game is over or while already paused.
    pub fn pause(&mut self) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        self.paused = true;
        self.timer.stop();
        true
    }

    /// Resume a paused run at the interval it had before.
    pub fn resume(&mut self) -> bool {
        if self.game_over || !self.paused {
            return false;
        }
        self.paused = false;
        if self.started {
            self.timer.resume();
        }
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Kind of the piece that spawns after the current one
    pub fn next_piece(&self) -> PieceKind {
        self.generator.peek()
    }

    /// Override the pending next piece (scripted openings, replays, tests).
    pub fn set_next_piece(&mut self, kind: PieceKind) {
        self.generator.set_next(kind);
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for puzzle setups and tests.
    ///
    /// The falling piece is not re-validated; keeping it out of locked cells is up to the
    /// caller.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current gravity interval (derived from the level)
    pub fn drop_interval_ms(&self) -> u32 {
        self.timer.interval_ms()
    }

    /// Whether gravity is currently scheduled
    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Milliseconds until the next automatic step, None while the timer is stopped
    pub fn next_drop_in_ms(&self) -> Option<u32> {
        self.timer.remaining_ms()
    }

    /// Drain pending events, oldest first
    /// Whether any event is waiting for `take_events`.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn take_events(&mut self) -> EventBuffer {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Whether the active piece accepts input right now
    fn can_act(&self) -> bool {
        !self.paused && !self.game_over && self.active.is_some()
    }

    /// Spawn the pending next piece at the top center.
    ///
    /// Returns false (and ends the game) when the new piece collides immediately. The topped-out
    /// piece stays visible as the active piece. Once the game is over this does nothing.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let kind = self.generator.draw();
        let piece = Tetromino::new(kind);

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if piece.collides(&self.board) {
            self.game_over = true;
            self.timer.stop();
            self.push_event(GameEvent::GameOver);
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
            return false;
        }

        debug!(kind = kind.as_str(), x = piece.x, "spawned piece");
        true
    }

    /// Try to move the active piece. Never locks; a blocked move is simply rejected.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if candidate.collides(&self.board) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Move down one row, landing the piece when it cannot move.
    ///
    /// Returns true only if the piece actually moved.
    pub fn step_down(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn move_down(&mut self) -> bool {
        self.step_down()
    }

    /// Rotate clockwise, trying the current column, then one left, then one right.
    pub fn rotate(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(&active.shape, active.x, active.y, |shape, x, y| {
            board.collides(shape, x, y)
        });

        match result {
            Some((shape, dx)) => {
                self.active = Some(Tetromino {
                    shape,
                    x: active.x + dx,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Drop to the landing row and lock, awarding points for every row travelled.
    pub fn hard_drop(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }

        let mut rows = 0;
        while self.step_down() {
            rows += 1;
        }
        self.score = self.score.saturating_add(calculate_drop_score(rows));
        true
    }

    /// Lock the active piece onto the board, clear lines, rescore and spawn the next piece
    fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        // Cells above row 0 are dropped silently.
        self.board
            .lock_piece(&active.shape, active.x, active.y, active.kind);

        let lines_cleared = self.board.clear_full_rows().len();
        let points = calculate_line_score(lines_cleared, self.level);
        self.score = self.score.saturating_add(points);

        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared as u32);

            let level = calculate_level(self.lines);
            if level != self.level {
                self.level = level;
                self.push_event(GameEvent::LevelUp { level });
                info!(level, lines = self.lines, "level up");
            }

            let interval = get_drop_interval_ms(self.level);
            if interval != self.timer.interval_ms() {
                self.timer.restart(interval);
            }
        }

        self.push_event(GameEvent::Locked {
            kind: active.kind,
            lines_cleared: lines_cleared as u32,
            points,
        });
        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines_cleared,
            "locked piece"
        );

        self.spawn_piece();
    }

    /// Calculate the ghost piece Y position (where piece would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;

        let mut y = active.y;
        while !self.board.collides(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Landing anchor of the active piece if dropped straight down
    pub fn ghost_position(&self) -> Option<(i8, i8)> {
        let active = self.active?;
        self.ghost_y().map(|y| (active.x, y))
    }

    /// Locked cells with the active piece painted on top
    pub fn display_grid(&self) -> DisplayGrid {
        let mut grid: DisplayGrid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }

        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = Some(active.kind);
                }
            }
        }
        grid
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Performs one downward step per elapsed interval, each at the interval in force at that
    /// moment. Stops early when the timer stops (game over, pause). Returns the number of
    /// automatic steps taken.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.started || self.paused || self.game_over {
            return 0;
        }

        let mut remaining = elapsed_ms;
        let mut steps = 0;
        while let Some(until) = self.timer.remaining_ms() {
            if remaining < until {
                self.timer.elapse(remaining);
                break;
            }
            remaining -= until;
            self.timer.elapse(until);
            self.step_down();
            steps += 1;
        }
        steps
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Stop => self.stop(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        for (dst, src) in out.display.iter_mut().zip(self.display_grid()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, PieceKind::id);
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self.ghost_position().map(|(x, y)| [x, y]);
        out.next = self.next_piece();
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.seed();
        out.pieces_spawned = self.pieces_spawned;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.timer.interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Started game whose active piece is `kind` at its spawn position.
    fn started_with(kind: PieceKind) -> GameState {
        let mut state = GameState::new(12345);
        state.start();
        state.set_next_piece(kind);
        state.spawn_piece();
        state
    }

    fn fill_row_except(state: &mut GameState, y: i8, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                state.board_mut().set(x, y, Some(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert!(!state.timer_running());
        assert_eq!(state.drop_interval_ms(), 1000);
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        state.start();

        assert!(state.started);
        assert!(state.active.is_some());
        assert!(state.timer_running());
        assert_eq!(state.pieces_spawned, 1);
    }

    #[test]
    fn test_o_piece_spawns_centered() {
        let state = started_with(PieceKind::O);
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (4, 0));
        assert!(!state.game_over);
    }

    #[test]
    fn test_spawn_uses_previewed_kind() {
        let mut state = GameState::new(12345);
        state.start();
        let next = state.next_piece();
        assert!(state.hard_drop());
        assert_eq!(state.active.unwrap().kind, next);
    }

    #[test]
    fn test_try_move() {
        let mut state = started_with(PieceKind::T);
        let initial_x = state.active.unwrap().x;

        assert!(state.move_right());
        assert_eq!(state.active.unwrap().x, initial_x + 1);
        assert!(state.move_left());
        assert_eq!(state.active.unwrap().x, initial_x);
    }

    #[test]
    fn test_wall_blocks_horizontal_moves_without_side_effects() {
        let mut state = started_with(PieceKind::O);
        let mut moved = 0;
        for _ in 0..10 {
            if state.move_left() {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.active.unwrap().x, 0);
        assert_eq!(state.pieces_spawned, 2);
    }

    #[test]
    fn test_move_down_locks_on_floor() {
        let mut state = started_with(PieceKind::O);
        let spawned = state.pieces_spawned;
        // O occupies rows 0-1; 18 moves reach the floor.
        for _ in 0..18 {
            assert!(state.move_down());
        }
        assert!(!state.move_down());
        assert_eq!(state.pieces_spawned, spawned + 1);
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board.get(5, 18), Some(Some(PieceKind::O)));
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut state = started_with(PieceKind::T);
        let before = state.active.unwrap();
        assert!(state.rotate());
        let after = state.active.unwrap();
        assert_eq!(after.shape, before.shape.rotate_cw());
        assert_eq!((after.x, after.y), (before.x, before.y));
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let mut state = started_with(PieceKind::T);
        // Vertical T (East) hugging the left wall with its stem.
        assert!(state.rotate());
        while state.move_left() {}
        let east = state.active.unwrap();
        assert_eq!(east.x, -1);

        // South orientation needs column -1 at x=-1; the left candidate is worse, right works.
        assert!(state.rotate());
        assert_eq!(state.active.unwrap().x, 0);
    }

    #[test]
    fn test_rotation_rejected_when_all_candidates_collide() {
        let mut state = started_with(PieceKind::I);
        // Let the horizontal I fall a few rows, then box it in so no vertical fits.
        for _ in 0..5 {
            assert!(state.move_down());
        }
        let before = state.active.unwrap();
        // I sits on row 6 (anchor y=5, row 1 filled). Block row 7 and row 5 everywhere.
        fill_row_except(&mut state, 7, &[]);
        fill_row_except(&mut state, 5, &[]);

        assert!(!state.rotate());
        assert_eq!(state.active.unwrap(), before);
    }

    #[test]
    fn test_hard_drop_awards_two_points_per_row() {
        let mut state = started_with(PieceKind::O);
        assert!(state.hard_drop());
        assert_eq!(state.score, 18 * 2);
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
    }

    #[test]
    fn test_double_line_clear_scores_hundred_times_level() {
        let mut state = started_with(PieceKind::O);
        fill_row_except(&mut state, 19, &[4, 5]);
        fill_row_except(&mut state, 18, &[4, 5]);

        assert!(state.hard_drop());
        assert_eq!(state.lines, 2);
        assert_eq!(state.score, 18 * 2 + 100);
        assert!(state.board.rows().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_level_up_shortens_interval_and_restarts_timer() {
        let mut state = started_with(PieceKind::I);
        state.lines = 9;
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);

        // Consume part of the current interval first.
        assert_eq!(state.tick(600), 0);
        assert!(state.hard_drop());

        assert_eq!(state.lines, 10);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms(), 900);
        assert_eq!(state.next_drop_in_ms(), Some(900));

        let events = state.take_events();
        assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_clear_without_level_change_keeps_phase() {
        let mut state = started_with(PieceKind::I);
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        state.tick(600);
        assert!(state.hard_drop());
        assert_eq!(state.lines, 1);
        assert_eq!(state.next_drop_in_ms(), Some(400));
    }

    #[test]
    fn test_tick_moves_piece_once_per_interval() {
        let mut state = started_with(PieceKind::T);
        let y0 = state.active.unwrap().y;

        assert_eq!(state.tick(999), 0);
        assert_eq!(state.active.unwrap().y, y0);
        assert_eq!(state.tick(1), 1);
        assert_eq!(state.active.unwrap().y, y0 + 1);
        assert_eq!(state.tick(3000), 3);
        assert_eq!(state.active.unwrap().y, y0 + 4);
    }

    #[test]
    fn test_tick_noop_before_start_and_while_paused() {
        let mut state = GameState::new(1);
        assert_eq!(state.tick(5000), 0);

        state.start();
        assert!(state.pause());
        let y = state.active.unwrap().y;
        assert_eq!(state.tick(5000), 0);
        assert_eq!(state.active.unwrap().y, y);
    }

    #[test]
    fn test_actions_rejected_while_paused() {
        let mut state = started_with(PieceKind::T);
        assert!(state.pause());
        let before = state.active.unwrap();

        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.move_down());
        assert!(!state.rotate());
        assert!(!state.hard_drop());
        assert_eq!(state.active.unwrap(), before);

        assert!(state.toggle_pause());
        assert!(!state.paused);
        assert!(state.timer_running());
    }

    #[test]
    fn test_topping_out_ends_game_and_stops_timer() {
        let mut state = GameState::new(3);
        state.start();
        fill_row_except(&mut state, 0, &[]);
        fill_row_except(&mut state, 1, &[]);

        assert!(!state.spawn_piece());
        assert!(state.game_over);
        assert!(!state.timer_running());
        assert_eq!(state.tick(10_000), 0);
        assert!(!state.toggle_pause());
        assert!(!state.move_down());
        assert!(state.take_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_nothing_changes_after_game_over() {
        let mut state = GameState::new(3);
        state.start();
        fill_row_except(&mut state, 0, &[]);
        fill_row_except(&mut state, 1, &[]);
        assert!(!state.spawn_piece());
        state.take_events();

        let board = state.board.clone();
        let active = state.active;
        let spawned = state.pieces_spawned;

        assert!(!state.spawn_piece());
        state.lock_piece();
        assert!(!state.step_down());
        assert!(!state.hard_drop());

        assert_eq!(state.board, board);
        assert_eq!(state.active, active);
        assert_eq!(state.pieces_spawned, spawned);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_start_resets_after_game_over() {
        let mut state = GameState::new(3);
        state.start();
        state.score = 500;
        fill_row_except(&mut state, 0, &[]);
        fill_row_except(&mut state, 1, &[]);
        state.spawn_piece();
        assert!(state.game_over);

        state.start();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.board.get(0, 0), Some(None));
        assert!(state.timer_running());
    }

    #[test]
    fn test_stop_keeps_state() {
        let mut state = started_with(PieceKind::L);
        state.move_left();
        let before = state.active.unwrap();
        assert!(state.stop());
        assert!(!state.stop());
        assert_eq!(state.tick(10_000), 0);
        assert_eq!(state.active.unwrap(), before);
    }

    #[test]
    fn test_ghost_y() {
        let state = started_with(PieceKind::O);
        assert_eq!(state.ghost_position(), Some((4, 18)));
    }

    #[test]
    fn test_display_grid_overlays_active_piece() {
        let state = started_with(PieceKind::O);
        let grid = state.display_grid();
        assert_eq!(grid[0][4], Some(PieceKind::O));
        assert_eq!(grid[1][5], Some(PieceKind::O));
        assert_eq!(state.board.get(4, 0), Some(None));
    }

    #[test]
    fn test_lock_reports_event() {
        let mut state = started_with(PieceKind::S);
        assert!(state.apply_action(GameAction::HardDrop));
        let events = state.take_events();
        assert!(matches!(
            events.first(),
            Some(GameEvent::Locked {
                kind: PieceKind::S,
                lines_cleared: 0,
                points: 0
            })
        ));
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = started_with(PieceKind::O);
        let snap = state.snapshot();
        assert_eq!(snap.level, 1);
        assert_eq!(snap.drop_interval_ms, 1000);
        assert_eq!(snap.ghost, Some([4, 18]));
        assert_eq!(snap.display[0][4], PieceKind::O.id());
        assert_eq!(snap.board[0][4], 0);
        assert_eq!(snap.active.unwrap().cells, [[4, 0], [5, 0], [4, 1], [5, 1]]);
    }
}
