//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on rendering, input devices, or I/O:
//!
//! - **Deterministic**: the same seed and the same action/tick sequence replay the same game
//! - **Synchronous**: every operation completes immediately; time only enters through
//!   [`GameState::tick`]
//! - **Allocation-free hot paths**: fixed arrays for the board, `arrayvec` for cleared rows
//!   and pending events
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks, locking and line clearing
//! - [`pieces`]: square tetromino bitmaps and the three-candidate wall-kick rotation
//! - [`rng`]: uniform random piece generator with one-piece lookahead
//! - [`scoring`]: line-clear points, level progression and gravity intervals
//! - [`timer`]: the accumulator clock that schedules gravity
//! - [`game_state`]: the active-piece state machine tying everything together
//! - [`snapshot`]: serializable read-only view for hosts
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Simple kicks**: rotation tries in place, one column left, one column right
//! - **Ghost piece**: shows where the current piece will land
//! - **Scoring**: 40/100/300/1200 times the level for 1-4 rows, 2 points per hard-dropped row
//! - **Levels**: one level per 10 rows; gravity starts at 1000ms and speeds up 100ms per level
//!   down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//!
//! // A full second of gravity moves the new piece down one row.
//! let y = game.active().unwrap().y;
//! assert_eq!(game.tick(1000), 1);
//! assert_eq!(game.active().unwrap().y, y + 1);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{DisplayGrid, GameState, Tetromino};
pub use pieces::{get_shape, try_rotate, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_line_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::DropTimer;
