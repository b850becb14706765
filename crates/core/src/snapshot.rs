use serde::Serialize;

use crate::game_state::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute `[x, y]` of each filled cell, row by row.
    pub cells: [[i8; 2]; 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        let mut cells = [[0i8; 2]; 4];
        for (slot, (x, y)) in cells.iter_mut().zip(value.cells()) {
            *slot = [x, y];
        }
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells,
        }
    }
}

/// Read-only copy of everything a host needs to draw one frame.
///
/// Grids use `PieceKind::id` encoding (0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Locked cells only.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Locked cells with the active piece painted on top.
    pub display: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing anchor `[x, y]` of the active piece.
    pub ghost: Option<[i8; 2]>,
    pub next: PieceKind,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
    pub pieces_spawned: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            display: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            next: PieceKind::I,
            started: false,
            paused: false,
            game_over: false,
            seed: 0,
            pieces_spawned: 0,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}
