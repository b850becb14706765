//! Pieces module - tetromino bitmaps and the simple wall-kick rotation
//!
//! Every kind has a square bitmap template (4x4 for I, 2x2 for O, 3x3 otherwise). A falling
//! piece carries its own copy of the bitmap; rotating produces a new bitmap and leaves the
//! template alone.
//!
//! Rotation only knows three candidates: in place, one column left, one column right. There is
//! no per-kind kick table, so an I piece hugging a wall may refuse rotations a guideline game
//! would allow.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest bitmap side length (the I piece).
pub const MAX_SHAPE_SIZE: u8 = 4;

/// Horizontal anchor shifts tried, in order, when rotating.
pub const KICK_OFFSETS: [i8; 3] = [0, -1, 1];

/// Bit for cell (x, y) of a shape bitmap.
const fn bit(x: u8, y: u8) -> u16 {
    1 << (y * MAX_SHAPE_SIZE + x)
}

/// Square occupancy bitmap of side `size`, bit `y * MAX_SHAPE_SIZE + x` set when (x, y) is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    bits: u16,
}

impl Shape {
    /// Build a shape from padded rows; only the top-left `size` x `size` block is read.
    pub const fn from_rows(
        size: u8,
        rows: [[u8; MAX_SHAPE_SIZE as usize]; MAX_SHAPE_SIZE as usize],
    ) -> Self {
        let mut bits = 0u16;
        let mut y = 0;
        while y < size as usize {
            let mut x = 0;
            while x < size as usize {
                if rows[y][x] != 0 {
                    bits |= bit(x as u8, y as u8);
                }
                x += 1;
            }
            y += 1;
        }
        Self { size, bits }
    }

    /// Side length of the bitmap.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.bits & bit(x, y) != 0
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Offsets of filled cells relative to the top-left anchor, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_filled(x, y))
            .map(|(x, y)| (x as i8, y as i8))
    }

    /// The bitmap turned 90° clockwise (transpose, then reverse each row).
    pub fn rotate_cw(&self) -> Self {
        let n = self.size;
        let mut bits = 0u16;
        for y in 0..n {
            for x in 0..n {
                if self.is_filled(y, n - 1 - x) {
                    bits |= bit(x, y);
                }
            }
        }
        Self { size: n, bits }
    }
}

const I_SHAPE: Shape = Shape::from_rows(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]]);
const L_SHAPE: Shape = Shape::from_rows(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]]);
const O_SHAPE: Shape = Shape::from_rows(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_rows(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0; 4]]);
const T_SHAPE: Shape = Shape::from_rows(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_rows(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0; 4]]);

/// Canonical spawn bitmap for a piece kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Column that centers `shape` on the board.
pub fn spawn_x(shape: &Shape) -> i8 {
    ((BOARD_WIDTH - shape.size()) / 2) as i8
}

/// Try to rotate `shape` clockwise at anchor (x, y).
///
/// Returns the rotated bitmap and the kick that was applied to x, or None if every candidate
/// collides.
pub fn try_rotate(
    shape: &Shape,
    x: i8,
    y: i8,
    collides: impl Fn(&Shape, i8, i8) -> bool,
) -> Option<(Shape, i8)> {
    let rotated = shape.rotate_cw();
    KICK_OFFSETS
        .iter()
        .copied()
        .find(|&dx| !collides(&rotated, x + dx, y))
        .map(|dx| (rotated, dx))
}
