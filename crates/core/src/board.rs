//! Board module - the grid of locked cells
//!
//! 10 columns by 20 rows stored row-major in one flat array, `(x, y)` with x growing right and
//! y growing down. The grid never changes size; clearing rows refills from the top.
//!
//! Collision rules are asymmetric: the side walls and the floor block, the space above row 0
//! does not, so pieces may stick out of the top while spawning or rotating.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by a single `clear_full_rows` call, bottom row first.
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// Locked cells of a running game.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
        }
    }

    /// Flat slot of an in-grid coordinate.
    #[inline]
    fn slot(x: i8, y: i8) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
        Some(y * WIDTH + x)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or None outside the grid.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::slot(x, y).map(|i| self.cells[i])
    }

    /// Overwrite (x, y). Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some(i) = Self::slot(x, y) else {
            return false;
        };
        self.cells[i] = cell;
        true
    }

    /// Whether (x, y) blocks a piece.
    ///
    /// Walls (x outside 0..WIDTH) and the floor (y >= HEIGHT) always block. Cells above the
    /// visible grid (y < 0) never do.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if !(0..BOARD_WIDTH as i8).contains(&x) || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.get(x, y).flatten().is_some()
    }

    /// Whether `shape` anchored at (x, y) overlaps a wall, the floor or a locked cell.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .cells()
            .any(|(dx, dy)| self.is_occupied(x + dx, y + dy))
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// True when every cell of row `y` is filled. Rows outside the grid are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(Option::is_some)
    }

    /// Remove every full row and drop the rows above into the gaps.
    ///
    /// Surviving rows keep their order and the top is refilled with empty rows, so the grid
    /// size never changes. Returns the removed row indices (pre-clear numbering), bottom first.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        // Next destination row for a survivor, filled bottom-up.
        let mut dst = HEIGHT;

        for src in (0..HEIGHT).rev() {
            if self.is_row_full(src) {
                cleared.push(src as u8);
                continue;
            }
            dst -= 1;
            if dst != src {
                self.cells
                    .copy_within(src * WIDTH..(src + 1) * WIDTH, dst * WIDTH);
            }
        }

        self.cells[..dst * WIDTH].fill(None);
        cleared
    }

    /// Write `shape` anchored at (x, y) into the grid as `kind`.
    ///
    /// Cells outside the grid (including those above row 0) are dropped. Returns how many
    /// cells were actually written.
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.cells() {
            if self.set(x + dx, y + dy, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Encode the grid as piece ids (0 = empty, 1..=7 = `PieceKind::id`).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, PieceKind::id);
            }
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_mapping() {
        assert_eq!(Board::slot(0, 0), Some(0));
        assert_eq!(Board::slot(9, 0), Some(9));
        assert_eq!(Board::slot(0, 1), Some(10));
        assert_eq!(Board::slot(9, 19), Some(199));
        assert_eq!(Board::slot(-1, 0), None);
        assert_eq!(Board::slot(10, 0), None);
        assert_eq!(Board::slot(0, 20), None);
    }

    #[test]
    fn test_walls_and_floor_block_but_ceiling_does_not() {
        let board = Board::new();
        assert!(board.is_occupied(-1, 5));
        assert!(board.is_occupied(10, 5));
        assert!(board.is_occupied(3, 20));
        assert!(!board.is_occupied(3, -1));
        assert!(!board.is_occupied(3, -4));
        // A wall stays a wall above the grid too.
        assert!(board.is_occupied(-1, -1));
    }

    #[test]
    fn test_locked_cell_is_occupied() {
        let mut board = Board::new();
        assert!(board.set(3, 7, Some(PieceKind::S)));
        assert!(board.is_occupied(3, 7));
        assert!(!board.is_occupied(4, 7));
    }

    #[test]
    fn test_clear_preserves_order_of_survivors() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Some(PieceKind::I));
            board.set(x, 17, Some(PieceKind::I));
        }
        board.set(0, 18, Some(PieceKind::T));
        board.set(1, 16, Some(PieceKind::Z));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
        assert!(board.rows().take(18).all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_clear_entire_board_of_full_rows() {
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                board.set(x, y, Some(PieceKind::O));
            }
        }
        assert_eq!(board.clear_full_rows().len(), 20);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::Z));

        let mut grid = [[0u8; 10]; 20];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], PieceKind::I.id());
        assert_eq!(grid[19][9], PieceKind::Z.id());
        assert_eq!(grid[10][5], 0);
    }
}
