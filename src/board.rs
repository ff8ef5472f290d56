//! Settled-block occupancy grid.
//!
//! Row 0 is the top of the matrix. The grid is generic over its dimensions;
//! the funkit-style handheld this engine targets is 5 columns × 7 rows.

use crate::piece::ActivePiece;

/// Occupancy grid of settled blocks, `W` columns × `H` rows.
///
/// All coordinate queries take signed `i8` coordinates and are bounds
/// checked; anything outside the grid reads as unoccupied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board<const W: usize, const H: usize> {
    cells: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> From<[[bool; W]; H]> for Board<W, H> {
    fn from(cells: [[bool; W]; H]) -> Self {
        Self { cells }
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// An empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[false; W]; H],
        }
    }

    /// Whether the cell at `(x, y)` holds a settled block.
    ///
    /// Out-of-grid coordinates (including negative ones) answer `false`.
    pub fn occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < W && y < H && self.cells[y][x]
    }

    /// The raw rows, top first.
    pub const fn rows(&self) -> &[[bool; W]; H] {
        &self.cells
    }

    /// Commit an active piece's cells into the grid.
    ///
    /// Cells outside the grid are dropped; in-bounds cells are overwritten
    /// without checking for overlap.
    pub fn lock(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.cells() {
            if x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H {
                self.cells[y as usize][x as usize] = true;
            }
        }
    }

    /// Clear every fully occupied row and return how many were cleared.
    ///
    /// Rows are scanned top to bottom; each completed row is removed by
    /// shifting everything above it down one row and emptying row 0. A row
    /// shifted into an already-visited index cannot itself be complete (it
    /// came from above the cleared row and was visited earlier in the same
    /// pass), so a single pass suffices.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..H {
            if self.cells[y].iter().all(|&cell| cell) {
                for row in (1..=y).rev() {
                    self.cells[row] = self.cells[row - 1];
                }
                self.cells[0] = [false; W];
                cleared += 1;
            }
        }
        cleared
    }

    /// Whether the stack has reached the top row.
    pub fn is_game_over(&self) -> bool {
        self.cells[0].iter().any(|&cell| cell)
    }
}
