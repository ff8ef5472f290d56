//! Column-multiplexed matrix scan.
//!
//! The matrix has one drive line per row and one select line per column,
//! active low. Only a single column is ever lit; each [`scan`] advances to
//! the next column and draws the settled board plus the active piece for
//! that column only. Run fast enough, the rolling scan reads as a steady
//! full-board image, which is why nothing in the engine may block.
//!
//! [`scan`]: MatrixScanner::scan

use embedded_hal::digital::OutputPin;

use crate::board::Board;
use crate::piece::ActivePiece;

/// Drives the row and column lines of a `W`×`H` LED matrix.
pub struct MatrixScanner<P, const W: usize, const H: usize> {
    rows: [P; H],
    cols: [P; W],
    column: usize,
}

impl<P: OutputPin, const W: usize, const H: usize> MatrixScanner<P, W, H> {
    /// Take ownership of the drive lines. `rows[0]` is the top row,
    /// `cols[0]` the leftmost column.
    pub const fn new(rows: [P; H], cols: [P; W]) -> Self {
        Self {
            rows,
            cols,
            column: 0,
        }
    }

    /// Drive every line inactive (high), blanking the matrix.
    pub fn blank(&mut self) -> Result<(), P::Error> {
        for row in &mut self.rows {
            row.set_high()?;
        }
        for col in &mut self.cols {
            col.set_high()?;
        }
        Ok(())
    }

    /// Draw one column of the frame: blank, advance the column index,
    /// select that column and assert the row line of every settled or
    /// active-piece cell in it.
    pub fn scan(
        &mut self,
        board: &Board<W, H>,
        piece: &ActivePiece,
    ) -> Result<(), P::Error> {
        self.blank()?;
        self.column = (self.column + 1) % W;
        self.cols[self.column].set_low()?;

        for y in 0..H {
            if board.occupied(self.column as i8, y as i8) {
                self.rows[y].set_low()?;
            }
        }
        for (x, y) in piece.cells() {
            if x == self.column as i8 && y >= 0 && (y as usize) < H {
                self.rows[y as usize].set_low()?;
            }
        }
        Ok(())
    }

    /// The fixed terminal pattern: a single lit center pixel.
    pub fn game_over_pattern(&mut self) -> Result<(), P::Error> {
        self.blank()?;
        self.cols[W / 2].set_low()?;
        self.rows[H / 2].set_low()
    }
}
