//! The falling piece and its collision queries.
//!
//! All positions are signed board coordinates; cells above the visible
//! board (negative rows) never collide, so a freshly spawned piece may
//! protrude past the top edge.

use crate::board::Board;
use crate::shapes::{Offset, PieceKind};

/// The piece currently under player control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivePiece {
    kind: PieceKind,
    x: i8,
    y: i8,
    rotation: u8,
}

impl ActivePiece {
    /// A piece of `kind` pivoting at `(x, y)`.
    ///
    /// `rotation` wraps modulo the kind's rotation count.
    pub fn new(kind: PieceKind, x: i8, y: i8, rotation: u8) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: rotation % kind.rotation_count(),
        }
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn x(&self) -> i8 {
        self.x
    }

    pub const fn y(&self) -> i8 {
        self.y
    }

    pub const fn rotation(&self) -> u8 {
        self.rotation
    }

    /// The four absolute board cells the piece covers right now.
    pub fn cells(&self) -> [Offset; 4] {
        let template = self.kind.offsets(self.rotation);
        let mut cells = [(0i8, 0i8); 4];
        for (cell, &(dx, dy)) in cells.iter_mut().zip(template) {
            *cell = (self.x + dx, self.y + dy);
        }
        cells
    }

    /// Whether the piece can fall one row.
    ///
    /// False once any cell sits on the bottom row or directly above a
    /// settled block. Cells above the visible board never collide.
    pub fn can_drop<const W: usize, const H: usize>(&self, board: &Board<W, H>) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y)| y < H as i8 - 1 && !board.occupied(x, y + 1))
    }

    /// Whether the piece fits when shifted `direction` columns.
    ///
    /// `direction` is -1, 0 or 1; 0 tests the piece in place (used after a
    /// rotation or spawn). Every cell must stay within `[0, W-1]` and land
    /// on no settled block; rows above the top are exempt.
    pub fn can_shift<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
        direction: i8,
    ) -> bool {
        self.cells().iter().all(|&(x, y)| {
            let shifted = x + direction;
            (0..W as i8).contains(&shifted) && !board.occupied(shifted, y)
        })
    }

    /// Fall one row if possible.
    pub fn try_drop<const W: usize, const H: usize>(&mut self, board: &Board<W, H>) -> bool {
        if self.can_drop(board) {
            self.y += 1;
            true
        } else {
            false
        }
    }

    /// Shift one column in `direction` if possible.
    pub fn try_shift<const W: usize, const H: usize>(
        &mut self,
        board: &Board<W, H>,
        direction: i8,
    ) -> bool {
        if self.can_shift(board, direction) {
            self.x += direction;
            true
        } else {
            false
        }
    }

    /// Advance to the next rotation state, kicking one column left or right
    /// when the in-place orientation is blocked (only if `side_push` is on).
    ///
    /// If neither the in-place orientation nor a kick fits, the rotation is
    /// reverted and the piece is left exactly as it was.
    pub fn try_rotate<const W: usize, const H: usize>(
        &mut self,
        board: &Board<W, H>,
        side_push: bool,
    ) -> bool {
        let count = self.kind.rotation_count();
        self.rotation = (self.rotation + 1) % count;
        if self.can_shift(board, 0) {
            return true;
        }
        if side_push && (self.try_shift(board, -1) || self.try_shift(board, 1)) {
            return true;
        }
        self.rotation = (self.rotation + count - 1) % count;
        false
    }
}
