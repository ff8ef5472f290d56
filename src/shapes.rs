//! Piece catalog: the tetromino shapes and their rotation states.
//!
//! Every state is a hand-authored set of four cell offsets relative to the
//! piece's pivot, tuned for a 5×7 matrix rather than computed by rotation —
//! a rotation transition is a table lookup. Symmetric pieces carry fewer
//! states: the square has one, I/S/Z have two, T/L/J have four.

/// A cell offset `(dx, dy)` relative to a piece's pivot.
///
/// `+x` is right, `+y` is down. The pivot itself is `(0, 0)` and is part of
/// every state.
pub type Offset = (i8, i8);

/// The playable piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PieceKind {
    T,
    I,
    Square,
    L,
    J,
    S,
    Z,
}

/// The five-kind spawn pool (no S/Z).
pub const BASE_KINDS: [PieceKind; 5] = [
    PieceKind::T,
    PieceKind::I,
    PieceKind::Square,
    PieceKind::L,
    PieceKind::J,
];

/// The full seven-kind spawn pool.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::I,
    PieceKind::Square,
    PieceKind::L,
    PieceKind::J,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    /// All rotation states of this kind, each exactly four offsets.
    pub const fn states(self) -> &'static [[Offset; 4]] {
        match self {
            PieceKind::T => &[
                [(0, 0), (-1, 0), (1, 0), (0, 1)],
                [(0, 0), (1, 0), (0, 1), (0, -1)],
                [(0, 0), (-1, 0), (1, 0), (0, -1)],
                [(0, 0), (-1, 0), (0, 1), (0, -1)],
            ],
            PieceKind::I => &[
                [(0, 0), (0, 1), (0, 2), (0, -1)],
                [(0, 0), (-1, 0), (1, 0), (2, 0)],
            ],
            PieceKind::Square => &[[(0, 0), (-1, 0), (0, 1), (-1, 1)]],
            PieceKind::L => &[
                [(0, 0), (0, 1), (0, 2), (1, 0)],
                [(0, 0), (0, -1), (1, 0), (2, 0)],
                [(0, 0), (-1, 0), (0, -1), (0, -2)],
                [(0, 0), (-1, 0), (-2, 0), (0, 1)],
            ],
            PieceKind::J => &[
                [(0, 0), (-1, 0), (0, 1), (0, 2)],
                [(0, 0), (0, 1), (1, 0), (2, 0)],
                [(0, 0), (1, 0), (0, -1), (0, -2)],
                [(0, 0), (-1, 0), (-2, 0), (0, -1)],
            ],
            PieceKind::S => &[
                [(0, 0), (-1, 0), (0, 1), (1, 1)],
                [(0, 0), (0, -1), (-1, 0), (-1, 1)],
            ],
            PieceKind::Z => &[
                [(0, 0), (1, 0), (0, 1), (-1, 1)],
                [(0, 0), (0, -1), (1, 0), (1, 1)],
            ],
        }
    }

    /// Number of distinct rotation states.
    pub const fn rotation_count(self) -> u8 {
        self.states().len() as u8
    }

    /// The four pivot-relative offsets of one rotation state.
    ///
    /// `rotation` wraps modulo [`rotation_count`](Self::rotation_count).
    pub const fn offsets(self, rotation: u8) -> &'static [Offset; 4] {
        let states = self.states();
        &states[rotation as usize % states.len()]
    }
}
