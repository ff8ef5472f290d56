//! # ledtris
//!
//! Falling-block game engine for small LED dot-matrix handhelds.
//!
//! The engine is hardware-agnostic and `no_std`: it draws through plain
//! `embedded-hal` output pins and takes time from a free-running counter,
//! so it runs on anything that can drive a multiplexed matrix. The pieces:
//! - **Shapes**: hand-authored piece catalog with per-kind rotation states
//! - **Board**: settled-block grid with line clearing, generic over size
//! - **Piece**: the falling piece, collision queries, kick rotation
//! - **Input**: press-edge capability trait for a 4-way switch
//! - **Render**: column-multiplexed active-low matrix scan
//! - **Game**: ruleset, gravity schedule and the polling game loop
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let mut matrix = MatrixScanner::new(row_pins, col_pins);
//! let mut game: FunkitGame = Game::new(Ruleset::CLASSIC, &mut counter);
//! game.run(&mut matrix, &mut navswitch, &mut counter)?;
//! ```
//!
//! The loop never blocks: each [`Game::step`] lights one matrix column,
//! services at most one switch press and advances gravity, relying on
//! persistence of vision for the full-board image.

#![no_std]

mod board;
mod game;
mod input;
mod piece;
mod render;
mod rng;
mod shapes;
mod timer;

pub use board::Board;
pub use game::{Game, GameStatus, Ruleset, Seed};
pub use input::{Dir, NavSwitch};
pub use piece::ActivePiece;
pub use render::MatrixScanner;
pub use shapes::{ALL_KINDS, BASE_KINDS, Offset, PieceKind};
pub use timer::{GravityTimer, TickCounter};

/// Columns of the funkit-style 5×7 matrix the engine was written for.
pub const MATRIX_COLS: usize = 5;

/// Rows of the funkit-style 5×7 matrix.
pub const MATRIX_ROWS: usize = 7;

/// A game sized for the 5×7 handheld matrix.
pub type FunkitGame = Game<MATRIX_COLS, MATRIX_ROWS>;
