//! Game orchestration: rules, spawning, gravity and the main loop.

use embedded_hal::digital::OutputPin;

use crate::board::Board;
use crate::input::{Dir, NavSwitch};
use crate::piece::ActivePiece;
use crate::render::MatrixScanner;
use crate::rng::Rng;
use crate::shapes::{ALL_KINDS, BASE_KINDS, PieceKind};
use crate::timer::{GravityTimer, TickCounter};

/// Where the spawn seed comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Seed {
    /// Fixed literal — deterministic piece sequence across runs.
    Fixed(u32),
    /// Read the free-running counter at startup.
    FromCounter,
}

/// Rule selection, chosen once at startup.
///
/// The two handheld program variants collapse into these switches instead
/// of parallel copies of the engine.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ruleset {
    /// Spawn S and Z pieces in addition to T, I, Square, L, J.
    pub include_sz: bool,
    /// Rotation state new pieces spawn in (wraps per kind).
    pub initial_rotation: u8,
    /// Attempt one-column kicks when a rotation or spawn is blocked.
    pub side_push: bool,
    /// Clear completed rows on lock.
    pub line_clear: bool,
    /// Gravity period in counter ticks.
    pub gravity_period: u32,
    pub seed: Seed,
}

impl Ruleset {
    /// The full variant: seven kinds, kicks, line clears, replayable seed.
    pub const CLASSIC: Self = Self {
        include_sz: true,
        initial_rotation: 0,
        side_push: true,
        line_clear: true,
        gravity_period: 10_000,
        seed: Seed::Fixed(2409),
    };

    /// The reduced variant: five kinds, no kicks, no line clears.
    pub const MINIMAL: Self = Self {
        include_sz: false,
        initial_rotation: 1,
        side_push: false,
        line_clear: false,
        gravity_period: 10_000,
        seed: Seed::FromCounter,
    };
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Running or terminally over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameStatus {
    Running,
    GameOver,
}

/// One game on a `W`×`H` matrix: board, active piece, gravity state.
///
/// The caller owns the capability surface (pins, switch, counter) and
/// threads it through [`step`](Self::step); the game itself holds no
/// hardware handles and no global state.
pub struct Game<const W: usize, const H: usize> {
    board: Board<W, H>,
    piece: ActivePiece,
    rng: Rng,
    ruleset: Ruleset,
    gravity: GravityTimer,
    drop_pending: bool,
    status: GameStatus,
}

impl<const W: usize, const H: usize> Game<W, H> {
    /// Start a game with the first piece spawned and the counter reset.
    pub fn new(ruleset: Ruleset, counter: &mut impl TickCounter) -> Self {
        let seed = match ruleset.seed {
            Seed::Fixed(seed) => seed,
            Seed::FromCounter => counter.count(),
        };
        let mut rng = Rng::new(seed);
        let kind = Self::pick(&mut rng, ruleset.include_sz);
        // The opening spawn lands on an empty board and needs no
        // placement validation.
        let piece = ActivePiece::new(kind, (W / 2) as i8, 0, ruleset.initial_rotation);
        counter.reset();
        Self {
            board: Board::new(),
            piece,
            rng,
            ruleset,
            gravity: GravityTimer::new(ruleset.gravity_period),
            drop_pending: false,
            status: GameStatus::Running,
        }
    }

    pub const fn board(&self) -> &Board<W, H> {
        &self.board
    }

    pub const fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// One loop iteration, in fixed order: render a column, service a due
    /// gravity tick, poll input, update the gravity schedule.
    pub fn step<P, N, C>(
        &mut self,
        matrix: &mut MatrixScanner<P, W, H>,
        nav: &mut N,
        counter: &mut C,
    ) -> Result<GameStatus, P::Error>
    where
        P: OutputPin,
        N: NavSwitch,
        C: TickCounter,
    {
        if self.status == GameStatus::GameOver {
            return Ok(self.status);
        }

        matrix.scan(&self.board, &self.piece)?;

        if self.drop_pending {
            if !self.piece.try_drop(&self.board) {
                self.settle(counter);
            }
            self.drop_pending = false;
        }

        nav.update();
        self.steer(nav, counter);

        if self.gravity.due(counter.count()) {
            self.drop_pending = true;
        }
        Ok(self.status)
    }

    /// Drive the game to completion, then show the terminal pattern once.
    pub fn run<P, N, C>(
        &mut self,
        matrix: &mut MatrixScanner<P, W, H>,
        nav: &mut N,
        counter: &mut C,
    ) -> Result<(), P::Error>
    where
        P: OutputPin,
        N: NavSwitch,
        C: TickCounter,
    {
        while self.step(matrix, nav, counter)? == GameStatus::Running {}
        matrix.game_over_pattern()
    }

    /// Service at most one directional press, in fixed priority order:
    /// soft-drop, rotate, right, left.
    fn steer(&mut self, nav: &impl NavSwitch, counter: &mut impl TickCounter) {
        if nav.pushed(Dir::South) {
            // Soft-drop settles immediately when blocked, ahead of the
            // gravity schedule.
            if !self.piece.try_drop(&self.board) {
                self.settle(counter);
            }
        } else if nav.pushed(Dir::North) {
            self.piece.try_rotate(&self.board, self.ruleset.side_push);
        } else if nav.pushed(Dir::East) {
            self.piece.try_shift(&self.board, 1);
        } else if nav.pushed(Dir::West) {
            self.piece.try_shift(&self.board, -1);
        }
    }

    /// Lock the piece, clear rows, spawn the next piece and check for the
    /// end of the game.
    fn settle(&mut self, counter: &mut impl TickCounter) {
        self.board.lock(&self.piece);
        if self.ruleset.line_clear {
            let cleared = self.board.clear_completed_lines();
            if cleared > 0 {
                // TODO: push cleared rows to the second player once the
                // serial link between two handhelds exists.
                #[cfg(feature = "defmt")]
                defmt::info!("cleared {=usize} rows", cleared);
            }
        }
        self.spawn(counter);
    }

    /// Spawn the next piece at the top center and restart the gravity
    /// period. The spawn is validated in place and after the same one-
    /// column kicks a rotation gets; with no valid position the game ends.
    fn spawn(&mut self, counter: &mut impl TickCounter) {
        let kind = Self::pick(&mut self.rng, self.ruleset.include_sz);
        self.piece = ActivePiece::new(kind, (W / 2) as i8, 0, self.ruleset.initial_rotation);
        counter.reset();
        self.drop_pending = false;

        #[cfg(feature = "defmt")]
        defmt::info!("spawned {}", kind);

        if self.board.is_game_over() {
            self.end();
            return;
        }
        if !self.piece.can_shift(&self.board, 0)
            && !(self.ruleset.side_push
                && (self.piece.try_shift(&self.board, -1) || self.piece.try_shift(&self.board, 1)))
        {
            self.end();
        }
    }

    fn end(&mut self) {
        self.status = GameStatus::GameOver;
        #[cfg(feature = "defmt")]
        defmt::info!("game over");
    }

    fn pick(rng: &mut Rng, include_sz: bool) -> PieceKind {
        let pool: &[PieceKind] = if include_sz { &ALL_KINDS } else { &BASE_KINDS };
        pool[rng.range(pool.len() as u32) as usize]
    }
}
