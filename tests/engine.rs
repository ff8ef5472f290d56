//! End-to-end engine tests against mock hardware: shared-state pins for
//! the matrix lines, a scripted navigation switch and a hand-advanced
//! counter.

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use ledtris::{
    ActivePiece, Board, Dir, Game, GameStatus, MatrixScanner, NavSwitch, PieceKind, Ruleset,
    TickCounter,
};

/// A drive line whose level stays observable after the scanner takes
/// ownership of it. `true` means driven low (active).
#[derive(Clone)]
struct SharedPin(Rc<Cell<bool>>);

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }
}

struct Matrix {
    scanner: MatrixScanner<SharedPin, 5, 7>,
    rows: [Rc<Cell<bool>>; 7],
    cols: [Rc<Cell<bool>>; 5],
}

fn matrix() -> Matrix {
    let rows: [Rc<Cell<bool>>; 7] = std::array::from_fn(|_| Rc::new(Cell::new(false)));
    let cols: [Rc<Cell<bool>>; 5] = std::array::from_fn(|_| Rc::new(Cell::new(false)));
    let row_pins = std::array::from_fn(|i| SharedPin(rows[i].clone()));
    let col_pins = std::array::from_fn(|i| SharedPin(cols[i].clone()));
    Matrix {
        scanner: MatrixScanner::new(row_pins, col_pins),
        rows,
        cols,
    }
}

impl Matrix {
    fn lit_cols(&self) -> Vec<usize> {
        (0..5).filter(|&c| self.cols[c].get()).collect()
    }

    fn lit_rows(&self) -> Vec<usize> {
        (0..7).filter(|&r| self.rows[r].get()).collect()
    }
}

struct ManualCounter(u32);

impl TickCounter for ManualCounter {
    fn count(&self) -> u32 {
        self.0
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Feeds one scripted press per update; `None` entries are idle ticks.
/// Once the script runs out every tick is idle.
struct ScriptedNav {
    script: VecDeque<Option<Dir>>,
    current: Option<Dir>,
}

impl ScriptedNav {
    fn new(script: impl IntoIterator<Item = Option<Dir>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            current: None,
        }
    }
}

impl NavSwitch for ScriptedNav {
    fn update(&mut self) {
        self.current = self.script.pop_front().flatten();
    }

    fn pushed(&self, dir: Dir) -> bool {
        self.current == Some(dir)
    }
}

/// Reports a press of the same direction on every tick.
struct HeldNav(Dir);

impl NavSwitch for HeldNav {
    fn update(&mut self) {}

    fn pushed(&self, dir: Dir) -> bool {
        self.0 == dir
    }
}

#[test]
fn scan_lights_one_column_at_a_time_and_covers_the_frame() {
    let mut cells = [[false; 5]; 7];
    cells[0][0] = true;
    cells[3][2] = true;
    cells[6][4] = true;
    let board: Board<5, 7> = Board::from(cells);
    // Square at (2, 2): cells (2,2), (1,2), (2,3), (1,3).
    let piece = ActivePiece::new(PieceKind::Square, 2, 2, 0);

    let mut expected: Vec<Vec<usize>> = vec![vec![0], vec![], vec![3], vec![], vec![6]];
    expected[2].push(2);
    expected[1].push(2);
    expected[2].push(3);
    expected[1].push(3);
    for rows in &mut expected {
        rows.sort_unstable();
        rows.dedup();
    }

    let mut m = matrix();
    // The column index advances before drawing, so the first scan lights
    // column 1 and the fifth wraps to column 0.
    for scan in 0..5 {
        m.scanner.scan(&board, &piece).unwrap();
        let col = (scan + 1) % 5;
        assert_eq!(m.lit_cols(), vec![col], "exactly one column per scan");
        assert_eq!(m.lit_rows(), expected[col], "rows for column {col}");
    }
}

#[test]
fn scan_skips_piece_cells_above_the_board() {
    let board: Board<5, 7> = Board::new();
    // Vertical I poking one cell past the top edge.
    let piece = ActivePiece::new(PieceKind::I, 2, 0, 0);

    let mut m = matrix();
    m.scanner.scan(&board, &piece).unwrap(); // column 1, empty
    assert_eq!(m.lit_rows(), Vec::<usize>::new());
    m.scanner.scan(&board, &piece).unwrap(); // column 2, the piece
    assert_eq!(m.lit_rows(), vec![0, 1, 2]);
}

#[test]
fn game_over_pattern_is_the_center_pixel() {
    let mut m = matrix();
    m.scanner.game_over_pattern().unwrap();
    assert_eq!(m.lit_cols(), vec![2]);
    assert_eq!(m.lit_rows(), vec![3]);
}

#[test]
fn gravity_tick_drops_the_piece_one_row() {
    let mut m = matrix();
    let mut counter = ManualCounter(0);
    let mut nav = ScriptedNav::new([]);
    let mut game: Game<5, 7> = Game::new(Ruleset::CLASSIC, &mut counter);

    // Low half of the period: arms the timer, nothing drops.
    counter.0 = 100;
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 0);

    // High half: the tick fires, the drop happens next iteration.
    counter.0 = 6_000;
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 0);
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 1);

    // Same half-period: no re-trigger.
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 1);
}

#[test]
fn east_and_west_presses_move_the_piece() {
    let mut m = matrix();
    let mut counter = ManualCounter(0);
    let mut game: Game<5, 7> = Game::new(Ruleset::CLASSIC, &mut counter);
    let mut nav = ScriptedNav::new([Some(Dir::East), Some(Dir::West), Some(Dir::West)]);

    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().x(), 3);
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().x(), 1);
}

#[test]
fn north_press_rotates_in_place_on_an_empty_board() {
    let mut m = matrix();
    let mut counter = ManualCounter(0);
    let mut game: Game<5, 7> = Game::new(Ruleset::CLASSIC, &mut counter);
    let mut nav = ScriptedNav::new([Some(Dir::North)]);

    let count = game.piece().kind().rotation_count();
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().rotation(), 1 % count);
    assert_eq!(game.piece().x(), 2, "no kick needed on an empty board");
}

#[test]
fn soft_drop_advances_one_row_per_press() {
    let mut m = matrix();
    let mut counter = ManualCounter(0);
    let mut game: Game<5, 7> = Game::new(Ruleset::CLASSIC, &mut counter);
    let mut nav = ScriptedNav::new([Some(Dir::South), None, Some(Dir::South)]);

    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 1);
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 1);
    game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.piece().y(), 2);
}

#[test]
fn held_soft_drop_plays_a_minimal_game_to_the_end() {
    let mut m = matrix();
    let mut counter = ManualCounter(42);
    let mut game: Game<5, 7> = Game::new(Ruleset::MINIMAL, &mut counter);
    let mut nav = HeldNav(Dir::South);

    // Without line clears the stack only grows, so the game must top out.
    let mut status = GameStatus::Running;
    for _ in 0..5_000 {
        status = game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
        if status == GameStatus::GameOver {
            break;
        }
    }
    assert_eq!(status, GameStatus::GameOver);
    assert!(
        game.board().rows().iter().flatten().any(|&cell| cell),
        "settled blocks expected on the board"
    );

    // Terminal state is sticky.
    let again = game.step(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(again, GameStatus::GameOver);
}

#[test]
fn run_finishes_with_the_terminal_pattern() {
    let mut m = matrix();
    let mut counter = ManualCounter(7);
    let mut game: ledtris::FunkitGame = Game::new(Ruleset::MINIMAL, &mut counter);
    let mut nav = HeldNav(Dir::South);

    game.run(&mut m.scanner, &mut nav, &mut counter).unwrap();
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(m.lit_cols(), vec![2]);
    assert_eq!(m.lit_rows(), vec![3]);
}
