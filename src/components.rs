#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap,
    // Allow more than 3 bools in structs for input handling where bools represent distinct flags
    clippy::struct_excessive_bools
)]

use bevy_ecs::prelude::*;

use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, KIND_COUNT, STARTING_LEVEL, STARTUP_SCORE_GOAL};
use crate::piece::ActivePiece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Maps `0..7` onto the kinds; larger values wrap around.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % KIND_COUNT]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A board cell: `None` when empty, otherwise the kind that filled it.
pub type Cell = Option<PieceKind>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; height]; width],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for column in &mut self.cells {
            column.fill(None);
        }
    }

    /// Contents of a cell. Anything outside the grid reads as empty.
    #[must_use]
    pub fn cell(&self, col: i32, row: i32) -> Cell {
        self.index(col, row).and_then(|(x, y)| self.cells[x][y])
    }

    /// Collision query. Side walls and everything from the floor down count
    /// as occupied, rows above the top are open.
    #[must_use]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        if col < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return true;
        }
        if row < 0 {
            return false;
        }
        self.cells[col as usize][row as usize].is_some()
    }

    /// Writes outside the grid are ignored.
    pub fn set_cell(&mut self, col: i32, row: i32, kind: PieceKind) {
        if let Some((x, y)) = self.index(col, row) {
            self.cells[x][y] = Some(kind);
        }
    }

    pub fn clear_cell(&mut self, col: i32, row: i32) {
        if let Some((x, y)) = self.index(col, row) {
            self.cells[x][y] = None;
        }
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.cells.iter().all(|column| column[row].is_some())
    }

    /// Removes `row` and drops every row above it by one. Row 0 comes back empty.
    pub fn clear_row_and_shift_down(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        for column in &mut self.cells {
            for y in (1..=row).rev() {
                column[y] = column[y - 1];
            }
            column[0] = None;
        }
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .map(|column| column.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Row-major copy of the grid, top row first.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.cells[x][y]).collect())
            .collect()
    }

    fn index(&self, col: i32, row: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(col).ok()?;
        let y = usize::try_from(row).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A new piece had no room to enter the board.
    BlockedSpawn,
    /// The score reached the cap.
    MaxScore,
}

/// Everything that changes during one game.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub board: Board,
    pub active: Option<ActivePiece>,
    pub score: u32,
    pub level: u32,
    pub score_goal: u32,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
}

impl Session {
    #[must_use]
    pub fn new(startup_score_goal: u32) -> Self {
        Self {
            board: Board::default(),
            active: None,
            score: 0,
            level: STARTING_LEVEL,
            score_goal: startup_score_goal,
            lines_cleared: 0,
            pieces_locked: 0,
            phase: Phase::Spawning,
            game_over: false,
            game_over_reason: None,
        }
    }

    pub fn reset(&mut self, startup_score_goal: u32) {
        *self = Self::new(startup_score_goal);
    }

    pub fn end(&mut self, reason: GameOverReason) {
        self.game_over = true;
        self.game_over_reason = Some(reason);
        self.phase = Phase::GameOver;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(STARTUP_SCORE_GOAL)
    }
}

/// Pending player input. Edge flags are consumed by the next tick, the
/// `*_held` flags mirror the physical key state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub restart: bool,
    pub left_held: bool,
    pub right_held: bool,
    pub down_held: bool,
}

impl Input {
    /// Forgets presses that have not been handled yet, keeps hold state.
    pub fn clear_presses(&mut self) {
        self.left = false;
        self.right = false;
        self.down = false;
        self.rotate = false;
        self.hard_drop = false;
        self.restart = false;
    }
}
