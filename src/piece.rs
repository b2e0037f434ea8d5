#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use log::trace;

use crate::components::{Board, PieceKind};
use crate::game::{PIECE_SIZE, ROTATION_COUNT, spawn_column};
use crate::shapes::{self, Mask};

/// The falling piece. `(x, y)` is the top-left corner of its 4x4 box in
/// board coordinates; `x` goes negative when the left columns of the mask
/// are empty and the piece hugs the left wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    #[must_use]
    pub fn new(kind: PieceKind, rotation: usize, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: rotation % ROTATION_COUNT,
            x,
            y,
        }
    }

    /// A fresh piece at the top of the board, centered, in rotation 0.
    #[must_use]
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        Self::new(kind, 0, spawn_column(board.width()), 0)
    }

    #[must_use]
    pub fn mask(&self) -> Mask {
        shapes::mask(self.kind, self.rotation)
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.mask()
            .cells()
            .map(move |(col, row)| (x + col as i32, y + row as i32))
    }

    /// True when none of the piece's cells sit on a settled block.
    #[must_use]
    pub fn fits(&self, board: &Board) -> bool {
        self.cells()
            .all(|(col, row)| board.cell(col, row).is_none())
    }

    /// Moves the piece by `(dx, dy)` if every cell stays on the board and
    /// clear of settled blocks. Returns false and leaves the piece untouched
    /// otherwise.
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let width = board.width() as i32;
        let height = board.height() as i32;
        let blocked = self.cells().any(|(col, row)| {
            let (col, row) = (col + dx, row + dy);
            col < 0 || col >= width || row < 0 || row >= height || board.is_occupied(col, row)
        });
        if blocked {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Whether the piece rests on the floor or on a settled block.
    #[must_use]
    pub fn is_landed(&self, board: &Board) -> bool {
        let height = board.height() as i32;
        self.mask().bottom_cells().any(|(col, row)| {
            let col = self.x + col as i32;
            let below = self.y + row as i32 + 1;
            below >= height || board.is_occupied(col, below)
        })
    }

    /// Steps to the next rotation state, kicking off the walls if needed.
    ///
    /// The piece is first pushed right while any cell of the new state would
    /// be left of the board, then left while any would be right of it. Each
    /// push is an ordinary move and the whole rotation is abandoned as soon
    /// as one of them is blocked. Finally the new state must stay within the
    /// rows of the board and clear of settled blocks, except where the current state
    /// already covers the same cell. On failure the piece is restored.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let target_rotation = (self.rotation + 1) % ROTATION_COUNT;
        let target = shapes::mask(self.kind, target_rotation);
        let current = self.mask();
        let x_before = self.x;

        if !self.kick(board, target, 1) || !self.kick(board, target, -1) {
            trace!("Rotation of {:?} blocked during wall kick", self.kind);
            self.x = x_before;
            return false;
        }

        let height = board.height() as i32;
        let blocked = target.cells().any(|(col, row)| {
            let board_col = self.x + col as i32;
            let board_row = self.y + row as i32;
            board_row < 0
                || board_row >= height
                || (board.is_occupied(board_col, board_row) && !current.is_filled(col, row))
        });
        if blocked {
            self.x = x_before;
            return false;
        }

        self.rotation = target_rotation;
        true
    }

    /// Pushes the piece by `step` columns until `target` fits horizontally.
    /// Gives up after a full board width of pushes or on the first blocked one.
    fn kick(&mut self, board: &Board, target: Mask, step: i32) -> bool {
        let width = board.width() as i32;
        for _ in 0..=board.width() {
            let out_of_bounds = target.cells().any(|(col, _)| {
                let col = col as i32;
                if step > 0 {
                    col < -self.x
                } else {
                    col >= width - self.x
                }
            });
            if !out_of_bounds {
                return true;
            }
            if !self.try_move(board, step, 0) {
                return false;
            }
        }
        false
    }

    /// Drops the piece as far as it goes and returns the number of rows fallen.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut distance = 0;
        while self.try_move(board, 0, 1) {
            distance += 1;
        }
        distance
    }

    /// Row the piece would land on if it fell straight down.
    #[must_use]
    pub fn ghost_y(&self, board: &Board) -> i32 {
        let mut probe = *self;
        for _ in 0..board.height() {
            if probe.is_landed(board) {
                break;
            }
            probe.y += 1;
        }
        probe.y
    }

    /// Landing row for the drop helper, only offered once the drop is longer
    /// than the piece box is tall.
    #[must_use]
    pub fn helper_y(&self, board: &Board) -> Option<i32> {
        let ghost_y = self.ghost_y(board);
        let box_height = PIECE_SIZE as i32;
        (self.y + box_height < ghost_y).then_some(ghost_y)
    }
}
