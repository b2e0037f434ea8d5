#![warn(clippy::all, clippy::pedantic)]

//! Rotation states for every piece kind.
//!
//! Each state is a 4x4 occupancy mask. The table is written one row per
//! line, top row first, so it reads the way the piece looks on the board.
//! Everything else goes through [`mask`] and [`Mask::is_filled`], which take
//! `(col, row)` in that order.

use crate::components::PieceKind;
use crate::game::{KIND_COUNT, PIECE_SIZE, ROTATION_COUNT};

type Rows = [[u8; PIECE_SIZE]; PIECE_SIZE];

const E: [u8; PIECE_SIZE] = [0, 0, 0, 0];

#[rustfmt::skip]
const TABLE: [[Rows; ROTATION_COUNT]; KIND_COUNT] = [
    // I
    [
        [E, [1, 1, 1, 1], E, E],
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
        [E, [1, 1, 1, 1], E, E],
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    ],
    // J
    [
        [[1, 1, 1, 0], [0, 0, 1, 0], E, E],
        [[1, 1, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], E],
        [[1, 0, 0, 0], [1, 1, 1, 0], E, E],
        [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], E],
    ],
    // L
    [
        [[1, 1, 1, 0], [1, 0, 0, 0], E, E],
        [[1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 0, 0], E],
        [[0, 0, 1, 0], [1, 1, 1, 0], E, E],
        [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], E],
    ],
    // O
    [
        [[1, 1, 0, 0], [1, 1, 0, 0], E, E],
        [[1, 1, 0, 0], [1, 1, 0, 0], E, E],
        [[1, 1, 0, 0], [1, 1, 0, 0], E, E],
        [[1, 1, 0, 0], [1, 1, 0, 0], E, E],
    ],
    // S
    [
        [[0, 1, 1, 0], [1, 1, 0, 0], E, E],
        [[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], E],
        [[0, 1, 1, 0], [1, 1, 0, 0], E, E],
        [[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], E],
    ],
    // T
    [
        [[1, 1, 1, 0], [0, 1, 0, 0], E, E],
        [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], E],
        [[0, 1, 0, 0], [1, 1, 1, 0], E, E],
        [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], E],
    ],
    // Z
    [
        [[1, 1, 0, 0], [0, 1, 1, 0], E, E],
        [[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], E],
        [[1, 1, 0, 0], [0, 1, 1, 0], E, E],
        [[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], E],
    ],
];

/// Occupancy of one rotation state inside the 4x4 bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    rows: Rows,
}

impl Mask {
    /// Whether the cell at `(col, row)` of the bounding box is part of the piece.
    /// Coordinates outside the box are empty.
    #[must_use]
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < PIECE_SIZE && col < PIECE_SIZE && self.rows[row][col] != 0
    }

    /// Filled cells as `(col, row)`, top row first.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..PIECE_SIZE).flat_map(move |row| {
            (0..PIECE_SIZE)
                .filter(move |&col| self.rows[row][col] != 0)
                .map(move |col| (col, row))
        })
    }

    /// Filled cells whose neighbor directly below is not part of the piece.
    /// These are the only cells that can rest on something.
    pub fn bottom_cells(self) -> impl Iterator<Item = (usize, usize)> {
        self.cells()
            .filter(move |&(col, row)| !self.is_filled(col, row + 1))
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }
}

/// Occupancy mask for `kind` in the given rotation state (taken modulo 4).
#[must_use]
pub fn mask(kind: PieceKind, rotation: usize) -> Mask {
    Mask {
        rows: TABLE[kind.index()][rotation % ROTATION_COUNT],
    }
}
