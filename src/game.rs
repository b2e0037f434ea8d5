#![warn(clippy::all, clippy::pedantic)]

// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Every piece lives in a 4x4 bounding box
pub const PIECE_SIZE: usize = 4;
pub const ROTATION_COUNT: usize = 4;
pub const KIND_COUNT: usize = 7;

// Line clear scoring (level 1 values, multiplied by the current level)
pub const POINTS_SINGLE: u32 = 10;
pub const POINTS_DOUBLE: u32 = 25;
pub const POINTS_TRIPLE: u32 = 50;
pub const POINTS_QUAD: u32 = 100;
pub const LINE_SCORES: [u32; 4] = [POINTS_SINGLE, POINTS_DOUBLE, POINTS_TRIPLE, POINTS_QUAD];

// Level progression
pub const STARTING_LEVEL: u32 = 1;
pub const STARTUP_SCORE_GOAL: u32 = 100;
pub const SCORE_GOAL_MULTIPLIER: u32 = 2;
pub const MAX_SCORE: u32 = 99_999_999;

// Game timing, in seconds
pub const FALL_START_DELAY: f32 = 1.0;
pub const FALL_DECREASE_COEFF: f32 = 0.4; // Speed-up factor added per level
pub const KEY_DELAY: f32 = 0.18; // Auto-repeat interval for held movement keys
pub const MIN_INTERVAL: f32 = 0.01;
pub const MAX_INTERVAL: f32 = 3600.0;

/// Column at which new pieces appear, centered on the board.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn spawn_column(board_width: usize) -> i32 {
    (board_width / 2) as i32 - (PIECE_SIZE / 2) as i32
}
