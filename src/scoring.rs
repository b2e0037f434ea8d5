#![warn(clippy::all, clippy::pedantic)]

use log::debug;

use crate::components::{Board, GameOverReason, Session};
use crate::config::Rules;

/// What happened when a piece was locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockOutcome {
    pub lines: u32,
    pub award: u32,
    /// New level if the score goal was reached.
    pub leveled_up: Option<u32>,
    pub max_score_reached: bool,
}

/// Clears every full row from the bottom up and returns how many went.
/// After a clear the same row index is checked again, since the row above
/// has just moved into it. The top row is never cleared.
pub fn clear_full_rows(board: &mut Board) -> u32 {
    let mut lines = 0;
    let mut row = board.height().saturating_sub(1);
    while row > 0 {
        if board.is_row_full(row) {
            board.clear_row_and_shift_down(row);
            lines += 1;
        } else {
            row -= 1;
        }
    }
    lines
}

/// Adds the award for `lines` cleared rows and advances the level or ends
/// the game when a threshold is crossed.
pub fn apply_award(session: &mut Session, lines: u32, rules: &Rules) -> LockOutcome {
    let mut outcome = LockOutcome {
        lines,
        ..LockOutcome::default()
    };
    if lines == 0 {
        return outcome;
    }

    outcome.award = rules.line_award(lines, session.level);
    session.score = session.score.saturating_add(outcome.award);
    session.lines_cleared = session.lines_cleared.saturating_add(lines);

    if session.score >= rules.max_score {
        session.score = rules.max_score;
        session.score_goal = rules.max_score;
        session.end(GameOverReason::MaxScore);
        outcome.max_score_reached = true;
    } else if session.score >= session.score_goal {
        session.level += 1;
        session.score_goal = session
            .score_goal
            .saturating_mul(rules.score_goal_multiplier)
            .min(rules.max_score);
        outcome.leveled_up = Some(session.level);
    }

    outcome
}

/// Merges the active piece into the board, clears completed rows and
/// updates the score. The active piece is consumed.
pub fn resolve_lock(session: &mut Session, rules: &Rules) -> LockOutcome {
    let Some(piece) = session.active.take() else {
        return LockOutcome::default();
    };

    for (col, row) in piece.cells() {
        session.board.set_cell(col, row, piece.kind);
    }
    session.pieces_locked += 1;

    let lines = clear_full_rows(&mut session.board);
    let outcome = apply_award(session, lines, rules);
    if lines > 0 {
        debug!(
            "Cleared {lines} line(s) for {} points, score {} level {} goal {}",
            outcome.award, session.score, session.level, session.score_goal
        );
    }
    outcome
}
