use bevy_ecs::prelude::*;

use crate::components::{Cell, GameOverReason, PieceKind, Session};
use crate::shapes::Mask;
use crate::spawner::Spawner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveView {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    pub mask: Mask,
}

/// Read-only copy of a session, taken after a tick for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Row-major, top row first.
    pub cells: Vec<Vec<Cell>>,
    pub active: Option<ActiveView>,
    /// Landing row of the active piece when it is far enough up to show it.
    pub ghost_y: Option<i32>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub score_goal: u32,
    pub lines_cleared: u32,
    pub game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn capture(session: &Session, next: Option<PieceKind>) -> Self {
        let active = session.active.map(|piece| ActiveView {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
            mask: piece.mask(),
        });
        let ghost_y = session
            .active
            .filter(|_| !session.game_over)
            .and_then(|piece| piece.helper_y(&session.board));

        Self {
            cells: session.board.rows(),
            active,
            ghost_y,
            next,
            score: session.score,
            level: session.level,
            score_goal: session.score_goal,
            lines_cleared: session.lines_cleared,
            game_over: session.game_over,
            game_over_reason: session.game_over_reason,
        }
    }

    #[must_use]
    pub fn from_world(world: &World) -> Self {
        let next = world.get_resource::<Spawner>().and_then(Spawner::preview);
        Self::capture(world.resource::<Session>(), next)
    }

    /// Whether the active piece covers the given board cell.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn active_covers(&self, col: i32, row: i32) -> bool {
        self.active.is_some_and(|view| {
            let (dx, dy) = (col - view.x, row - view.y);
            dx >= 0 && dy >= 0 && view.mask.is_filled(dx as usize, dy as usize)
        })
    }

    /// Whether the drop helper covers the given board cell.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn ghost_covers(&self, col: i32, row: i32) -> bool {
        match (self.active, self.ghost_y) {
            (Some(view), Some(ghost_y)) => {
                let (dx, dy) = (col - view.x, row - ghost_y);
                dx >= 0 && dy >= 0 && view.mask.is_filled(dx as usize, dy as usize)
            }
            _ => false,
        }
    }
}
