use bevy_ecs::prelude::*;

use crate::components::GameOverReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceLocked,
    LinesCleared(u32),
    LeveledUp(u32),
    GameOver(GameOverReason),
    NewRecord(u32),
}

/// Events raised since the last drain, oldest first.
#[derive(Resource, Debug, Default)]
pub struct GameEvents {
    pending: Vec<GameEvent>,
}

impl GameEvents {
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
