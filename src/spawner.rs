#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::PieceKind;
use crate::game::KIND_COUNT;

/// Source of uniformly distributed piece indices.
pub trait KindSource: Send + Sync {
    /// Returns a value in `0..bound`.
    fn draw(&mut self, bound: usize) -> usize;
}

impl KindSource for fastrand::Rng {
    fn draw(&mut self, bound: usize) -> usize {
        self.usize(0..bound)
    }
}

/// Hands out piece kinds and keeps one kind of lookahead.
#[derive(Resource)]
pub struct Spawner {
    source: Box<dyn KindSource>,
    preview: Option<PieceKind>,
}

impl Spawner {
    pub fn new(source: impl KindSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            preview: None,
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    /// Kind of the piece that comes after the current one.
    #[must_use]
    pub fn preview(&self) -> Option<PieceKind> {
        self.preview
    }

    /// Promotes the previewed kind and draws a new preview. The very first
    /// call has nothing to promote and draws both.
    pub fn next_kind(&mut self) -> PieceKind {
        let kind = match self.preview.take() {
            Some(kind) => kind,
            None => self.draw(),
        };
        self.preview = Some(self.draw());
        trace!("Spawner handed out {kind:?}, next is {:?}", self.preview);
        kind
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::from_index(self.source.draw(KIND_COUNT))
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(fastrand::Rng::new())
    }
}
