#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info, trace};
use std::time::Duration;

use crate::components::{Board, GameOverReason, Input, Phase, Session};
use crate::config::{Rules, Settings};
use crate::events::{GameEvent, GameEvents};
use crate::piece::ActivePiece;
use crate::scheduler::{Scheduler, TimerId};
use crate::scoring::resolve_lock;
use crate::spawner::Spawner;

/// Clears the session and puts the first piece on the board.
pub fn new_game(world: &mut World) {
    let rules = world.resource::<Rules>().clone();
    world
        .resource_mut::<Session>()
        .reset(rules.startup_score_goal);
    world.resource_mut::<Input>().clear_presses();
    let held = world.resource::<Input>().clone();
    {
        let mut scheduler = world.resource_mut::<Scheduler>();
        scheduler.restart(&rules);
        // Keys still held across a restart keep repeating
        if held.left_held {
            scheduler.left_repeat.arm();
        }
        if held.right_held {
            scheduler.right_repeat.arm();
        }
        if held.down_held {
            scheduler.down_repeat.arm();
        }
    }
    info!("Starting new game");
    spawn_piece(world);
}

/// Brings in the next piece. Ends the game and returns false when the
/// piece has no room: it overlaps settled blocks or is already resting on
/// them. The blocked piece stays in `active` so it can still be drawn, and
/// nothing moves it once the game is over.
pub fn spawn_piece(world: &mut World) -> bool {
    let kind = world.resource_mut::<Spawner>().next_kind();

    let spawned = {
        let mut session = world.resource_mut::<Session>();
        session.phase = Phase::Spawning;
        let piece = ActivePiece::spawn(kind, &session.board);
        let has_room = piece.fits(&session.board) && !piece.is_landed(&session.board);
        session.active = Some(piece);
        if has_room {
            session.phase = Phase::Falling;
        }
        has_room
    };

    if spawned {
        trace!("Spawned {kind:?}");
    } else {
        debug!("No room to spawn {kind:?}");
        enter_game_over(world, GameOverReason::BlockedSpawn);
    }
    spawned
}

/// Applies the presses collected since the last tick. While the game is
/// over only a restart is honored.
pub fn input_system(world: &mut World) {
    let input = world.resource::<Input>().clone();
    world.resource_mut::<Input>().clear_presses();

    if world.resource::<Session>().game_over {
        if input.restart {
            new_game(world);
        }
        return;
    }

    {
        let mut scheduler = world.resource_mut::<Scheduler>();
        if !input.left_held {
            scheduler.left_repeat.cancel();
        }
        if !input.right_held {
            scheduler.right_repeat.cancel();
        }
        if !input.down_held {
            scheduler.down_repeat.cancel();
        }
    }

    if input.left {
        with_active(world, |piece, board| piece.try_move(board, -1, 0));
        world.resource_mut::<Scheduler>().left_repeat.rearm();
    }
    if input.right {
        with_active(world, |piece, board| piece.try_move(board, 1, 0));
        world.resource_mut::<Scheduler>().right_repeat.rearm();
    }
    if input.down {
        soft_drop(world);
        world.resource_mut::<Scheduler>().down_repeat.rearm();
    }
    if input.rotate {
        with_active(world, ActivePiece::rotate);
    }
    if input.hard_drop {
        let moved = with_active(world, |piece, board| piece.hard_drop(board) > 0);
        trace!("Hard drop, moved: {moved}");
    }

    settle(world);
}

/// Advances the timers by `delta` and runs whatever fired: gravity first,
/// then the left, right and down key repeats.
pub fn game_tick_system(world: &mut World, delta: Duration) {
    if world.resource::<Session>().game_over {
        return;
    }

    let level = world.resource::<Session>().level;
    let fall_interval = world.resource::<Rules>().fall_interval(level);
    world
        .resource_mut::<Scheduler>()
        .gravity
        .set_interval(fall_interval);

    let fired = world.resource_mut::<Scheduler>().advance(delta);
    let held = world.resource::<Input>().clone();

    for id in fired {
        if world.resource::<Session>().game_over {
            break;
        }
        trace!("Timer fired: {id:?}");
        match id {
            TimerId::Gravity => {
                with_active(world, |piece, board| piece.try_move(board, 0, 1));
            }
            TimerId::LeftRepeat if held.left_held => {
                with_active(world, |piece, board| piece.try_move(board, -1, 0));
            }
            TimerId::RightRepeat if held.right_held => {
                with_active(world, |piece, board| piece.try_move(board, 1, 0));
            }
            TimerId::DownRepeat if held.down_held => soft_drop(world),
            _ => {}
        }
        settle(world);
    }
}

/// Locks the active piece, clears rows, scores them and spawns the next
/// piece, or ends the game if the score hit the cap.
pub fn lock_piece(world: &mut World) {
    let rules = world.resource::<Rules>().clone();
    let outcome = {
        let mut session = world.resource_mut::<Session>();
        session.phase = Phase::Locking;
        let outcome = resolve_lock(&mut session, &rules);
        if !session.game_over {
            session.phase = Phase::Clearing;
        }
        outcome
    };

    {
        let mut events = world.resource_mut::<GameEvents>();
        events.push(GameEvent::PieceLocked);
        if outcome.lines > 0 {
            events.push(GameEvent::LinesCleared(outcome.lines));
        }
        if let Some(level) = outcome.leveled_up {
            events.push(GameEvent::LeveledUp(level));
        }
    }

    if let Some(level) = outcome.leveled_up {
        info!("Reached level {level}");
        let interval = rules.fall_interval(level);
        world
            .resource_mut::<Scheduler>()
            .gravity
            .set_interval(interval);
    }

    if outcome.max_score_reached {
        enter_game_over(world, GameOverReason::MaxScore);
        return;
    }

    spawn_piece(world);
}

/// Stops all timers, announces the end and updates the record.
fn enter_game_over(world: &mut World, reason: GameOverReason) {
    let score = {
        let mut session = world.resource_mut::<Session>();
        session.end(reason);
        session.score
    };
    world.resource_mut::<Scheduler>().cancel_all();
    world
        .resource_mut::<GameEvents>()
        .push(GameEvent::GameOver(reason));
    info!("Game over ({reason:?}) with score {score}");

    let beat_record = {
        let mut settings = world.resource_mut::<Settings>();
        if score > settings.record {
            settings.record = score;
            true
        } else {
            false
        }
    };
    if beat_record {
        info!("New record: {score}");
        world
            .resource_mut::<GameEvents>()
            .push(GameEvent::NewRecord(score));
    }
}

/// Manual one-row drop. Restarts the gravity countdown so the piece does
/// not fall twice in quick succession.
fn soft_drop(world: &mut World) {
    with_active(world, |piece, board| piece.try_move(board, 0, 1));
    world.resource_mut::<Scheduler>().gravity.rearm();
}

/// Locks the active piece if it has come to rest.
fn settle(world: &mut World) {
    let landed = {
        let session = world.resource::<Session>();
        !session.game_over
            && session
                .active
                .is_some_and(|piece| piece.is_landed(&session.board))
    };
    if landed {
        lock_piece(world);
    }
}

fn with_active<F>(world: &mut World, action: F) -> bool
where
    F: FnOnce(&mut ActivePiece, &Board) -> bool,
{
    let mut session = world.resource_mut::<Session>();
    let session = &mut *session;
    match session.active.as_mut() {
        Some(piece) => action(piece, &session.board),
        None => false,
    }
}
