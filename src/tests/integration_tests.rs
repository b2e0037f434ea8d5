#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::{GameOverReason, PieceKind, Session};
    use crate::events::GameEvent;
    use crate::tests::test_utils::create_test_app;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn press_and_tick(app: &mut App, code: KeyCode) -> Vec<GameEvent> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.on_tick(Duration::ZERO)
    }

    fn press_times(app: &mut App, code: KeyCode, times: usize) {
        for _ in 0..times {
            press_and_tick(app, code);
        }
    }

    #[test]
    fn test_stacking_until_game_over() {
        let mut app = create_test_app(&[PieceKind::O]);
        let mut locked = 0;

        for _ in 0..20 {
            if app.is_game_over() {
                break;
            }
            let events = press_and_tick(&mut app, KeyCode::Char(' '));
            locked += events
                .iter()
                .filter(|event| **event == GameEvent::PieceLocked)
                .count();
        }

        let session = app.world.resource::<Session>();
        assert!(session.game_over);
        assert_eq!(session.game_over_reason, Some(GameOverReason::BlockedSpawn));
        assert_eq!(locked, 9);
        assert_eq!(session.pieces_locked, 9);
        assert_eq!(session.board.filled_count(), 36);
    }

    #[test]
    fn test_completing_a_row() {
        let mut app = create_test_app(&[PieceKind::I, PieceKind::I, PieceKind::O]);

        press_times(&mut app, KeyCode::Left, 3);
        press_and_tick(&mut app, KeyCode::Char(' '));

        press_times(&mut app, KeyCode::Right, 1);
        press_and_tick(&mut app, KeyCode::Char(' '));

        press_times(&mut app, KeyCode::Right, 5);
        let events = press_and_tick(&mut app, KeyCode::Char(' '));

        assert!(events.contains(&GameEvent::LinesCleared(1)));
        let session = app.world.resource::<Session>();
        assert_eq!(session.score, 10);
        assert_eq!(session.lines_cleared, 1);
        assert_eq!(session.board.filled_count(), 2);
        assert_eq!(session.board.cell(8, 19), Some(PieceKind::O));
        assert_eq!(session.board.cell(9, 19), Some(PieceKind::O));
    }

    #[test]
    fn test_gravity_drops_piece_to_the_floor() {
        let mut app = create_test_app(&[PieceKind::T, PieceKind::S]);
        let mut events = Vec::new();

        for _ in 0..25 {
            events.extend(app.on_tick(Duration::from_secs(1)));
        }

        assert!(events.contains(&GameEvent::PieceLocked));
        let session = app.world.resource::<Session>();
        assert_eq!(session.board.cell(4, 19), Some(PieceKind::T));
        assert_eq!(session.board.filled_count(), 4);
    }

    #[test]
    fn test_restart_keeps_record() {
        let mut app = create_test_app(&[PieceKind::O]);
        app.world.resource_mut::<Session>().score = 75;

        while !app.is_game_over() {
            press_and_tick(&mut app, KeyCode::Char(' '));
        }
        assert_eq!(app.settings().record, 75);

        press_and_tick(&mut app, KeyCode::Enter);

        assert!(!app.is_game_over());
        let snapshot = app.snapshot();
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.active.is_some());
        assert_eq!(app.settings().record, 75);
    }
}
