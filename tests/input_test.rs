//! Input translation wired into the session.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crossterm::event::KeyModifiers;

use tui_2028::core::{GameState, TileSpawner};
use tui_2028::engine::Grid;
use tui_2028::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2028::types::{Direction, GameAction, SWIPE_MAX_DURATION_MS};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_keys_drive_moves() {
    let grid = Grid::from_rows(&[&[0, 0, 0, 2], &[0; 4], &[0; 4], &[0; 4]]);
    let mut state = GameState::from_grid(grid, TileSpawner::new(1)).with_settle_ms(0);

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('a'))).unwrap();
    assert_eq!(action, GameAction::Move(Direction::Left));
    assert!(state.apply_action(action, 0));
    assert!(state.tick(0).is_some());
    assert_eq!(state.grid().values()[0][0], 2);
}

#[test]
fn test_unmapped_input_is_ignored() {
    for code in [KeyCode::Char('z'), KeyCode::Backspace, KeyCode::F(1)] {
        let key = KeyEvent::from(code);
        assert_eq!(handle_key_event(key), None);
        assert!(!should_quit(key));
    }
}

#[test]
fn test_swipe_drives_moves() {
    let grid = Grid::from_rows(&[&[2, 0, 0, 0], &[0; 4], &[0; 4], &[0; 4]]);
    let mut state = GameState::from_grid(grid, TileSpawner::new(1)).with_settle_ms(0);
    let mut swipe = SwipeTracker::new();

    assert_eq!(
        swipe.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), 1_000),
        None
    );
    let action = swipe
        .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 12), 1_200)
        .unwrap();
    assert_eq!(action, GameAction::Move(Direction::Down));

    assert!(state.apply_action(action, 1_200));
    state.tick(1_200).unwrap();
    assert_eq!(state.grid().values()[3][0], 2);
}

#[test]
fn test_slow_swipe_is_dropped() {
    let mut swipe = SwipeTracker::new();
    swipe.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), 0);
    assert_eq!(
        swipe.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 40, 5),
            SWIPE_MAX_DURATION_MS + 50
        ),
        None
    );
}
