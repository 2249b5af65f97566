//! Swipe recognition from terminal mouse drags.
//!
//! A left-button press starts a gesture and the release ends it. The gesture
//! counts as a swipe if it is quick enough and long enough along its dominant
//! axis. Terminal cells are roughly twice as tall as they are wide, so rows
//! are weighted double when measuring distance.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, SWIPE_MAX_DURATION_MS};

/// Minimum swipe length, in columns (one row counts as two columns).
pub const DEFAULT_MIN_SWIPE_DISTANCE: i32 = 4;

/// Row weight that compensates for the terminal glyph aspect ratio.
const ROW_WEIGHT: i32 = 2;

/// Pick the direction of a displacement by its dominant axis.
///
/// Ties resolve to the vertical axis.
pub fn swipe_direction(dx: i32, dy: i32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    column: u16,
    row: u16,
    at_ms: u64,
}

/// Tracks one in-progress mouse gesture.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    press: Option<Press>,
    min_distance: i32,
    max_duration_ms: u64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MIN_SWIPE_DISTANCE, SWIPE_MAX_DURATION_MS)
    }

    pub fn with_limits(min_distance: i32, max_duration_ms: u64) -> Self {
        Self {
            press: None,
            min_distance,
            max_duration_ms,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Feed a crossterm mouse event; returns a move when a swipe completes.
    pub fn handle_mouse(&mut self, event: MouseEvent, now_ms: u64) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row, now_ms);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self
                .release(event.column, event.row, now_ms)
                .map(GameAction::Move),
            _ => None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16, now_ms: u64) {
        self.press = Some(Press {
            column,
            row,
            at_ms: now_ms,
        });
    }

    /// End the gesture. Too slow or too short yields None.
    pub fn release(&mut self, column: u16, row: u16, now_ms: u64) -> Option<Direction> {
        let press = self.press.take()?;

        if now_ms.saturating_sub(press.at_ms) > self.max_duration_ms {
            return None;
        }

        let dx = column as i32 - press.column as i32;
        let dy = (row as i32 - press.row as i32) * ROW_WEIGHT;
        if dx.abs() < self.min_distance && dy.abs() < self.min_distance {
            return None;
        }

        Some(swipe_direction(dx, dy))
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(10, 3), Direction::Right);
        assert_eq!(swipe_direction(-10, 3), Direction::Left);
        assert_eq!(swipe_direction(2, 8), Direction::Down);
        assert_eq!(swipe_direction(2, -8), Direction::Up);
        // Tie goes vertical.
        assert_eq!(swipe_direction(6, 6), Direction::Down);
        assert_eq!(swipe_direction(6, -6), Direction::Up);
    }

    #[test]
    fn horizontal_drag_is_a_swipe() {
        let mut t = SwipeTracker::new();
        t.press(10, 5, 1_000);
        assert_eq!(t.release(16, 5, 1_200), Some(Direction::Right));
        assert!(!t.is_tracking());
    }

    #[test]
    fn rows_count_double() {
        let mut t = SwipeTracker::new();
        // 2 rows up = 4 weighted units, enough on its own.
        t.press(10, 10, 0);
        assert_eq!(t.release(11, 8, 100), Some(Direction::Up));

        // 3 columns right vs 2 rows down: rows dominate (3 < 4).
        t.press(10, 10, 0);
        assert_eq!(t.release(13, 12, 100), Some(Direction::Down));
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut t = SwipeTracker::new();
        t.press(10, 10, 0);
        assert_eq!(t.release(13, 11, 100), None);
    }

    #[test]
    fn slow_drag_is_ignored() {
        let mut t = SwipeTracker::new();
        t.press(0, 0, 0);
        assert_eq!(t.release(20, 0, SWIPE_MAX_DURATION_MS + 1), None);

        t.press(0, 0, 0);
        assert_eq!(t.release(20, 0, SWIPE_MAX_DURATION_MS), Some(Direction::Right));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.release(20, 0, 10), None);
    }

    #[test]
    fn crossterm_events_drive_the_tracker() {
        let mut t = SwipeTracker::new();
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10), 0),
            None
        );
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 25, 10), 50),
            None
        );
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 10), 100),
            Some(GameAction::Move(Direction::Left))
        );
    }

    #[test]
    fn other_buttons_do_not_start_a_gesture() {
        let mut t = SwipeTracker::new();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), 0);
        assert!(!t.is_tracking());
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 0), 10),
            None
        );
    }
}
