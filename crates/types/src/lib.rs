//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (move engine, session logic, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid addressed as `(row, col)`:
//!
//! - **Rows**: 0 (top) to 3 (bottom)
//! - **Columns**: 0 (left) to 3 (right)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `TARGET` | 2028 | Win threshold (not a cap) |
//! | `MOVE_MS` | 120 | Slide transition length |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance that a spawned tile is a 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2028_types::{Direction, GameAction, Pos, GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(Pos::new(1, 2).index(), 6);
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Cells per row and per column.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game the first time it is reached or exceeded.
pub const TARGET: u32 = 2028;

/// Length of the slide transition in milliseconds.
pub const MOVE_MS: u32 = 120;

/// Probability that a newly spawned tile holds a 2 (otherwise a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Number of tiles placed when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Longest press-to-release time that still counts as a swipe.
pub const SWIPE_MAX_DURATION_MS: u64 = 700;

/// One of the four slide directions.
///
/// A closed enum: an invalid direction is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the terminal-state check visits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2028_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for left/right (lines are rows), false for up/down (lines are columns).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major flat index (`row * GRID_SIZE + col`).
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Inverse of [`Pos::index`].
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }

    /// Iterate all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELL_COUNT).map(Pos::from_index)
    }
}

/// Opaque tile identity.
///
/// Identifiers are indices into the session's logical tile table, issued in
/// increasing order starting at 1 for every new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// Game lifecycle status.
///
/// - **Active**: still playing, target not reached
/// - **Won**: a tile reached `TARGET`; input is still accepted
/// - **Over**: grid is full and no move changes it; terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Won,
    Over,
}

impl GameStatus {
    pub fn accepts_moves(&self) -> bool {
        !matches!(self, GameStatus::Over)
    }
}

/// Actions the session understands.
///
/// Produced by the input translator from keys and swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Move(Direction),
    /// Discard the current game and start a fresh one
    NewGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2028_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "restart" => Some(GameAction::NewGame),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::NewGame => "newGame",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gameplay_constants_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(TARGET, 2028);
        assert_eq!(MOVE_MS, 120);
        assert_eq!(SWIPE_MAX_DURATION_MS, 700);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn pos_index_roundtrip_covers_grid() {
        let all: Vec<Pos> = Pos::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[0], Pos::new(0, 0));
        assert_eq!(all[5], Pos::new(1, 1));
        assert_eq!(all[15], Pos::new(3, 3));
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn direction_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.is_horizontal(), dir.opposite().is_horizontal());
        }
    }

    #[test]
    fn action_string_roundtrip() {
        for dir in Direction::ALL {
            let action = GameAction::Move(dir);
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(
            GameAction::from_str(GameAction::NewGame.as_str()),
            Some(GameAction::NewGame)
        );
    }

    #[test]
    fn over_is_the_only_status_that_blocks_input() {
        assert!(GameStatus::Active.accepts_moves());
        assert!(GameStatus::Won.accepts_moves());
        assert!(!GameStatus::Over.accepts_moves());
    }
}
