//! Session logic - pure, deterministic, and testable
//!
//! This crate drives one game of 2028 on top of the move engine. It owns the
//! live grid, score, best score, and status, and decides when new tiles
//! appear. It has **zero dependencies** on UI, persistence, or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Injectable randomness**: any `rand` generator can drive tile spawns
//! - **Clock-free**: callers pass the current time in milliseconds
//!
//! # Module Structure
//!
//! - [`game_state`]: the session controller (begin/tick/finish a move, restart)
//! - [`rng`]: uniform empty-cell choice and 2/4 spawn values
//! - [`settle`]: token that holds a move while its slide plays out
//! - [`snapshot`]: read-only view handed to the renderer
//!
//! # Game Rules
//!
//! - **Spawns**: two tiles at start, one after every move that changes the grid
//! - **Score**: each merge adds the merged tile's value; best = max(best, score)
//! - **Win**: the first time a tile reaches 2028; play continues
//! - **Game over**: the grid is full and no neighbours match
//!
//! # Example
//!
//! ```
//! use tui_2028_core::GameState;
//! use tui_2028_types::{Direction, GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Start a move, then let its slide finish.
//! for dir in Direction::ALL {
//!     if game.apply_action(GameAction::Move(dir), 0) {
//!         break;
//!     }
//! }
//! let report = game.tick(1_000).expect("move committed");
//! assert!(report.spawned.is_some());
//! assert_eq!(game.moves(), 1);
//! assert_eq!(game.status(), GameStatus::Active);
//! ```

pub mod game_state;
pub mod rng;
pub mod settle;
pub mod snapshot;

pub use tui_2028_engine as engine;
pub use tui_2028_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveReport};
pub use rng::TileSpawner;
pub use settle::{MoveToken, Settle};
pub use snapshot::{GameSnapshot, MotionSnapshot, Sprite};
