//! Move engine - pure grid transitions for the 2028 sliding-tile game
//!
//! Given a grid and a [`Direction`](types::Direction), the engine computes the
//! resulting grid, the score gained, and a change log of tile shifts and
//! merges. It owns no state and never fails on a well-formed grid.
//!
//! - **Deterministic**: [`resolve`] uses no randomness
//! - **Identity-aware**: survivors keep their [`TileId`](types::TileId), so a
//!   renderer can animate continuity
//! - **Allocation-free**: line buffers and change logs live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid of optional tiles, values-only projection
//! - [`moves`]: slide/merge resolution and the change log
//! - [`queries`]: `has_any_move` / `has_value_at_least` for terminal states
//! - [`spawn`]: value distribution for new tiles (2 at 90%, 4 at 10%)
//!
//! # Example
//!
//! ```
//! use tui_2028_engine::{has_any_move, resolve, Grid};
//! use tui_2028_types::Direction;
//!
//! let grid = Grid::from_rows(&[
//!     &[2, 2, 2, 0],
//!     &[0, 0, 0, 0],
//!     &[0, 0, 0, 0],
//!     &[0, 0, 0, 0],
//! ]);
//!
//! let outcome = resolve(&grid, Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(outcome.score_gain, 4);
//! assert_eq!(outcome.grid.values()[0], [4, 2, 0, 0]);
//!
//! // The row is fully collapsed; sliding left again changes nothing.
//! assert!(!resolve(&outcome.grid, Direction::Left).changed);
//! assert!(has_any_move(&outcome.grid));
//! ```

pub mod grid;
pub mod moves;
pub mod queries;
pub mod spawn;

pub use tui_2028_types as types;

pub use grid::{is_tile_value, merge_value, Cell, Grid, Tile, ValueGrid, MAX_TILE_VALUE};
pub use moves::{
    can_move, line_coords, resolve, resolve_values, ChangeLog, Merge, MoveOutcome, Shift,
    MAX_MERGES,
};
pub use queries::{has_any_move, has_value_at_least};
pub use spawn::spawn_value;
