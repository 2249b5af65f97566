//! Terminal-state queries used for win and loss detection.

use crate::grid::{merge_value, Grid};
use crate::types::{Pos, GRID_SIZE};

/// True iff some direction would change the grid.
///
/// Exact, not a heuristic: any empty cell allows a slide, and otherwise a
/// move exists iff two orthogonal neighbours would merge. Checking the
/// right and down neighbour of every cell visits each adjacent pair once.
pub fn has_any_move(grid: &Grid) -> bool {
    for pos in Pos::all() {
        let Some(tile) = grid.get(pos) else {
            return true;
        };

        let (row, col) = (pos.row as usize, pos.col as usize);
        if col + 1 < GRID_SIZE
            && merge_value(tile.value, grid.value_at(Pos::new(pos.row, pos.col + 1))).is_some()
        {
            return true;
        }
        if row + 1 < GRID_SIZE
            && merge_value(tile.value, grid.value_at(Pos::new(pos.row + 1, pos.col))).is_some()
        {
            return true;
        }
    }
    false
}

/// True iff any tile's value is at least `threshold`.
pub fn has_value_at_least(grid: &Grid, threshold: u32) -> bool {
    grid.tiles().any(|(_, tile)| tile.value >= threshold)
}
