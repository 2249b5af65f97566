//! Move resolution - slide and merge every line toward one edge
//!
//! For each of the four lines perpendicular to the motion, tiles are taken in
//! travel order (leading edge first) and packed toward the leading edge. Two
//! neighbours in that order with equal values merge: the one nearer the
//! leading edge survives with the doubled value, the other is removed. A tile
//! takes part in at most one merge per move, so `[2, 2, 2]` packs to `[4, 2]`.
//! Tiles at [`MAX_TILE_VALUE`](crate::grid::MAX_TILE_VALUE) never merge.
//!
//! Resolution is pure: the input grid is never touched and no randomness is
//! involved.

use arrayvec::ArrayVec;

use crate::grid::{merge_value, Grid, Tile, ValueGrid};
use crate::types::{Direction, Pos, TileId, CELL_COUNT, GRID_SIZE};

/// Maximum merges in one move (two per line).
pub const MAX_MERGES: usize = GRID_SIZE * GRID_SIZE / 2;

/// A surviving tile's travel from its old cell to its new one.
///
/// Recorded for every survivor, including tiles that did not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    pub id: TileId,
    /// Value before the move
    pub value: u32,
    pub from: Pos,
    pub to: Pos,
}

impl Shift {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Two tiles collapsing into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Merge {
    pub survivor: TileId,
    pub removed: TileId,
    /// Where the removed tile started; it travels to `to` and disappears
    pub removed_from: Pos,
    pub to: Pos,
    pub new_value: u32,
}

/// Structural changes produced by one move, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    pub shifts: ArrayVec<Shift, CELL_COUNT>,
    pub merges: ArrayVec<Merge, MAX_MERGES>,
}

impl ChangeLog {
    pub fn shift_of(&self, id: TileId) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Survivors that changed cell.
    pub fn moved(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().filter(|s| s.moved())
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty() && self.merges.is_empty()
    }
}

/// Result of resolving one direction against a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// At least one tile changed cell or at least one merge happened
    pub changed: bool,
    pub grid: Grid,
    /// Sum of every merged tile's new value
    pub score_gain: u64,
    pub changes: ChangeLog,
}

/// Coordinates of one line, ordered from the leading edge backwards.
///
/// `index` selects the row (left/right) or the column (up/down).
///
/// # Examples
///
/// ```
/// use tui_2028_engine::line_coords;
/// use tui_2028_types::{Direction, Pos};
///
/// let coords = line_coords(Direction::Right, 1);
/// assert_eq!(coords[0], Pos::new(1, 3));
/// assert_eq!(coords[3], Pos::new(1, 0));
/// ```
pub fn line_coords(direction: Direction, index: usize) -> [Pos; GRID_SIZE] {
    debug_assert!(index < GRID_SIZE);
    let fixed = index as u8;
    let mut coords = [Pos::new(0, 0); GRID_SIZE];
    for (step, slot) in coords.iter_mut().enumerate() {
        let along = step as u8;
        let back = (GRID_SIZE - 1 - step) as u8;
        *slot = match direction {
            Direction::Left => Pos::new(fixed, along),
            Direction::Right => Pos::new(fixed, back),
            Direction::Up => Pos::new(along, fixed),
            Direction::Down => Pos::new(back, fixed),
        };
    }
    coords
}

/// Slide and merge the whole grid in `direction`.
///
/// # Examples
///
/// ```
/// use tui_2028_engine::{resolve, Grid};
/// use tui_2028_types::Direction;
///
/// let grid = Grid::from_rows(&[&[2, 2, 4, 4], &[0; 4], &[0; 4], &[0; 4]]);
/// let outcome = resolve(&grid, Direction::Left);
///
/// assert!(outcome.changed);
/// assert_eq!(outcome.score_gain, 12);
/// assert_eq!(outcome.grid.values()[0], [4, 8, 0, 0]);
/// ```
pub fn resolve(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut out = Grid::new();
    let mut changes = ChangeLog::default();
    let mut score_gain = 0u64;
    let mut changed = false;

    for line in 0..GRID_SIZE {
        let coords = line_coords(direction, line);
        let entries: ArrayVec<(Pos, Tile), GRID_SIZE> = coords
            .iter()
            .filter_map(|&pos| grid.get(pos).map(|tile| (pos, tile)))
            .collect();

        let mut slot = 0usize;
        let mut i = 0usize;
        while i < entries.len() {
            let (from, tile) = entries[i];
            let to = coords[slot];

            let merged = entries
                .get(i + 1)
                .and_then(|&(removed_from, next)| {
                    merge_value(tile.value, next.value).map(|v| (removed_from, next, v))
                });

            match merged {
                Some((removed_from, next, new_value)) => {
                    out.set(to, Some(Tile::new(tile.id, new_value)));
                    changes.shifts.push(Shift {
                        id: tile.id,
                        value: tile.value,
                        from,
                        to,
                    });
                    changes.merges.push(Merge {
                        survivor: tile.id,
                        removed: next.id,
                        removed_from,
                        to,
                        new_value,
                    });
                    score_gain += u64::from(new_value);
                    changed = true;
                    i += 2;
                }
                _ => {
                    out.set(to, Some(tile));
                    changes.shifts.push(Shift {
                        id: tile.id,
                        value: tile.value,
                        from,
                        to,
                    });
                    changed |= from != to;
                    i += 1;
                }
            }

            slot += 1;
        }
    }

    MoveOutcome {
        changed,
        grid: out,
        score_gain,
        changes,
    }
}

/// Identity-less variant: resolve a values-only grid.
///
/// Returns `(changed, new values, score gain)`.
pub fn resolve_values(values: ValueGrid, direction: Direction) -> (bool, ValueGrid, u64) {
    let outcome = resolve(&Grid::from_values(values), direction);
    (outcome.changed, outcome.grid.values(), outcome.score_gain)
}

/// Whether sliding in `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    resolve(grid, direction).changed
}
