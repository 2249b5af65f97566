//! Grid module - the 4x4 playfield
//!
//! Each cell is empty or holds a [`Tile`] (identity + value).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where both range 0..3, row 0 at the top.

use arrayvec::ArrayVec;

use crate::types::{Pos, TileId, CELL_COUNT, GRID_SIZE};

/// A tile on the grid: an identity plus its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
}

impl Tile {
    pub fn new(id: TileId, value: u32) -> Self {
        debug_assert!(is_tile_value(value), "invalid tile value {}", value);
        Self { id, value }
    }
}

/// A cell on the grid (`None` = empty).
pub type Cell = Option<Tile>;

/// Values-only view of a grid, row-major; `0` marks an empty cell.
pub type ValueGrid = [[u32; GRID_SIZE]; GRID_SIZE];

/// Largest tile value a `u32` cell can hold.
///
/// Two tiles at this value do not merge, so every merge result stays a
/// valid tile value.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Every tile value is a power of two no smaller than 2.
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Merged value of two neighbouring tiles, `None` when they do not merge.
#[inline]
pub fn merge_value(a: u32, b: u32) -> Option<u32> {
    if a == b && a < MAX_TILE_VALUE {
        Some(a << 1)
    } else {
        None
    }
}

/// The playfield - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from values, assigning identities `1..` in row-major order.
    ///
    /// This is how the identity-less variant enters the engine: every
    /// non-zero value becomes a fresh tile.
    pub fn from_values(values: ValueGrid) -> Self {
        let mut grid = Self::new();
        let mut next_id = 1u32;
        for pos in Pos::all() {
            let value = values[pos.row as usize][pos.col as usize];
            if value != 0 {
                grid.set(pos, Some(Tile::new(TileId(next_id), value)));
                next_id += 1;
            }
        }
        grid
    }

    /// Build a grid from row slices.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is not exactly 4 rows of 4 values.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        assert_eq!(rows.len(), GRID_SIZE, "grid must have {} rows", GRID_SIZE);
        let mut values = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), GRID_SIZE, "row {} must have {} cells", r, GRID_SIZE);
            values[r].copy_from_slice(row);
        }
        Self::from_values(values)
    }

    /// Get cell at position
    #[inline(always)]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.index()]
    }

    /// Set cell at position
    #[inline(always)]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        debug_assert!(cell.map_or(true, |t| is_tile_value(t.value)));
        self.cells[pos.index()] = cell;
    }

    /// Value at position, `0` when empty
    pub fn value_at(&self, pos: Pos) -> u32 {
        self.get(pos).map_or(0, |t| t.value)
    }

    /// Position of the tile with the given identity, if it is on the grid.
    pub fn find(&self, id: TileId) -> Option<Pos> {
        self.tiles().find(|(_, t)| t.id == id).map(|(pos, _)| pos)
    }

    /// Occupied cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|t| (Pos::from_index(i), t)))
    }

    /// Empty cells in row-major order (stack-only, no allocation)
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Sum of every tile value on the grid.
    pub fn total(&self) -> u64 {
        self.tiles().map(|(_, t)| t.value as u64).sum()
    }

    /// Largest tile value, `0` on an empty grid.
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|(_, t)| t.value).max().unwrap_or(0)
    }

    /// Project to values only (drops identities).
    pub fn values(&self) -> ValueGrid {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (pos, tile) in self.tiles() {
            out[pos.row as usize][pos.col as usize] = tile.value;
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
