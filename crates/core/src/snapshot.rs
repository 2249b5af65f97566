use arrayvec::ArrayVec;

use crate::engine::{ValueGrid, MAX_MERGES};
use crate::types::{GameStatus, Pos, TileId, CELL_COUNT, GRID_SIZE};

/// One tile travelling during a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite {
    pub id: TileId,
    /// Value shown while travelling (pre-merge)
    pub value: u32,
    pub from: Pos,
    pub to: Pos,
    /// Merge loser; disappears once the move settles
    pub removed: bool,
}

/// In-flight move as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSnapshot {
    pub sprites: ArrayVec<Sprite, CELL_COUNT>,
    /// 0.0 at the start of the slide, 1.0 when settled
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Committed tile values, row-major, 0 = empty
    pub cells: ValueGrid,
    pub score: u64,
    pub best: u64,
    pub status: GameStatus,
    pub episode_id: u32,
    pub moves: u32,
    pub seed: Option<u64>,
    /// Cell that received the most recent spawn
    pub last_spawn: Option<Pos>,
    /// Cells where the last committed move merged tiles
    pub merged: ArrayVec<Pos, MAX_MERGES>,
    pub motion: Option<MotionSnapshot>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.best = 0;
        self.status = GameStatus::Active;
        self.episode_id = 0;
        self.moves = 0;
        self.seed = None;
        self.last_spawn = None;
        self.merged.clear();
        self.motion = None;
    }

    pub fn playable(&self) -> bool {
        self.status.accepts_moves() && self.motion.is_none()
    }

    pub fn value_at(&self, pos: Pos) -> u32 {
        self.cells[pos.row as usize][pos.col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            best: 0,
            status: GameStatus::Active,
            episode_id: 0,
            moves: 0,
            seed: None,
            last_spawn: None,
            merged: ArrayVec::new(),
            motion: None,
        };
        s.clear();
        s
    }
}
