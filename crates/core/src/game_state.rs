//! Game state module - the session controller
//!
//! Owns the live grid, score, best score, and status. A move goes through
//! two phases: [`GameState::begin_move`] resolves it with the move engine and
//! starts a settle, and [`GameState::tick`] commits it once the slide has
//! played out (score, best, one new tile, then win and loss checks in that
//! order). Only one move can be in flight, and none once the game is over.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::engine::{
    has_any_move, has_value_at_least, resolve, Grid, MoveOutcome, Tile, MAX_MERGES,
};
use crate::rng::TileSpawner;
use crate::settle::{MoveToken, Settle};
use crate::snapshot::{GameSnapshot, MotionSnapshot, Sprite};
use crate::types::*;

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub score_gain: u64,
    pub score: u64,
    pub best: u64,
    /// Best score went up with this move (the caller persists it)
    pub best_changed: bool,
    /// New tile placed after the move (cell, value)
    pub spawned: Option<(Pos, u32)>,
    /// The target was reached for the first time this game
    pub newly_won: bool,
    pub over: bool,
}

/// A resolved move waiting for its settle.
#[derive(Debug, Clone)]
struct PendingMove {
    token: MoveToken,
    direction: Direction,
    outcome: MoveOutcome,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    spawner: TileSpawner,
    /// Next tile identity to hand out (starts at 1 each game)
    next_id: u32,
    score: u64,
    best: u64,
    won: bool,
    over: bool,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Committed moves in the current episode
    moves: u32,
    next_token: u64,
    pending: Option<PendingMove>,
    settle: Settle,
    last_spawn: Option<Pos>,
    last_merges: ArrayVec<Pos, MAX_MERGES>,
}

impl GameState {
    /// Create a new game with the given RNG seed and two starting tiles
    pub fn new(seed: u64) -> Self {
        Self::with_spawner(TileSpawner::new(seed))
    }

    /// Create a new game drawing tiles from `spawner`
    pub fn with_spawner(spawner: TileSpawner) -> Self {
        let mut state = Self::blank(spawner, Grid::new());
        state.place_initial_tiles();
        info!("new game (seed {:?})", state.spawner.seed());
        state
    }

    /// Resume from an existing grid (no tiles are added).
    ///
    /// Status is derived from the grid: won if the target is already on it,
    /// over if no move is possible.
    pub fn from_grid(grid: Grid, spawner: TileSpawner) -> Self {
        let mut state = Self::blank(spawner, grid);
        state.next_id = grid.tiles().map(|(_, t)| t.id.0).max().unwrap_or(0) + 1;
        state.won = has_value_at_least(&grid, TARGET);
        state.over = !has_any_move(&grid);
        state
    }

    fn blank(spawner: TileSpawner, grid: Grid) -> Self {
        Self {
            grid,
            spawner,
            next_id: 1,
            score: 0,
            best: 0,
            won: false,
            over: false,
            episode_id: 0,
            moves: 0,
            next_token: 1,
            pending: None,
            settle: Settle::new(MOVE_MS),
            last_spawn: None,
            last_merges: ArrayVec::new(),
        }
    }

    /// Seed the best score (loaded from the score store)
    pub fn with_best(mut self, best: u64) -> Self {
        self.best = best;
        self
    }

    /// Override the slide duration; 0 commits moves on the next tick
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle = Settle::new(settle_ms);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn set_best(&mut self, best: u64) {
        self.best = best.max(self.score);
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Active
        }
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the move currently settling
    pub fn pending_token(&self) -> Option<MoveToken> {
        self.pending.as_ref().map(|p| p.token)
    }

    pub fn last_spawn(&self) -> Option<Pos> {
        self.last_spawn
    }

    /// Discard the current game (and any settling move) and start over.
    ///
    /// Best score is kept.
    pub fn restart(&mut self) {
        if let Some(token) = self.settle.cancel() {
            debug!("restart cancels pending move {:?}", token);
        }
        self.pending = None;
        self.grid = Grid::new();
        self.next_id = 1;
        self.score = 0;
        self.won = false;
        self.over = false;
        self.moves = 0;
        self.last_merges.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.place_initial_tiles();
        info!("restart: episode {}", self.episode_id);
    }

    /// Start over and take `best` as the stored best score.
    ///
    /// The best shown never drops below what this session already reached.
    pub fn restart_with_best(&mut self, best: u64) {
        self.restart();
        self.set_best(best);
    }

    /// Apply a user action.
    ///
    /// Returns true if the action was accepted. A move that changes nothing,
    /// arrives while another is settling, or arrives after game over is
    /// dropped.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::NewGame => {
                self.restart();
                true
            }
            GameAction::Move(direction) => self.begin_move(direction, now_ms),
        }
    }

    /// Resolve a move and start its settle.
    pub fn begin_move(&mut self, direction: Direction, now_ms: u64) -> bool {
        if self.over || self.pending.is_some() {
            debug!(
                "move {} rejected (over={}, settling={})",
                direction.as_str(),
                self.over,
                self.pending.is_some()
            );
            return false;
        }

        let outcome = resolve(&self.grid, direction);
        if !outcome.changed {
            debug!("move {} changes nothing", direction.as_str());
            return false;
        }

        let token = MoveToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.settle.begin(token, now_ms);
        self.pending = Some(PendingMove {
            token,
            direction,
            outcome,
        });
        true
    }

    /// Advance time; commits the settling move once its slide has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<MoveReport> {
        let token = self.settle.poll(now_ms)?;
        self.finish_move(token)
    }

    /// Commit the settling move now, without waiting for its slide.
    pub fn flush(&mut self) -> Option<MoveReport> {
        let token = self.pending_token()?;
        self.finish_move(token)
    }

    /// Resolve and commit in one step (headless play, tests).
    pub fn apply(&mut self, direction: Direction) -> Option<MoveReport> {
        if !self.begin_move(direction, 0) {
            return None;
        }
        let token = self.settle.cancel()?;
        self.finish_move(token)
    }

    /// Commit the pending move identified by `token`.
    ///
    /// A stale token (the game was restarted meanwhile) is ignored.
    pub fn finish_move(&mut self, token: MoveToken) -> Option<MoveReport> {
        if self.pending.as_ref().map(|p| p.token) != Some(token) {
            debug!("stale move token {:?} ignored", token);
            return None;
        }
        let PendingMove {
            direction, outcome, ..
        } = self.pending.take()?;
        if self.settle.token() == Some(token) {
            self.settle.cancel();
        }

        self.grid = outcome.grid;
        self.last_merges = outcome.changes.merges.iter().map(|m| m.to).collect();
        self.score += outcome.score_gain;
        let best_changed = self.score > self.best;
        self.best = self.best.max(self.score);
        self.moves += 1;

        let spawned = self.spawn_tile();

        let mut newly_won = false;
        if !self.won && has_value_at_least(&self.grid, TARGET) {
            self.won = true;
            newly_won = true;
            info!("target {} reached after {} moves", TARGET, self.moves);
        }

        if !has_any_move(&self.grid) {
            self.over = true;
            info!("game over: score {} after {} moves", self.score, self.moves);
        }

        debug!(
            "move {} committed: +{} (score {}, best {})",
            direction.as_str(),
            outcome.score_gain,
            self.score,
            self.best
        );

        Some(MoveReport {
            direction,
            score_gain: outcome.score_gain,
            score: self.score,
            best: self.best,
            best_changed,
            spawned,
            newly_won,
            over: self.over,
        })
    }

    /// Place one new tile on a random empty cell.
    ///
    /// Returns the cell and value, or None if the grid is full.
    pub fn spawn_tile(&mut self) -> Option<(Pos, u32)> {
        let empties = self.grid.empty_cells();
        let pos = self.spawner.pick_cell(&empties)?;
        let value = self.spawner.spawn_value();
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.grid.set(pos, Some(Tile::new(id, value)));
        self.last_spawn = Some(pos);
        debug!("spawned {} at ({}, {}) as {:?}", value, pos.row, pos.col, id);
        Some((pos, value))
    }

    fn place_initial_tiles(&mut self) {
        self.last_spawn = None;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut GameSnapshot) {
        out.cells = self.grid.values();
        out.score = self.score;
        out.best = self.best;
        out.status = self.status();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.seed = self.spawner.seed();
        out.last_spawn = self.last_spawn;
        out.merged = self.last_merges.clone();
        out.motion = self.pending.as_ref().map(|pending| {
            let changes = &pending.outcome.changes;
            let mut sprites = ArrayVec::new();
            for shift in &changes.shifts {
                sprites.push(Sprite {
                    id: shift.id,
                    value: shift.value,
                    from: shift.from,
                    to: shift.to,
                    removed: false,
                });
            }
            for merge in &changes.merges {
                sprites.push(Sprite {
                    id: merge.removed,
                    value: merge.new_value / 2,
                    from: merge.removed_from,
                    to: merge.to,
                    removed: true,
                });
            }
            MotionSnapshot {
                sprites,
                progress: self.settle.progress(now_ms),
            }
        });
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }
}
