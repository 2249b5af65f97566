//! Frame pacing for the main loop.
//!
//! While tiles are sliding every frame is drawn. A static board is redrawn
//! only when something visible changed, or at a slow heartbeat.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

/// Hash of everything a static frame shows.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut h = DefaultHasher::new();
    snap.cells.hash(&mut h);
    snap.score.hash(&mut h);
    snap.best.hash(&mut h);
    snap.status.hash(&mut h);
    snap.moves.hash(&mut h);
    snap.episode_id.hash(&mut h);
    snap.last_spawn.hash(&mut h);
    snap.merged.as_slice().hash(&mut h);
    h.finish()
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to draw a frame for `snap` at `now_ms`.
    ///
    /// A snapshot with motion always renders.
    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snapshot_fingerprint(snap), snap.motion.is_none())
    }

    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = !self.has_rendered
            || !is_static
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MotionSnapshot;
    use crate::types::Pos;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7, true));
        assert!(!t.should_render(10, 7, true));
    }

    #[test]
    fn static_frame_waits_for_heartbeat() {
        let mut t = RenderThrottle::new(500);
        assert!(t.should_render(0, 1, true));
        assert!(!t.should_render(499, 1, true));
        assert!(t.should_render(500, 1, true));
    }

    #[test]
    fn change_or_motion_renders_immediately() {
        let mut t = RenderThrottle::new(500);
        assert!(t.should_render(0, 1, true));
        assert!(t.should_render(1, 2, true));
        assert!(t.should_render(2, 2, false));
        t.invalidate();
        assert!(t.should_render(3, 2, true));
    }

    #[test]
    fn fingerprint_tracks_visible_state() {
        let a = GameSnapshot::default();
        let mut b = a.clone();
        assert_eq!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));

        b.cells[0][0] = 2;
        assert_ne!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));

        let mut c = a.clone();
        c.last_spawn = Some(Pos::new(3, 3));
        assert_ne!(snapshot_fingerprint(&a), snapshot_fingerprint(&c));
    }

    #[test]
    fn snapshot_in_motion_is_never_throttled() {
        let mut t = RenderThrottle::new(10_000);
        let mut snap = GameSnapshot::default();
        assert!(t.should_render_snapshot(0, &snap));
        assert!(!t.should_render_snapshot(1, &snap));

        snap.motion = Some(MotionSnapshot {
            sprites: Default::default(),
            progress: 0.5,
        });
        assert!(t.should_render_snapshot(2, &snap));
    }
}
