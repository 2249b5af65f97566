//! Settle signal - holds a move while its slide transition plays
//!
//! The session starts a settle after resolving a move and only commits the
//! result (score, spawn, terminal checks) once it has elapsed. Restarting the
//! game cancels it, which invalidates the token so a late completion is
//! ignored. Time is passed in by the caller; nothing here reads a clock.

/// Identifies one in-flight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken(pub u64);

#[derive(Debug, Clone)]
pub struct Settle {
    duration_ms: u32,
    pending: Option<(MoveToken, u64)>,
}

impl Settle {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            pending: None,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Start waiting for `token`, replacing anything pending.
    pub fn begin(&mut self, token: MoveToken, now_ms: u64) {
        self.pending = Some((token, now_ms));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn token(&self) -> Option<MoveToken> {
        self.pending.map(|(token, _)| token)
    }

    /// Transition progress in `[0, 1]`; 1 when nothing is pending.
    pub fn progress(&self, now_ms: u64) -> f32 {
        match self.pending {
            Some((_, started)) if self.duration_ms > 0 => {
                let elapsed = now_ms.saturating_sub(started) as f32;
                (elapsed / self.duration_ms as f32).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Hand back the token once the transition has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<MoveToken> {
        let (token, started) = self.pending?;
        if now_ms.saturating_sub(started) >= self.duration_ms as u64 {
            self.pending = None;
            Some(token)
        } else {
            None
        }
    }

    /// Drop the pending token without completing it.
    pub fn cancel(&mut self) -> Option<MoveToken> {
        self.pending.take().map(|(token, _)| token)
    }
}
