//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget libraries and renders into a simple framebuffer that is flushed
//! to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the sliding transition smoothly from snapshot data alone
//! - Allow precise control over tile aspect ratio

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_2028_core as core;
pub use tui_2028_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_text, tile_style, AnchorY, GameView, Viewport};
pub use render_throttle::{snapshot_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
