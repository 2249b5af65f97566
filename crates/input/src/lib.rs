//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm events.
//! It maps key presses and mouse swipes into [`crate::types::GameAction`];
//! anything it does not recognize produces no action.

pub mod map;
pub mod swipe;

pub use tui_2028_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{swipe_direction, SwipeTracker};
