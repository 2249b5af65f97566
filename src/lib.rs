//! TUI 2028 (workspace facade crate).
//!
//! Re-exports `tui_2028::{core,engine,input,store,term,types}` so the binary,
//! integration tests and benches see one API while the implementation lives
//! in dedicated crates under `crates/`.

pub mod config;

pub use tui_2028_core as core;
pub use tui_2028_engine as engine;
pub use tui_2028_input as input;
pub use tui_2028_store as store;
pub use tui_2028_term as term;
pub use tui_2028_types as types;

pub use config::Config;
