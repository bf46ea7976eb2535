//! TUI Mines (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_mines::{core,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_mines_core as core;
pub use tui_mines_input as input;
pub use tui_mines_term as term;
pub use tui_mines_types as types;
