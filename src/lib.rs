//! TUI Runners (workspace facade crate).
//!
//! Re-exports the member crates under `tui_runners::{core,input,term,types}`
//! and hosts the startup configuration and logging setup shared by the binary.

pub mod config;
pub mod logging;

pub use tui_runners_core as core;
pub use tui_runners_input as input;
pub use tui_runners_term as term;
pub use tui_runners_types as types;
