//! TUI Bricks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bricks::{core,input,term,types}`
//! and holds the host-side pieces shared by the binaries: environment
//! configuration, file logging, and the gravity/respawn driver.

pub use tui_bricks_core as core;
pub use tui_bricks_input as input;
pub use tui_bricks_term as term;
pub use tui_bricks_types as types;

pub mod config;
pub mod driver;
pub mod logging;

pub use config::Config;
pub use driver::{Driver, Step};
