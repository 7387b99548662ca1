//! Core rule engine - pure, deterministic, and testable
//!
//! This crate owns the play field, the one falling brick, and the rules that
//! decide whether the brick may move, when it has to come to rest, and how it
//! merges into the field. It has **zero dependencies** on terminal I/O and
//! never allocates on the hot path.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven 2x4 brick bitmaps and their canonical colors
//! - [`board`]: 9x14 grid (10 visible rows plus 4 hidden staging rows)
//! - [`piece`]: the falling brick and its anchor
//! - [`collision`]: placement tests against the board
//! - [`session`]: spawn, move, drop, materialize, and the composite pixel read
//!
//! # Rules
//!
//! - Bricks spawn horizontally centered with their box touching row 0
//! - Left/right moves stop at the walls and at locked cells
//! - A brick whose anchor reaches the last row, or whose next row is blocked,
//!   must lock; the host then calls [`Session::materialize`] and spawns again
//! - There is no rotation, line clearing, scoring, or game-over detection
//!
//! # Example
//!
//! ```
//! use tui_bricks_core::{Session, Shape};
//! use tui_bricks_types::{DropOutcome, FillMode, MoveOutcome};
//!
//! let mut session = Session::new(FillMode::Color);
//! session.spawn(Shape::O);
//!
//! assert_eq!(session.move_left(), MoveOutcome::Moved);
//! while session.drop() == DropOutcome::Moved {}
//!
//! let landed = session.materialize();
//! assert_eq!(landed.len(), 4);
//! assert!(session.active().is_none());
//! ```

pub mod board;
pub mod collision;
pub mod piece;
pub mod session;
pub mod shapes;

pub use tui_bricks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use piece::ActivePiece;
pub use session::{Landed, Pixel, Session};
pub use shapes::Shape;
