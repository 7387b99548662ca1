//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, scripted drivers).
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 9 | Columns, indexed 0-8 left to right |
//! | `BOARD_HEIGHT` | 14 | Rows, indexed 0-13 top to bottom |
//! | `HIDDEN_ROWS` | 4 | Staging rows above the visible area |
//! | `VISIBLE_ROWS` | 10 | Rows a renderer normally shows |
//!
//! Every brick fits into a box of `BRICK_WIDTH` x `BRICK_HEIGHT` (4 x 2).
//! The anchor limits are derived from those two pairs of numbers instead of
//! being written out literally:
//!
//! - `MAX_ANCHOR_X = BOARD_WIDTH - BRICK_WIDTH` (rightmost legal anchor column)
//! - `SPAWN_X = MAX_ANCHOR_X / 2` (roughly centered)
//! - `SPAWN_Y = BRICK_HEIGHT - 1` (box fully inside the board, touching row 0)
//! - `FLOOR_Y = BOARD_HEIGHT - 1` (an anchor on this row must lock)
//!
//! # Examples
//!
//! ```
//! use tui_bricks_types::{Color, FillMode, FLOOR_Y, MAX_ANCHOR_X};
//!
//! assert_eq!(MAX_ANCHOR_X, 5);
//! assert_eq!(FLOOR_Y, 13);
//!
//! let c = Color::new(4).unwrap();
//! assert_eq!(c.value(), 4);
//! assert!(Color::new(8).is_none());
//!
//! assert_eq!(FillMode::from_str("mono"), Some(FillMode::Mono));
//! ```

/// Board width in cells (9 columns)
pub const BOARD_WIDTH: u8 = 9;

/// Board height in cells, hidden staging rows included (14 rows)
pub const BOARD_HEIGHT: u8 = 10 + HIDDEN_ROWS;

/// Rows above the visible area into which bricks are spawned
pub const HIDDEN_ROWS: u8 = 4;

/// Rows a renderer shows by default
pub const VISIBLE_ROWS: u8 = BOARD_HEIGHT - HIDDEN_ROWS;

/// Width of every brick's bounding box
pub const BRICK_WIDTH: u8 = 4;

/// Height of every brick's bounding box
pub const BRICK_HEIGHT: u8 = 2;

/// Rightmost legal `anchor_x`
pub const MAX_ANCHOR_X: i8 = (BOARD_WIDTH - BRICK_WIDTH) as i8;

/// Spawn column, approximately centered
pub const SPAWN_X: i8 = MAX_ANCHOR_X / 2;

/// Spawn row (the anchor is the bottom row of the brick box)
pub const SPAWN_Y: i8 = BRICK_HEIGHT as i8 - 1;

/// An anchor at or below this row cannot drop any further
pub const FLOOR_Y: i8 = BOARD_HEIGHT as i8 - 1;

/// Number of distinct brick shapes (and colors)
pub const SHAPE_COUNT: usize = 7;

/// Frame tick of the interactive loop (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default gravity interval of the interactive loop
pub const DEFAULT_DROP_MS: u32 = 500;

/// A brick color, always in `1..=7`.
///
/// Zero is not a color: an empty cell is represented by `None` in [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Plain "occupied" marker written in [`FillMode::Mono`]
    pub const MONO: Color = Color(1);

    /// Create a color from its raw value; `None` unless `1..=7`
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= SHAPE_COUNT as u8 {
            Some(Color(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Raw integer for a cell: 0 when empty, otherwise the color value (1-7)
pub fn cell_value(cell: Cell) -> u8 {
    cell.map_or(0, Color::value)
}

/// Whether materialized cells carry the brick's color or a plain marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Each brick writes its canonical color (1-7)
    #[default]
    Color,
    /// Every brick writes [`Color::MONO`]
    Mono,
}

impl FillMode {
    /// Parse fill mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Some(FillMode::Color),
            "mono" | "plain" => Some(FillMode::Mono),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Color => "color",
            FillMode::Mono => "mono",
        }
    }
}

/// Result of a sideways move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked,
}

/// Result of a one-row drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    /// The brick cannot go lower and has to be materialized
    MustLock,
}

/// Host-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Drop,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_limits_match_board_geometry() {
        assert_eq!(BOARD_HEIGHT, 14);
        assert_eq!(VISIBLE_ROWS, 10);
        assert_eq!(MAX_ANCHOR_X, 5);
        assert_eq!(SPAWN_X, 2);
        assert_eq!(SPAWN_Y, 1);
        assert_eq!(FLOOR_Y, 13);
    }

    #[test]
    fn color_rejects_zero_and_large_values() {
        assert!(Color::new(0).is_none());
        assert!(Color::new(8).is_none());
        assert!(Color::new(255).is_none());
        for v in 1..=7 {
            assert_eq!(Color::new(v).map(Color::value), Some(v));
        }
    }

    #[test]
    fn cell_value_maps_empty_to_zero() {
        assert_eq!(cell_value(None), 0);
        assert_eq!(cell_value(Some(Color::MONO)), 1);
        assert_eq!(cell_value(Color::new(7)), 7);
    }

    #[test]
    fn fill_mode_parsing() {
        assert_eq!(FillMode::from_str("COLOR"), Some(FillMode::Color));
        assert_eq!(FillMode::from_str(" mono "), Some(FillMode::Mono));
        assert_eq!(FillMode::from_str("rainbow"), None);
        assert_eq!(FillMode::default(), FillMode::Color);
    }
}
