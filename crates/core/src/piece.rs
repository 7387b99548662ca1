//! The falling brick.

use crate::board::Board;
use crate::collision::{board_coords, collides};
use crate::shapes::Shape;
use crate::types::{Color, FillMode, BRICK_HEIGHT, BRICK_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling brick
///
/// `x` is the left column of the 4-wide box, `y` the board row of bitmap
/// row 0 (the bottom of the box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    /// Value written into the board when the brick is materialized
    pub color: Color,
}

impl ActivePiece {
    /// Create a new brick at the spawn position
    pub fn spawn(shape: Shape, fill_mode: FillMode) -> Self {
        let color = match fill_mode {
            FillMode::Color => shape.color(),
            FillMode::Mono => Color::MONO,
        };
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            color,
        }
    }

    /// Board coordinates of every lit cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .lit_cells()
            .map(move |(b_row, b_col)| board_coords(x, y, b_row, b_col))
    }

    /// Whether the brick would collide after shifting by `(dx, dy)`
    pub fn collides_at(&self, board: &Board, dx: i8, dy: i8) -> bool {
        collides(board, self.shape, self.x + dx, self.y + dy)
    }

    /// Whether board cell `(x, y)` is covered by a lit cell of this brick
    pub fn covers(&self, x: i8, y: i8) -> bool {
        let b_row = self.y - y;
        let b_col = x - self.x;
        (0..BRICK_HEIGHT as i8).contains(&b_row)
            && (0..BRICK_WIDTH as i8).contains(&b_col)
            && self.shape.cell_lit(b_row as usize, b_col as usize)
    }
}
