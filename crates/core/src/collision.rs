//! Collision detection for hypothetical brick placements.
//!
//! Every board read goes through the bounds-checked [`Board::get`]. A lit
//! brick cell that would land outside the board counts as a collision, so
//! probing an illegal anchor can never index past the grid.

use crate::board::Board;
use crate::shapes::Shape;

/// Board coordinates of a lit bitmap cell for a brick anchored at `(anchor_x, anchor_y)`
#[inline(always)]
pub fn board_coords(anchor_x: i8, anchor_y: i8, b_row: usize, b_col: usize) -> (i8, i8) {
    (anchor_x + b_col as i8, anchor_y - b_row as i8)
}

/// Check whether `shape` anchored at `(anchor_x, anchor_y)` overlaps a filled
/// cell or sticks out of the board.
pub fn collides(board: &Board, shape: Shape, anchor_x: i8, anchor_y: i8) -> bool {
    shape.lit_cells().any(|(b_row, b_col)| {
        let (x, y) = board_coords(anchor_x, anchor_y, b_row, b_col);
        !matches!(board.get(x, y), Some(None))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, FLOOR_Y, MAX_ANCHOR_X, SPAWN_X, SPAWN_Y};

    #[test]
    fn empty_board_never_collides_in_legal_range() {
        let board = Board::new();
        for shape in Shape::ALL {
            for x in 0..=MAX_ANCHOR_X {
                for y in SPAWN_Y..=FLOOR_Y {
                    assert!(!collides(&board, shape, x, y), "{:?} at ({}, {})", shape, x, y);
                }
            }
        }
    }

    #[test]
    fn lit_cell_over_filled_cell_collides() {
        let mut board = Board::new();
        board.set(3, 5, Some(Color::MONO));

        // Square at anchor (2, 5) covers (2..=3, 4..=5).
        assert!(collides(&board, Shape::O, 2, 5));
        // Anchor (2, 6) covers rows 5..=6.
        assert!(collides(&board, Shape::O, 2, 6));
        // Anchor (2, 7) is clear of row 5.
        assert!(!collides(&board, Shape::O, 2, 7));
    }

    #[test]
    fn dark_cell_over_filled_cell_does_not_collide() {
        let mut board = Board::new();
        // The bar's bottom bitmap row is dark.
        board.set(SPAWN_X, 5, Some(Color::MONO));
        assert!(!collides(&board, Shape::I, SPAWN_X, 5));
        assert!(collides(&board, Shape::I, SPAWN_X, 6));
    }

    #[test]
    fn out_of_board_placements_collide() {
        let board = Board::new();
        assert!(collides(&board, Shape::O, -1, 5));
        assert!(collides(&board, Shape::O, MAX_ANCHOR_X + 4, 5));
        assert!(collides(&board, Shape::O, 0, 0));
        assert!(collides(&board, Shape::O, 0, FLOOR_Y + 1));
        // Dark right half of the square may hang over the right wall.
        assert!(!collides(&board, Shape::O, MAX_ANCHOR_X + 2, 5));
    }

    #[test]
    fn board_coords_follow_upward_rows() {
        assert_eq!(board_coords(2, 1, 0, 0), (2, 1));
        assert_eq!(board_coords(2, 1, 1, 3), (5, 0));
    }
}
