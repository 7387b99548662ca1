//! Shapes module - the seven brick bitmaps
//!
//! Every brick fits into a 2-row x 4-column box. Bitmap row 0 is the
//! *bottom* row of the box (it sits on the anchor row), row 1 is the row
//! above it. Board coordinates of a lit bitmap cell are
//! `(anchor_x + b_col, anchor_y - b_row)`.

use crate::types::{Color, BRICK_HEIGHT, BRICK_WIDTH, SHAPE_COUNT};

/// Bitmap of a single brick, indexed `[b_row][b_col]`
pub type Bitmap = [[bool; BRICK_WIDTH as usize]; BRICK_HEIGHT as usize];

/// Brick shapes, in table order (index 0-6).
///
/// Letters describe the brick as it appears on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    L,
    J,
    O,
    Z,
    T,
    S,
}

const X: bool = true;
const D: bool = false;

/// Shape table, bottom row first
const BITMAPS: [Bitmap; SHAPE_COUNT] = [
    // I: "    " / "****"
    [[D, D, D, D], [X, X, X, X]],
    // L: "*** " / "  * "
    [[X, X, X, D], [D, D, X, D]],
    // J: "*** " / "*   "
    [[X, X, X, D], [X, D, D, D]],
    // O: "**  " / "**  "
    [[X, X, D, D], [X, X, D, D]],
    // Z: " ** " / "**  "
    [[D, X, X, D], [X, X, D, D]],
    // T: "*** " / " *  "
    [[X, X, X, D], [D, X, D, D]],
    // S: "**  " / " ** "
    [[X, X, D, D], [D, X, X, D]],
];

impl Shape {
    /// All shapes in table order
    pub const ALL: [Shape; SHAPE_COUNT] = [
        Shape::I,
        Shape::L,
        Shape::J,
        Shape::O,
        Shape::Z,
        Shape::T,
        Shape::S,
    ];

    /// Look up a shape by its table index; `None` for indices past 6
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn bitmap(self) -> &'static Bitmap {
        &BITMAPS[self.index()]
    }

    /// Whether bitmap cell `(b_row, b_col)` is lit.
    ///
    /// `b_row` must be below `BRICK_HEIGHT` and `b_col` below `BRICK_WIDTH`.
    #[inline(always)]
    pub fn cell_lit(self, b_row: usize, b_col: usize) -> bool {
        debug_assert!(b_row < BRICK_HEIGHT as usize && b_col < BRICK_WIDTH as usize);
        BITMAPS[self.index()][b_row][b_col]
    }

    /// Lit cells as `(b_row, b_col)` pairs, bottom row first, left to right
    pub fn lit_cells(self) -> impl Iterator<Item = (usize, usize)> {
        let bitmap = self.bitmap();
        (0..BRICK_HEIGHT as usize).flat_map(move |b_row| {
            (0..BRICK_WIDTH as usize)
                .filter(move |&b_col| bitmap[b_row][b_col])
                .map(move |b_col| (b_row, b_col))
        })
    }

    /// Canonical color of the shape (table index + 1)
    pub fn color(self) -> Color {
        match Color::new(self.index() as u8 + 1) {
            Some(c) => c,
            None => Color::MONO,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Shape::I => 'I',
            Shape::L => 'L',
            Shape::J => 'J',
            Shape::O => 'O',
            Shape::Z => 'Z',
            Shape::T => 'T',
            Shape::S => 'S',
        }
    }
}
