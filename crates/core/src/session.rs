//! Session module - the board plus the one falling brick
//!
//! A session owns the board and at most one active brick. Every movement
//! follows the same pattern: compute the tentative placement, test it against
//! the board, and commit only if it is legal. A rejected move leaves the brick
//! exactly where it was, so probing with `can_*` before acting is always safe.
//!
//! Lifecycle, driven by the host:
//!
//! ```text
//! spawn ──► move_left / move_right / drop ... ──► drop == MustLock ──► materialize ──► spawn
//! ```

use std::fmt;

use arrayvec::ArrayVec;
use log::{debug, trace, warn};

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shapes::Shape;
use crate::types::{
    Cell, DropOutcome, FillMode, MoveOutcome, BOARD_HEIGHT, BOARD_WIDTH, BRICK_HEIGHT,
    BRICK_WIDTH, FLOOR_Y, MAX_ANCHOR_X,
};

/// Upper bound on cells written by one materialize (the full brick box)
pub const MAX_LANDED: usize = (BRICK_WIDTH as usize) * (BRICK_HEIGHT as usize);

/// Board coordinates written by [`Session::materialize`]
pub type Landed = ArrayVec<(i8, i8), MAX_LANDED>;

/// Composite read of one board position, active brick overlaid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub cell: Cell,
    /// True when the color comes from the falling brick rather than the board
    pub from_active: bool,
}

impl Pixel {
    /// Raw 0-7 value of the pixel
    pub fn value(&self) -> u8 {
        crate::types::cell_value(self.cell)
    }
}

/// Board and active brick of a single game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<ActivePiece>,
    fill_mode: FillMode,
    /// Monotonic id of spawned bricks, for log correlation.
    piece_id: u32,
}

impl Session {
    /// Create a session with an empty board and no active brick
    pub fn new(fill_mode: FillMode) -> Self {
        Self::from_board(Board::new(), fill_mode)
    }

    /// Create a session on top of an existing board
    pub fn from_board(board: Board, fill_mode: FillMode) -> Self {
        Self {
            board,
            active: None,
            fill_mode,
            piece_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Empty the board and discard the active brick
    pub fn reset(&mut self) {
        debug!("session reset after {} bricks", self.piece_id);
        self.board.clear();
        self.active = None;
        self.piece_id = 0;
    }

    /// Place a new brick at the spawn position.
    ///
    /// No occupancy check is made: on a full board the new brick may already
    /// overlap locked cells. See [`Session::spawn_collides`].
    pub fn spawn(&mut self, shape: Shape) {
        if let Some(prev) = self.active {
            warn!(
                "spawning {:?} over live brick {:?} at ({}, {})",
                shape, prev.shape, prev.x, prev.y
            );
        }
        let piece = ActivePiece::spawn(shape, self.fill_mode);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            "spawn #{} {:?} at ({}, {})",
            self.piece_id, shape, piece.x, piece.y
        );
        self.active = Some(piece);
    }

    /// Whether the active brick overlaps locked cells where it stands.
    ///
    /// The engine never acts on this; hosts use it for game-over detection.
    pub fn spawn_collides(&self) -> bool {
        self.active
            .map(|piece| piece.collides_at(&self.board, 0, 0))
            .unwrap_or(false)
    }

    fn can_shift(&self, dx: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let target = piece.x + dx;
        (0..=MAX_ANCHOR_X).contains(&target) && !piece.collides_at(&self.board, dx, 0)
    }

    fn shift(&mut self, dx: i8) -> MoveOutcome {
        if !self.can_shift(dx) {
            trace!("shift {} blocked", dx);
            return MoveOutcome::Blocked;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.x += dx;
            trace!("shift {} -> x={}", dx, piece.x);
        }
        MoveOutcome::Moved
    }

    pub fn can_move_left(&self) -> bool {
        self.can_shift(-1)
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.shift(-1)
    }

    pub fn can_move_right(&self) -> bool {
        self.can_shift(1)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.shift(1)
    }

    /// Whether the active brick can fall one row.
    ///
    /// An anchor on `FLOOR_Y` can never drop, whatever the board holds.
    pub fn can_drop(&self) -> bool {
        match self.active {
            Some(piece) => piece.y < FLOOR_Y && !piece.collides_at(&self.board, 0, 1),
            None => false,
        }
    }

    /// Drop the active brick one row, or report that it must lock
    pub fn drop(&mut self) -> DropOutcome {
        if !self.can_drop() {
            if let Some(piece) = self.active {
                debug!(
                    "brick #{} {:?} must lock at ({}, {})",
                    self.piece_id, piece.shape, piece.x, piece.y
                );
            }
            return DropOutcome::MustLock;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.y += 1;
            trace!("drop -> y={}", piece.y);
        }
        DropOutcome::Moved
    }

    /// Write the active brick into the board and discard it.
    ///
    /// Returns the coordinates written. Without an active brick this is a
    /// no-op returning an empty list.
    pub fn materialize(&mut self) -> Landed {
        let mut landed = Landed::new();
        let Some(piece) = self.active.take() else {
            return landed;
        };
        for (x, y) in piece.cells() {
            if self.board.set(x, y, Some(piece.color)) {
                landed.push((x, y));
            }
        }
        debug!(
            "materialized #{} {:?} at ({}, {}): {} cells",
            self.piece_id,
            piece.shape,
            piece.x,
            piece.y,
            landed.len()
        );
        landed
    }

    /// Board cell at `(x, y)` with the active brick drawn on top.
    ///
    /// Returns None if out of bounds. Never writes the brick into the board.
    pub fn pixel_at(&self, x: i8, y: i8) -> Option<Pixel> {
        let cell = self.board.get(x, y)?;
        if let Some(piece) = self.active {
            if piece.covers(x, y) {
                return Some(Pixel {
                    cell: Some(piece.color),
                    from_active: true,
                });
            }
        }
        Some(Pixel {
            cell,
            from_active: false,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FillMode::default())
    }
}

/// Plain-text dump: `X` for the falling brick, `*` for locked cells.
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT as i8 {
            write!(f, "{:02}|", y)?;
            for x in 0..BOARD_WIDTH as i8 {
                let ch = match self.pixel_at(x, y) {
                    Some(Pixel {
                        from_active: true, ..
                    }) => 'X',
                    Some(Pixel { cell: Some(_), .. }) => '*',
                    _ => ' ',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
