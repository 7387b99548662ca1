//! Host loop logic shared by the binaries.
//!
//! The engine leaves shape selection and game-over handling to its host.
//! This driver cycles through the shape table in order, applies gravity on a
//! fixed interval, materializes and respawns on lock, and starts over when a
//! fresh brick spawns on top of locked cells.

use log::info;

use crate::core::{Session, Shape};
use crate::types::{DropOutcome, FillMode, GameAction, MoveOutcome, SHAPE_COUNT};

/// What a single driver call did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do (gravity timer still running)
    Idle,
    Moved,
    Blocked,
    /// The brick was materialized and the next one spawned
    Locked { cells: usize, topped_out: bool },
    Restarted,
}

#[derive(Debug, Clone)]
pub struct Driver {
    session: Session,
    next_shape: usize,
    drop_interval_ms: u32,
    gravity_timer_ms: u32,
    locked: u32,
}

impl Driver {
    /// Create a driver and spawn the first brick
    pub fn new(fill_mode: FillMode, drop_interval_ms: u32) -> Self {
        let mut driver = Self {
            session: Session::new(fill_mode),
            next_shape: 0,
            drop_interval_ms: drop_interval_ms.max(1),
            gravity_timer_ms: 0,
            locked: 0,
        };
        driver.spawn_next();
        driver
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Bricks locked since the last restart
    pub fn locked(&self) -> u32 {
        self.locked
    }

    fn spawn_next(&mut self) -> Shape {
        let shape = Shape::ALL[self.next_shape];
        self.next_shape = (self.next_shape + 1) % SHAPE_COUNT;
        self.session.spawn(shape);
        shape
    }

    fn restart(&mut self) {
        self.session.reset();
        self.next_shape = 0;
        self.gravity_timer_ms = 0;
        self.locked = 0;
        self.spawn_next();
    }

    fn drop_or_lock(&mut self) -> Step {
        match self.session.drop() {
            DropOutcome::Moved => Step::Moved,
            DropOutcome::MustLock => {
                let cells = self.session.materialize().len();
                self.locked += 1;
                self.spawn_next();
                let topped_out = self.session.spawn_collides();
                if topped_out {
                    info!("board topped out after {} bricks, restarting", self.locked);
                    self.restart();
                }
                Step::Locked { cells, topped_out }
            }
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> Step {
        let moved = match action {
            GameAction::MoveLeft => self.session.move_left(),
            GameAction::MoveRight => self.session.move_right(),
            GameAction::Drop => {
                self.gravity_timer_ms = 0;
                return self.drop_or_lock();
            }
            GameAction::Restart => {
                self.restart();
                return Step::Restarted;
            }
        };
        match moved {
            MoveOutcome::Moved => Step::Moved,
            MoveOutcome::Blocked => Step::Blocked,
        }
    }

    /// Advance the gravity timer; drops one row each full interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> Step {
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.drop_interval_ms {
            return Step::Idle;
        }
        self.gravity_timer_ms -= self.drop_interval_ms;
        self.drop_or_lock()
    }
}
