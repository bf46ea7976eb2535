//! Session module - one round of play on a grid
//!
//! Routes pointer hits to the grid and tracks whether the round is still
//! running. A detonation uncovers every mine and ends the round; unveiling
//! the last plain field wins it.

use tracing::{info, warn};

use crate::grid::Grid;
use crate::types::{FieldState, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a single pointer hit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// No field under the pointer.
    Missed,
    Flagged,
    Unflagged,
    Unveiled,
    Detonated,
    /// The round is over, or a flag was aimed at an unveiled field.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    status: GameStatus,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            status: GameStatus::Playing,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for the renderer, which binds hitboxes while drawing.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn mine_count(&self) -> usize {
        self.grid.mine_count()
    }

    pub fn flag_count(&self) -> usize {
        self.grid.flag_count()
    }

    /// Apply a pointer hit at `point`.
    pub fn hit(&mut self, point: Position, flagging: bool) -> HitOutcome {
        if self.status != GameStatus::Playing {
            return HitOutcome::Ignored;
        }

        let Some((row, col)) = self.grid.check_for_hit(point, flagging) else {
            return HitOutcome::Missed;
        };
        let Some(field) = self.grid.get(row, col) else {
            return HitOutcome::Missed;
        };
        let state = field.state();

        if flagging {
            return match state {
                FieldState::Flagged => HitOutcome::Flagged,
                FieldState::Hidden => HitOutcome::Unflagged,
                _ => HitOutcome::Ignored,
            };
        }

        if state == FieldState::Detonated {
            let revealed = self.grid.reveal_mines();
            self.status = GameStatus::Lost;
            warn!(row, col, revealed, "mine detonated");
            return HitOutcome::Detonated;
        }

        if self.grid.all_safe_unveiled() {
            self.status = GameStatus::Won;
            info!(mines = self.grid.mine_count(), "field cleared");
        }
        HitOutcome::Unveiled
    }
}
