//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: geometry, the derived per-cell state, the
//! game configuration and the actions a front-end can request.
//!
//! # Grid Dimensions
//!
//! The field is always square:
//!
//! - **Field size**: `field_size` columns and rows (indexed `0..field_size`)
//! - **Pixel size**: logical pixel extent of the whole field; each cell is
//!   `pixel_size / field_size` logical pixels wide and high
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FIELD_SIZE` | 9 | Cells per row and column |
//! | `DEFAULT_MINES` | 10 | Mines placed by the setup step |
//! | `DEFAULT_PIXEL_SIZE` | 18.0 | Logical pixels across the field |
//! | `DEFAULT_SEED` | 1 | Seed for mine placement |
//!
//! # Examples
//!
//! ```
//! use tui_mines_types::{FieldState, GameConfig, Hitbox, Position};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.field_size, 9);
//!
//! let cell = Hitbox::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0));
//! assert!(cell.is_hit(Position::new(2.0, 1.0)));
//!
//! assert_eq!(FieldState::Detonated.as_str(), "detonated");
//! ```

pub mod config;
pub mod geometry;

pub use config::{ConfigError, GameConfig};
pub use geometry::{Hitbox, Position};

/// Default number of cells per row and column
pub const DEFAULT_FIELD_SIZE: usize = 9;

/// Default number of mines placed by the setup step
pub const DEFAULT_MINES: usize = 10;

/// Default logical pixel extent of the whole field
pub const DEFAULT_PIXEL_SIZE: f64 = 18.0;

/// Default seed for mine placement
pub const DEFAULT_SEED: u32 = 1;

/// Offsets of the eight cells surrounding a cell, as `(row, col)` deltas.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Player-visible state of a cell.
///
/// The state is never stored; it is derived from the cell's flags and kind
/// whenever it is queried:
///
/// - **Hidden**: not unveiled, not flagged
/// - **Flagged**: not unveiled, flag set
/// - **Unveiled**: a safe cell that has been unveiled
/// - **Detonated**: a mine that has been unveiled
///
/// New states may be added; renderers must reject states they have no rule
/// for instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldState {
    Hidden,
    Unveiled,
    Flagged,
    Detonated,
}

impl FieldState {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldState::Hidden => "hidden",
            FieldState::Unveiled => "unveiled",
            FieldState::Flagged => "flagged",
            FieldState::Detonated => "detonated",
        }
    }
}

impl std::fmt::Display for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-pointer actions a front-end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Switch pointer hits between unveiling and flagging
    ToggleFlagMode,
    /// Start a new field with the next seed
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_on_an_80x24_terminal() {
        // Two terminal columns per logical pixel plus the closing grid line.
        assert!((DEFAULT_PIXEL_SIZE as usize) * 2 + 1 <= 80);
        assert!((DEFAULT_PIXEL_SIZE as usize) + 1 < 24);
        assert!(DEFAULT_MINES < DEFAULT_FIELD_SIZE * DEFAULT_FIELD_SIZE);
    }

    #[test]
    fn neighbor_offsets_exclude_center() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        for (dr, dc) in NEIGHBOR_OFFSETS {
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
        }
    }

    #[test]
    fn state_names() {
        assert_eq!(FieldState::Flagged.to_string(), "flagged");
        assert_eq!(FieldState::Unveiled.as_str(), "unveiled");
    }
}
