//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the cell state machine, the grid and a round of play.
//! It has **zero dependencies** on rendering, terminals or I/O.
//!
//! # Module Structure
//!
//! - [`field`]: a single cell (plain or mine), its derived state and hit handling
//! - [`grid`]: the square field of cells, neighbour mine counts, hit dispatch
//! - [`rng`]: seeded mine placement
//! - [`session`]: a round of play with win/loss tracking
//!
//! # Example
//!
//! ```
//! use tui_mines_core::{Grid, Session, GameStatus};
//! use tui_mines_core::types::{FieldState, GameConfig, Hitbox, Position};
//!
//! let config = GameConfig::with_field_size(3);
//! let mut grid = Grid::from_layout(&config, &["...", ".*.", "..."]).unwrap();
//! assert_eq!(grid.calculate_mines(0, 0), 1);
//!
//! // Hitboxes are normally bound by the renderer.
//! for field in grid.iter_mut() {
//!     let lu = Position::new(field.col() as f64, field.row() as f64);
//!     field.render_on(Hitbox::new(lu, lu.move_x(1.0).move_y(1.0)));
//! }
//!
//! let mut session = Session::new(grid);
//! session.hit(Position::new(1.5, 1.5), false);
//! assert_eq!(session.status(), GameStatus::Lost);
//! assert_eq!(session.grid().get(1, 1).unwrap().state(), FieldState::Detonated);
//! ```

pub mod field;
pub mod grid;
pub mod rng;
pub mod session;

pub use tui_mines_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, FieldError, FieldKind};
pub use grid::Grid;
pub use rng::{mine_indices, SimpleRng};
pub use session::{GameStatus, HitOutcome, Session};
