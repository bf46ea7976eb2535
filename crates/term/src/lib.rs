//! Terminal rendering for the mine field.
//!
//! Rendering is split in two stages:
//!
//! - [`GridRenderer`] turns a `core::Grid` into a [`Frame`] of draw commands
//!   in logical pixel space and binds each field's hitbox on the way.
//! - [`paint`] replays a frame onto a [`DrawSurface`]. [`Canvas`] is the
//!   surface backed by a [`FrameBuffer`], which [`TerminalRenderer`] then
//!   flushes to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep geometry testable without a terminal
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per pixel)

pub mod canvas;
pub mod fb;
pub mod field_renderer;
pub mod grid_renderer;
pub mod surface;
pub mod terminal;

pub use tui_mines_core as core;
pub use tui_mines_types as types;

pub use canvas::{Canvas, ScreenMapping, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use field_renderer::{FieldRenderer, RenderError};
pub use grid_renderer::GridRenderer;
pub use surface::{paint, DrawCommand, DrawSurface, Frame, GRID_INK, LABEL_INK};
pub use terminal::TerminalRenderer;
