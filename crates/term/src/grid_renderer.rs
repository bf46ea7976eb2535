//! GridRenderer: maps a `core::Grid` into draw commands.
//!
//! This module is pure (no I/O). Rendering binds each field's hitbox as a
//! side effect so that later pointer hits can find the field; nothing else
//! about the grid changes.

use crate::core::Grid;
use crate::field_renderer::{FieldRenderer, RenderError};
use crate::surface::{DrawCommand, Frame, GRID_INK};
use crate::types::{FieldState, Hitbox, Position};

/// Lays out a square grid over `pixel_size × pixel_size` logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRenderer {
    pixel_size: f64,
    field_renderer: FieldRenderer,
}

impl GridRenderer {
    pub fn new(pixel_size: f64) -> Self {
        Self {
            pixel_size,
            field_renderer: FieldRenderer,
        }
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Edge length of one cell in logical pixels.
    pub fn cell_size(&self, grid: &Grid) -> f64 {
        self.pixel_size / grid.field_size() as f64
    }

    /// Rectangle covered by the field at `(row, col)`.
    pub fn cell_rect(&self, grid: &Grid, row: usize, col: usize) -> Hitbox {
        let s = self.cell_size(grid);
        let left_upper = Position::new(col as f64 * s, row as f64 * s);
        Hitbox::new(left_upper, left_upper.move_x(s).move_y(s))
    }

    /// Render fields, then the grid lines, into an existing frame.
    pub fn render_into(&self, grid: &mut Grid, frame: &mut Frame) -> Result<(), RenderError> {
        frame.clear();
        self.render_fields(grid, frame)?;
        self.draw_grid(grid.field_size(), frame);
        Ok(())
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, grid: &mut Grid) -> Result<Frame, RenderError> {
        let mut frame = Frame::new();
        self.render_into(grid, &mut frame)?;
        Ok(frame)
    }

    /// One fill command per field, row-major. Unveiled fields carry their
    /// neighbour mine count as label.
    pub fn render_fields(&self, grid: &mut Grid, frame: &mut Frame) -> Result<(), RenderError> {
        let size = grid.field_size();
        for row in 0..size {
            for col in 0..size {
                let rect = self.cell_rect(grid, row, col);
                let count = grid.calculate_mines(row, col);
                let Some(field) = grid.get_mut(row, col) else {
                    continue;
                };
                let state = field.render_on(rect);
                let label = (state == FieldState::Unveiled).then_some(count);
                frame.push(self.field_renderer.render(state, rect, label)?);
            }
        }
        Ok(())
    }

    /// `field_size + 1` vertical lines followed by `field_size + 1`
    /// horizontal lines, evenly spaced across the whole area.
    pub fn draw_grid(&self, field_size: usize, frame: &mut Frame) {
        let gap = self.pixel_size / field_size as f64;
        let origin = Position::new(0.0, 0.0);

        let mut start = origin;
        let mut end = origin.move_y(self.pixel_size);
        for _ in 0..=field_size {
            frame.push(DrawCommand::Line {
                start,
                end,
                color: GRID_INK,
            });
            start = start.move_x(gap);
            end = end.move_x(gap);
        }

        let mut start = origin;
        let mut end = origin.move_x(self.pixel_size);
        for _ in 0..=field_size {
            frame.push(DrawCommand::Line {
                start,
                end,
                color: GRID_INK,
            });
            start = start.move_y(gap);
            end = end.move_y(gap);
        }
    }
}
