//! Draw commands and the surface they are painted on.
//!
//! Rendering produces a [`Frame`] of [`DrawCommand`]s in logical pixel
//! space. [`paint`] replays a frame onto any [`DrawSurface`], which keeps
//! the geometry testable without a terminal.

use crate::fb::Rgb;
use crate::types::{Hitbox, Position};

/// Colour of the neighbour count drawn on unveiled cells.
pub const LABEL_INK: Rgb = Rgb::BLACK;

/// Colour of the separator lines between cells.
pub const GRID_INK: Rgb = Rgb::new(90, 90, 100);

/// A 2D drawing target in logical pixel coordinates.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Hitbox, color: Rgb);
    fn stroke_line(&mut self, start: Position, end: Position, color: Rgb);
    fn draw_centered_text(&mut self, rect: Hitbox, text: &str, color: Rgb);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A cell: filled rectangle with an optional centered number.
    FillRect {
        rect: Hitbox,
        color: Rgb,
        label: Option<usize>,
    },
    Line {
        start: Position,
        end: Position,
        color: Rgb,
    },
}

/// Ordered draw commands for one render pass.
///
/// Callers can keep one frame and hand it to `render_into` every pass to
/// reuse its allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Replay `frame` onto `surface` in order.
pub fn paint(frame: &Frame, surface: &mut impl DrawSurface) {
    for command in frame.commands() {
        match *command {
            DrawCommand::FillRect { rect, color, label } => {
                surface.fill_rect(rect, color);
                if let Some(count) = label {
                    surface.draw_centered_text(rect, &count.to_string(), LABEL_INK);
                }
            }
            DrawCommand::Line { start, end, color } => surface.stroke_line(start, end, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DrawSurface for Recorder {
        fn fill_rect(&mut self, rect: Hitbox, _color: Rgb) {
            self.calls.push(format!("rect {}", rect.left_upper().x));
        }

        fn stroke_line(&mut self, start: Position, _end: Position, _color: Rgb) {
            self.calls.push(format!("line {}", start.x));
        }

        fn draw_centered_text(&mut self, _rect: Hitbox, text: &str, _color: Rgb) {
            self.calls.push(format!("text {text}"));
        }
    }

    #[test]
    fn paint_replays_in_order_with_labels() {
        let rect = Hitbox::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0));
        let mut frame = Frame::new();
        frame.push(DrawCommand::FillRect {
            rect,
            color: Rgb::WHITE,
            label: Some(3),
        });
        frame.push(DrawCommand::FillRect {
            rect,
            color: Rgb::GREY,
            label: None,
        });
        frame.push(DrawCommand::Line {
            start: Position::new(0.0, 0.0),
            end: Position::new(0.0, 2.0),
            color: GRID_INK,
        });

        let mut rec = Recorder::default();
        paint(&frame, &mut rec);
        assert_eq!(rec.calls, vec!["rect 0", "text 3", "rect 0", "line 0"]);
    }

    #[test]
    fn frame_clear_empties() {
        let mut frame = Frame::new();
        frame.push(DrawCommand::Line {
            start: Position::default(),
            end: Position::default(),
            color: GRID_INK,
        });
        assert_eq!(frame.len(), 1);
        frame.clear();
        assert!(frame.is_empty());
    }
}
