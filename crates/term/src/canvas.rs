//! Canvas: a [`DrawSurface`] backed by a terminal framebuffer.
//!
//! Logical pixels are mapped onto terminal cells by a [`ScreenMapping`].
//! The default mapping uses two columns per logical pixel horizontally to
//! compensate for the typical terminal glyph aspect ratio. The same mapping
//! converts mouse positions back into logical pixels for hit-testing.

use std::ops::Range;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::DrawSurface;
use crate::types::{Hitbox, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Affine map between logical pixels and terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Terminal columns per logical pixel.
    pub scale_x: f64,
    /// Terminal rows per logical pixel.
    pub scale_y: f64,
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            scale_x: 2.0,
            scale_y: 1.0,
        }
    }
}

impl ScreenMapping {
    /// Terminal size taken by a `pixel_size` square, closing grid line included.
    pub fn extent(&self, pixel_size: f64) -> (u16, u16) {
        let w = (pixel_size * self.scale_x).floor() as u16 + 1;
        let h = (pixel_size * self.scale_y).floor() as u16 + 1;
        (w, h)
    }

    /// Center a `pixel_size` square in the viewport, keeping `reserved_rows`
    /// free below it for status text.
    pub fn centered(self, pixel_size: f64, viewport: Viewport, reserved_rows: u16) -> Self {
        let (w, h) = self.extent(pixel_size);
        Self {
            origin_x: viewport.width.saturating_sub(w) / 2,
            origin_y: viewport.height.saturating_sub(h + reserved_rows) / 2,
            ..self
        }
    }

    /// Terminal cell containing `p`. May lie off-screen.
    pub fn to_screen(&self, p: Position) -> (i64, i64) {
        let x = self.origin_x as i64 + (p.x * self.scale_x).floor() as i64;
        let y = self.origin_y as i64 + (p.y * self.scale_y).floor() as i64;
        (x, y)
    }

    /// Logical position of the center of terminal cell `(column, row)`.
    pub fn to_logical(&self, column: u16, row: u16) -> Position {
        Position::new(
            (column as f64 - self.origin_x as f64 + 0.5) / self.scale_x,
            (row as f64 - self.origin_y as f64 + 0.5) / self.scale_y,
        )
    }
}

fn on_screen(x: i64, y: i64) -> Option<(u16, u16)> {
    let x = u16::try_from(x).ok()?;
    let y = u16::try_from(y).ok()?;
    Some((x, y))
}

/// The part of `start..end` that lies inside `0..len`.
fn clip(start: i64, end: i64, len: u16) -> Range<u16> {
    let len = i64::from(len);
    // Both bounds are clamped into `0..=len`, so the casts are lossless.
    let start = start.clamp(0, len) as u16;
    let end = end.clamp(0, len) as u16;
    start..end.max(start)
}

/// Coordinate on the minor axis of a line after `step` cells along the major one.
fn interpolate(from: i64, delta: i64, step: i64, steps: i64) -> i64 {
    let offset = i128::from(delta) * i128::from(step) / i128::from(steps);
    from.saturating_add(offset.clamp(i64::MIN.into(), i64::MAX.into()) as i64)
}

/// Draws logical-pixel commands into a framebuffer.
pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    mapping: ScreenMapping,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, mapping: ScreenMapping) -> Self {
        Self { fb, mapping }
    }

    fn line_glyph(&self, x: u16, y: u16, vertical: bool) -> char {
        let existing = self.fb.get(x, y).map(|c| c.ch).unwrap_or(' ');
        match (vertical, existing) {
            (true, '─') | (false, '│') | (_, '┼') => '┼',
            (true, _) => '│',
            (false, _) => '─',
        }
    }
}

impl DrawSurface for Canvas<'_> {
    fn fill_rect(&mut self, rect: Hitbox, color: Rgb) {
        let (x0, y0) = self.mapping.to_screen(rect.left_upper());
        let (x1, y1) = self.mapping.to_screen(rect.right_lower());
        let style = CellStyle {
            bg: color,
            ..CellStyle::default()
        };
        let xs = clip(x0, x1, self.fb.width());
        for y in clip(y0, y1, self.fb.height()) {
            for x in xs.clone() {
                self.fb.put_char(x, y, ' ', style);
            }
        }
    }

    fn stroke_line(&mut self, start: Position, end: Position, color: Rgb) {
        let (x0, y0) = self.mapping.to_screen(start);
        let (x1, y1) = self.mapping.to_screen(end);

        let (width, height) = (self.fb.width(), self.fb.height());

        if x0 == x1 {
            let Ok(x) = u16::try_from(x0) else { return };
            if x >= width {
                return;
            }
            for y in clip(y0.min(y1), y0.max(y1).saturating_add(1), height) {
                let ch = self.line_glyph(x, y, true);
                self.fb.overlay_char(x, y, ch, color, false);
            }
        } else if y0 == y1 {
            let Ok(y) = u16::try_from(y0) else { return };
            if y >= height {
                return;
            }
            for x in clip(x0.min(x1), x0.max(x1).saturating_add(1), width) {
                let ch = self.line_glyph(x, y, false);
                self.fb.overlay_char(x, y, ch, color, false);
            }
        } else {
            // Diagonal: walk the visible part of the longer axis.
            let (dx, dy) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
            if dx.unsigned_abs() >= dy.unsigned_abs() {
                let steps = dx.saturating_abs();
                for x in clip(x0.min(x1), x0.max(x1).saturating_add(1), width) {
                    let step = (i64::from(x) - x0).abs();
                    if let Some((x, y)) = on_screen(i64::from(x), interpolate(y0, dy, step, steps)) {
                        self.fb.overlay_char(x, y, '·', color, false);
                    }
                }
            } else {
                let steps = dy.saturating_abs();
                for y in clip(y0.min(y1), y0.max(y1).saturating_add(1), height) {
                    let step = (i64::from(y) - y0).abs();
                    if let Some((x, y)) = on_screen(interpolate(x0, dx, step, steps), i64::from(y)) {
                        self.fb.overlay_char(x, y, '·', color, false);
                    }
                }
            }
        }
    }

    fn draw_centered_text(&mut self, rect: Hitbox, text: &str, color: Rgb) {
        let (cx, cy) = self.mapping.to_screen(rect.center());
        let len = text.chars().count() as i64;
        let start = cx - len / 2;
        for (i, ch) in text.chars().enumerate() {
            if let Some((x, y)) = on_screen(start + i as i64, cy) {
                self.fb.overlay_char(x, y, ch, color, true);
            }
        }
    }
}
