//! Terminal output: flushes a [`FrameBuffer`] to any `io::Write` sink.
//!
//! Only rows that changed since the last presented frame are rewritten,
//! and within a row only the changed spans. Mouse capture is switched on
//! while the game owns the terminal so clicks reach hit testing.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// A horizontal span of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    x: u16,
    y: u16,
    len: u16,
}

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    presented: Option<FrameBuffer>,
    pen: Option<CellStyle>,
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal into game mode.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            presented: None,
            pen: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Forget the presented frame; the next `present` repaints everything.
    pub fn invalidate(&mut self) {
        self.presented = None;
    }

    /// Write `fb` to the terminal.
    ///
    /// `fb` is swapped with the previously presented buffer afterwards, so
    /// callers keep one buffer alive and redraw into it each frame without
    /// allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.pen = None;
        let spans = match &self.presented {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                changed_spans(prev, fb)
            }
            _ => {
                debug!(width = fb.width(), height = fb.height(), "full redraw");
                self.out.queue(terminal::Clear(terminal::ClearType::All))?;
                (0..fb.height())
                    .map(|y| Span {
                        x: 0,
                        y,
                        len: fb.width(),
                    })
                    .collect()
            }
        };

        for span in spans {
            self.write_span(fb, span)?;
        }
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;

        match self.presented.as_mut() {
            Some(prev) => {
                prev.resize(fb.width(), fb.height());
                std::mem::swap(prev, fb);
            }
            None => self.presented = Some(fb.clone()),
        }
        Ok(())
    }

    fn write_span(&mut self, fb: &FrameBuffer, span: Span) -> Result<()> {
        self.out.queue(cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x.saturating_add(span.len) {
            let cell = fb.get(x, span.y).unwrap_or_default();
            self.write_cell(cell)?;
        }
        Ok(())
    }

    fn write_cell(&mut self, cell: Cell) -> Result<()> {
        if self.pen != Some(cell.style) {
            let style = cell.style;
            self.out
                .queue(SetAttribute(Attribute::Reset))?
                .queue(SetForegroundColor(to_color(style.fg)))?
                .queue(SetBackgroundColor(to_color(style.bg)))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.pen = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Spans of cells that differ between two equally sized buffers.
fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Span> {
    let width = next.width();
    let mut spans = Vec::new();
    for y in 0..next.height() {
        let mut x = 0;
        while x < width {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            spans.push(Span {
                x: start,
                y,
                len: x - start,
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(fb: &mut FrameBuffer, x: u16, y: u16, ch: char) {
        fb.put_char(x, y, ch, CellStyle::default());
    }

    #[test]
    fn test_adjacent_changes_merge() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            marked(&mut b, x, 0, '#');
        }
        assert_eq!(changed_spans(&a, &b), vec![Span { x: 1, y: 0, len: 3 }]);
    }

    #[test]
    fn test_separate_changes_split() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        marked(&mut b, 0, 0, 'a');
        marked(&mut b, 5, 0, 'b');
        marked(&mut b, 2, 1, 'c');
        assert_eq!(
            changed_spans(&a, &b),
            vec![
                Span { x: 0, y: 0, len: 1 },
                Span { x: 5, y: 0, len: 1 },
                Span { x: 2, y: 1, len: 1 },
            ]
        );
    }

    #[test]
    fn test_identical_frames_write_nothing_but_reset() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 2);
        marked(&mut fb, 1, 1, 'x');
        term.draw_swap(&mut fb).unwrap();
        let first = term.writer().len();
        assert!(String::from_utf8_lossy(term.writer()).contains('x'));

        marked(&mut fb, 1, 1, 'x');
        term.draw_swap(&mut fb).unwrap();
        let second = &term.writer()[first..];
        assert!(!String::from_utf8_lossy(second).contains('x'));
    }

    #[test]
    fn test_swap_hands_back_previous_frame() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(3, 1);
        marked(&mut fb, 0, 0, '1');
        term.draw_swap(&mut fb).unwrap();

        fb.clear(Cell::default());
        marked(&mut fb, 0, 0, '2');
        term.draw_swap(&mut fb).unwrap();
        // Caller now holds the frame presented before last.
        assert_eq!(fb.row_text(0), "1  ");
    }

    #[test]
    fn test_resize_repaints_all_rows() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 1);
        term.draw_swap(&mut fb).unwrap();

        let mut bigger = FrameBuffer::new(3, 2);
        marked(&mut bigger, 2, 1, 'z');
        let before = term.writer().len();
        term.draw_swap(&mut bigger).unwrap();
        assert!(String::from_utf8_lossy(&term.writer()[before..]).contains('z'));
    }
}
