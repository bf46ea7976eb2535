//! FieldRenderer: maps a field's state to its fill colour.

use std::fmt;

use crate::fb::Rgb;
use crate::surface::DrawCommand;
use crate::types::{FieldState, Hitbox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A state with no colour rule.
    UnknownFieldState(FieldState),
}

impl RenderError {
    pub fn code(self) -> &'static str {
        match self {
            RenderError::UnknownFieldState(_) => "unknown_field_state",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RenderError::UnknownFieldState(_) => "field state has no render rule",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownFieldState(state) => {
                write!(f, "no render rule for field state {state:?}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Maps field states to fill colours: grey, white, blue and red.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRenderer;

impl FieldRenderer {
    pub fn color_for(&self, state: FieldState) -> Result<Rgb, RenderError> {
        match state {
            FieldState::Hidden => Ok(Rgb::GREY),
            FieldState::Unveiled => Ok(Rgb::WHITE),
            FieldState::Flagged => Ok(Rgb::BLUE),
            FieldState::Detonated => Ok(Rgb::RED),
            other => Err(RenderError::UnknownFieldState(other)),
        }
    }

    /// Draw command for one cell in `state`, occupying `rect`.
    pub fn render(
        &self,
        state: FieldState,
        rect: Hitbox,
        label: Option<usize>,
    ) -> Result<DrawCommand, RenderError> {
        Ok(DrawCommand::FillRect {
            rect,
            color: self.color_for(state)?,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn colour_table() {
        let r = FieldRenderer::default();
        assert_eq!(r.color_for(FieldState::Hidden), Ok(Rgb::GREY));
        assert_eq!(r.color_for(FieldState::Unveiled), Ok(Rgb::WHITE));
        assert_eq!(r.color_for(FieldState::Flagged), Ok(Rgb::BLUE));
        assert_eq!(r.color_for(FieldState::Detonated), Ok(Rgb::RED));
    }

    #[test]
    fn render_builds_fill_command() {
        let rect = Hitbox::new(Position::new(0.0, 0.0), Position::new(1.0, 1.0));
        let cmd = FieldRenderer::default()
            .render(FieldState::Unveiled, rect, Some(2))
            .unwrap();
        assert_eq!(
            cmd,
            DrawCommand::FillRect {
                rect,
                color: Rgb::WHITE,
                label: Some(2)
            }
        );
    }

    #[test]
    fn error_reports_state() {
        let err = RenderError::UnknownFieldState(FieldState::Hidden);
        assert_eq!(err.code(), "unknown_field_state");
        assert_eq!(err.message(), "field state has no render rule");
        assert!(err.to_string().contains("Hidden"));
    }
}
