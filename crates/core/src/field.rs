//! Field module - a single grid cell and its state machine
//!
//! A field is either a plain cell or a mine. Both carry the same data; the
//! kind only changes which terminal state an unveiled field reports.
//!
//! ```text
//! Hidden --unveil--> Unveiled | Detonated   (terminal)
//! Hidden <--flag---> Flagged
//! Flagged --unveil--> Unveiled | Detonated
//! ```

use std::fmt;

use tracing::debug;

use crate::types::{FieldState, GameConfig, Hitbox, Position};

/// What a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Normal,
    Mine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Coordinates outside `0..field_size`.
    InvalidFieldPosition { col: i64, row: i64, field_size: usize },
    /// A grid whose shape does not match the configured field size.
    LayoutMismatch {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },
}

impl FieldError {
    pub fn code(self) -> &'static str {
        match self {
            FieldError::InvalidFieldPosition { .. } => "invalid_field_position",
            FieldError::LayoutMismatch { .. } => "layout_mismatch",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FieldError::InvalidFieldPosition { .. } => "field position outside the grid",
            FieldError::LayoutMismatch { .. } => "grid rows do not match the field size",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FieldError::InvalidFieldPosition {
                col,
                row,
                field_size,
            } => write!(
                f,
                "field at column {col}, row {row} is outside a {field_size}x{field_size} grid"
            ),
            FieldError::LayoutMismatch {
                row: Some(row),
                expected,
                found,
            } => write!(f, "row {row} has {found} fields, expected {expected}"),
            FieldError::LayoutMismatch {
                row: None,
                expected,
                found,
            } => write!(f, "grid has {found} rows, expected {expected}"),
        }
    }
}

impl std::error::Error for FieldError {}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: FieldKind,
    col: usize,
    row: usize,
    is_unveiled: bool,
    is_flagged: bool,
    /// Assigned by the renderer; `None` until the field has been drawn once.
    hitbox: Option<Hitbox>,
}

impl Field {
    /// Create a plain field at `(col, row)`.
    pub fn new(col: i64, row: i64, config: &GameConfig) -> Result<Self, FieldError> {
        Self::with_kind(FieldKind::Normal, col, row, config)
    }

    /// Create a mine at `(col, row)`.
    pub fn mine(col: i64, row: i64, config: &GameConfig) -> Result<Self, FieldError> {
        Self::with_kind(FieldKind::Mine, col, row, config)
    }

    pub fn with_kind(
        kind: FieldKind,
        col: i64,
        row: i64,
        config: &GameConfig,
    ) -> Result<Self, FieldError> {
        let size = config.field_size as i64;
        if col < 0 || row < 0 || col > size - 1 || row > size - 1 {
            return Err(FieldError::InvalidFieldPosition {
                col,
                row,
                field_size: config.field_size,
            });
        }
        Ok(Self {
            kind,
            col: col as usize,
            row: row as usize,
            is_unveiled: false,
            is_flagged: false,
            hitbox: None,
        })
    }

    pub fn is_mine(&self) -> bool {
        self.kind == FieldKind::Mine
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn is_unveiled(&self) -> bool {
        self.is_unveiled
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub fn hitbox(&self) -> Option<Hitbox> {
        self.hitbox
    }

    /// Derive the visible state. Unveiling takes precedence over the flag.
    pub fn state(&self) -> FieldState {
        if self.is_unveiled {
            return match self.kind {
                FieldKind::Normal => FieldState::Unveiled,
                FieldKind::Mine => FieldState::Detonated,
            };
        }
        if self.is_flagged {
            FieldState::Flagged
        } else {
            FieldState::Hidden
        }
    }

    /// Bind the hitbox this field occupies on screen and return the state to draw.
    pub fn render_on(&mut self, hitbox: Hitbox) -> FieldState {
        self.hitbox = Some(hitbox);
        self.state()
    }

    /// Apply a pointer hit if `point` lies inside this field.
    ///
    /// Returns true when the field was hit. With `flagging` the flag is
    /// toggled, otherwise the field is unveiled. Unveiling is permanent.
    ///
    /// The flag bit flips even on an unveiled field; the visible state stays
    /// unveiled. Callers that count flags must skip unveiled fields.
    /// A field that has never been rendered has no hitbox and is never hit.
    pub fn check_for_hit(&mut self, point: Position, flagging: bool) -> bool {
        let Some(hitbox) = self.hitbox else {
            return false;
        };
        if !hitbox.is_hit(point) {
            return false;
        }

        if flagging {
            self.is_flagged = !self.is_flagged;
            debug!(col = self.col, row = self.row, flagged = self.is_flagged, "flag toggled");
        } else if !self.is_unveiled {
            self.is_unveiled = true;
            debug!(col = self.col, row = self.row, state = %self.state(), "field unveiled");
        }
        true
    }

    /// Unveil without a hit test, e.g. to show every mine after a detonation.
    pub fn reveal(&mut self) {
        self.is_unveiled = true;
    }
}
