//! Game configuration.
//!
//! Values come from defaults, an optional JSON file named by `MINES_CONFIG`,
//! and per-field environment overrides, in that order.

use std::fmt;

use serde::Deserialize;

use crate::{DEFAULT_FIELD_SIZE, DEFAULT_MINES, DEFAULT_PIXEL_SIZE, DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per row and column.
    pub field_size: usize,
    /// Mines placed by the setup step.
    pub mines: usize,
    /// Seed for mine placement.
    pub seed: u32,
    /// Logical pixel extent of the whole field.
    pub pixel_size: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            mines: DEFAULT_MINES,
            seed: DEFAULT_SEED,
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ZeroFieldSize,
    /// `field_size²` does not fit in `usize`.
    FieldTooLarge(usize),
    TooManyMines { mines: usize, cells: usize },
    InvalidPixelSize(f64),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroFieldSize
            | ConfigError::FieldTooLarge(_)
            | ConfigError::TooManyMines { .. }
            | ConfigError::InvalidPixelSize(_) => "invalid_config",
            ConfigError::Io(_) => "config_io",
            ConfigError::Json(_) => "config_json",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfigError::ZeroFieldSize => "field size is zero",
            ConfigError::FieldTooLarge(_) => "field size is too large",
            ConfigError::TooManyMines { .. } => "too many mines for the field",
            ConfigError::InvalidPixelSize(_) => "pixel size is not positive",
            ConfigError::Io(_) => "config file unreadable",
            ConfigError::Json(_) => "config file is not valid JSON",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroFieldSize => f.write_str("field size must be positive"),
            ConfigError::FieldTooLarge(size) => {
                write!(f, "a {size}x{size} field has more cells than can be counted")
            }
            ConfigError::TooManyMines { mines, cells } => {
                write!(f, "{mines} mines do not fit into {cells} cells with a safe cell left")
            }
            ConfigError::InvalidPixelSize(px) => {
                write!(f, "pixel size must be a positive finite number, got {px}")
            }
            ConfigError::Io(e) => write!(f, "could not read config file: {e}"),
            ConfigError::Json(e) => write!(f, "could not parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl GameConfig {
    /// Square field of `field_size` cells with default mines, seed and pixel size.
    pub fn with_field_size(field_size: usize) -> Self {
        Self {
            field_size,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create from environment variables.
    ///
    /// `MINES_CONFIG` names an optional JSON file. `MINES_FIELD_SIZE`,
    /// `MINES_COUNT` and `MINES_SEED` override single values; unparsable
    /// overrides are ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;

        let mut config = match env::var("MINES_CONFIG")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
                serde_json::from_str(&text).map_err(ConfigError::Json)?
            }
            None => Self::default(),
        };

        if let Some(field_size) = env::var("MINES_FIELD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.field_size = field_size;
        }
        if let Some(mines) = env::var("MINES_COUNT").ok().and_then(|s| s.parse().ok()) {
            config.mines = mines;
        }
        if let Some(seed) = env::var("MINES_SEED").ok().and_then(|s| s.parse().ok()) {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_size == 0 {
            return Err(ConfigError::ZeroFieldSize);
        }
        let cells = self
            .cell_count()
            .ok_or(ConfigError::FieldTooLarge(self.field_size))?;
        if self.mines >= cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        if !self.pixel_size.is_finite() || self.pixel_size <= 0.0 {
            return Err(ConfigError::InvalidPixelSize(self.pixel_size));
        }
        Ok(())
    }

    /// Number of cells in the field, `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        self.field_size.checked_mul(self.field_size)
    }
}
