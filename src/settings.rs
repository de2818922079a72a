//! Playfield and entity tuning
//!
//! Every number the simulation uses comes from here. Defaults reproduce the
//! classic 800x600 layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Ball tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Radius
    pub size: f32,
    /// Nominal speed, used for the initial velocity and every paddle bounce
    pub speed: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }
}

/// Paddle tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Gap between the paddle's top edge and the bottom of the playfield
    pub bottom_gap: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_gap: PADDLE_BOTTOM_GAP,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Bricks along the horizontal axis
    pub rows: usize,
    /// Bricks along the vertical axis
    pub columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_x: BRICK_OFFSET_X,
            offset_y: BRICK_OFFSET_Y,
        }
    }
}

impl GridSettings {
    /// Total number of bricks in a full grid
    pub fn total(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Total number of bricks, or `None` if it does not fit in a `usize`
    pub fn checked_total(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Right edge of the last brick
    pub fn extent_x(&self) -> f32 {
        self.offset_x + self.rows as f32 * (self.brick_width + self.padding) - self.padding
    }

    /// Bottom edge of the last brick
    pub fn extent_y(&self) -> f32 {
        self.offset_y + self.columns as f32 * (self.brick_height + self.padding) - self.padding
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub grid: GridSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
            grid: GridSettings::default(),
        }
    }
}

impl Settings {
    /// Default settings for a surface of the given size
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the layout is playable
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ball.size", self.ball.size),
            ("ball.speed", self.ball.speed),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.speed", self.paddle.speed),
            ("grid.brick_width", self.grid.brick_width),
            ("grid.brick_height", self.grid.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("paddle.bottom_gap", self.paddle.bottom_gap),
            ("grid.padding", self.grid.padding),
            ("grid.offset_x", self.grid.offset_x),
            ("grid.offset_y", self.grid.offset_y),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        match self.grid.checked_total() {
            Some(0) => return Err(SettingsError::Invalid("brick grid is empty".into())),
            None => {
                return Err(SettingsError::Invalid(format!(
                    "brick grid {} x {} is too large",
                    self.grid.rows, self.grid.columns
                )));
            }
            Some(_) => {}
        }
        if self.paddle.width > self.width {
            return Err(SettingsError::Invalid(format!(
                "paddle width {} exceeds surface width {}",
                self.paddle.width, self.width
            )));
        }
        if self.paddle.bottom_gap < self.paddle.height || self.paddle.bottom_gap > self.height {
            return Err(SettingsError::Invalid(format!(
                "paddle bottom gap {} must lie between paddle height and surface height",
                self.paddle.bottom_gap
            )));
        }
        if self.grid.extent_x() > self.width || self.grid.extent_y() > self.height {
            return Err(SettingsError::Invalid(format!(
                "brick grid ({} x {}) does not fit the {} x {} surface",
                self.grid.extent_x(),
                self.grid.extent_y(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}
