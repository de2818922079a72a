//! Brick Breaker - A classic canvas brick-breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, input, collisions, tick)
//! - `scheduler`: Per-frame driver that owns the game state
//! - `renderer`: Draw-list generation and render adapters
//! - `platform`: Host key mapping
//! - `settings`: Data-driven playfield and entity tuning

pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use scheduler::FrameScheduler;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Re-launch speed off the paddle, also the initial |dx| and |dy|
    pub const BALL_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the bottom of the playfield
    pub const PADDLE_BOTTOM_GAP: f32 = 20.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 9;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Frames averaged by the FPS counter
    pub const FPS_WINDOW: usize = 60;
}
