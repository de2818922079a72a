//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Stable iteration order (row-major brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{InputEvent, Key, KeyTransition, apply_input};
pub use state::{
    Axis, Ball, Brick, BrickGrid, GameEvent, GameState, Paddle, RefillReason,
};
pub use tick::tick;
