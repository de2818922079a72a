//! Rendering module
//!
//! The simulation never draws. Each frame the scheduler hands the state to a
//! [`RenderAdapter`]; adapters usually build a [`DrawList`] with
//! [`shapes::frame_commands`] and replay it on their surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{DrawCommand, DrawList, frame_commands};

use crate::sim::GameState;

/// Paints one frame from the current game state
pub trait RenderAdapter {
    fn draw_frame(&mut self, state: &GameState);
}

/// Render adapter that keeps the last frame's draw list in memory
///
/// Used by the headless native runner and by tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: u64,
    pub last_frame: DrawList,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderAdapter for RecordingRenderer {
    fn draw_frame(&mut self, state: &GameState) {
        self.frames += 1;
        self.last_frame = frame_commands(state);
    }
}
