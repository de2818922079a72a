//! Frame scheduler
//!
//! Owns the game state and the render adapter. The host calls
//! [`FrameScheduler::push_input`] from its key handlers and
//! [`FrameScheduler::on_frame`] from its animation callback; scheduling the
//! next callback stays with the host.

use std::collections::VecDeque;

use crate::consts::FPS_WINDOW;
use crate::renderer::RenderAdapter;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, apply_input, tick};

pub struct FrameScheduler<R: RenderAdapter> {
    state: GameState,
    renderer: R,
    /// Key transitions received since the last frame, oldest first
    pending: VecDeque<InputEvent>,
    frames: u64,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl<R: RenderAdapter> FrameScheduler<R> {
    pub fn new(settings: &Settings, renderer: R) -> Self {
        Self {
            state: GameState::new(settings),
            renderer,
            pending: VecDeque::new(),
            frames: 0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Queue a key transition for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Run one frame: apply queued input, tick once, then render
    ///
    /// `time_ms` is the host's frame timestamp, used only for the FPS counter.
    pub fn on_frame(&mut self, time_ms: f64) {
        while let Some(event) = self.pending.pop_front() {
            apply_input(&mut self.state.paddle, event);
        }

        tick(&mut self.state);
        self.frames += 1;
        log_events(&self.state.events);

        self.renderer.draw_frame(&self.state);
        self.track_fps(time_ms);
    }

    /// Throw away the current session and start a fresh one
    pub fn restart(&mut self) {
        self.state.restart();
        self.pending.clear();
        log::info!("Game restarted after {} frames", self.frames);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Frames run since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot we just advanced to holds the oldest sample, FPS_WINDOW - 1
        // frame intervals ago
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::WallBounce { axis } => log::trace!("Wall bounce on {:?}", axis),
            GameEvent::PaddleBounce => log::trace!("Paddle bounce"),
            GameEvent::BrickHit { index, score } => {
                log::debug!("Brick {} hit, score {}", index, score)
            }
            GameEvent::GridRefilled { reason } => log::debug!("Grid refilled ({:?})", reason),
            GameEvent::BallLost { final_score } => {
                log::info!("Ball lost with score {}", final_score)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;
    use crate::sim::Key;

    fn scheduler() -> FrameScheduler<RecordingRenderer> {
        FrameScheduler::new(&Settings::default(), RecordingRenderer::new())
    }

    #[test]
    fn test_frame_ticks_then_renders() {
        let mut s = scheduler();
        s.on_frame(16.0);

        assert_eq!(s.frames(), 1);
        assert_eq!(s.state().time_ticks, 1);
        assert_eq!(s.renderer().frames, 1);
        assert_eq!(s.renderer().last_frame.text(), Some("Score: 0"));
    }

    #[test]
    fn test_input_applied_before_tick() {
        let mut s = scheduler();
        let start = s.state().paddle.pos.x;

        s.push_input(InputEvent::pressed(Key::Right));
        assert_eq!(s.pending_inputs(), 1);
        s.on_frame(16.0);

        assert_eq!(s.pending_inputs(), 0);
        assert_eq!(s.state().paddle.pos.x, start + 8.0);
    }

    #[test]
    fn test_inputs_applied_in_order() {
        let mut s = scheduler();
        let start = s.state().paddle.pos.x;

        s.push_input(InputEvent::pressed(Key::Left));
        s.push_input(InputEvent::released(Key::Left));
        s.on_frame(16.0);

        assert_eq!(s.state().paddle.dx, 0.0);
        assert_eq!(s.state().paddle.pos.x, start);
    }

    #[test]
    fn test_restart_drops_pending_input() {
        let mut s = scheduler();
        for i in 0..10 {
            s.on_frame(i as f64 * 16.0);
        }
        s.push_input(InputEvent::pressed(Key::Left));

        s.restart();

        assert_eq!(s.pending_inputs(), 0);
        assert_eq!(s.state().time_ticks, 0);
        assert_eq!(s.frames(), 10);
    }

    #[test]
    fn test_fps_counter() {
        let mut s = scheduler();
        // 60 Hz: one frame every 16.666 ms, starting after t = 0
        for i in 1..=(FPS_WINDOW as u64 * 2) {
            s.on_frame(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(s.fps(), 60);
    }
}
