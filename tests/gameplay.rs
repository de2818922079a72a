//! End-to-end gameplay through the public API

use brick_breaker::renderer::{DrawCommand, RecordingRenderer, RenderAdapter};
use brick_breaker::sim::{GameEvent, GameState, InputEvent, Key, RefillReason, tick};
use brick_breaker::{FrameScheduler, Settings};
use glam::Vec2;

/// Renderer that checks invariants on every frame it is handed
#[derive(Default)]
struct InvariantRenderer {
    frames: u64,
    losses: u64,
    refills: u64,
}

impl RenderAdapter for InvariantRenderer {
    fn draw_frame(&mut self, state: &GameState) {
        self.frames += 1;

        let max_x = state.width() - state.paddle.width;
        assert!(state.paddle.pos.x >= 0.0 && state.paddle.pos.x <= max_x);
        assert!([-8.0, 0.0, 8.0].contains(&state.paddle.dx));

        for event in &state.events {
            match event {
                GameEvent::BallLost { .. } => {
                    self.losses += 1;
                    assert_eq!(state.score, 0);
                    assert!(state.bricks.all_visible());
                }
                GameEvent::GridRefilled {
                    reason: RefillReason::Cleared,
                } => self.refills += 1,
                GameEvent::PaddleBounce => {
                    assert_eq!(state.ball.vel.y.abs(), state.ball.speed)
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_long_session_keeps_invariants() {
    let mut game = FrameScheduler::new(&Settings::default(), InvariantRenderer::default());

    for frame in 0..5000u64 {
        match frame % 90 {
            0 => game.push_input(InputEvent::pressed(Key::Left)),
            30 => game.push_input(InputEvent::released(Key::Left)),
            45 => game.push_input(InputEvent::pressed(Key::Right)),
            75 => game.push_input(InputEvent::released(Key::Other)),
            80 => game.push_input(InputEvent::released(Key::Right)),
            _ => {}
        }
        game.on_frame(frame as f64 * 16.0);
    }

    let renderer = game.renderer();
    assert_eq!(renderer.frames, 5000);
    assert_eq!(game.state().time_ticks, 5000);
    println!(
        "{} losses, {} cleared grids, final score {}",
        renderer.losses,
        renderer.refills,
        game.state().score
    );
}

#[test]
fn test_ball_eventually_scores() {
    // Untouched paddle: the ball still climbs into the grid from the start
    let mut game = FrameScheduler::new(&Settings::default(), RecordingRenderer::new());
    let mut scored = false;
    for frame in 0..200 {
        game.on_frame(frame as f64 * 16.0);
        if game.state().score > 0 {
            scored = true;
            break;
        }
    }
    assert!(scored);
    assert!(game.renderer().last_frame.rect_count() < 46);
}

#[test]
fn test_clearing_the_grid_refills_it() {
    let mut state = GameState::new(&Settings::default());
    state.score = 44;
    let total = state.bricks.total();
    for brick in state.bricks.iter_mut().take(total - 1) {
        brick.visible = false;
    }

    // Last brick is (8, 4) at 685..755 x 180..200; arrive from below
    state.ball.pos = Vec2::new(720.0, 212.0);
    state.ball.vel = Vec2::new(0.0, -4.0);
    tick(&mut state);

    assert_eq!(state.score, 45);
    assert_eq!(state.bricks.visible_count(), 45);
    assert_eq!(state.ball.vel.y, 4.0);
}

#[test]
fn test_losing_resets_from_any_score() {
    for score in [0u64, 1, 44, 45, 1000] {
        let mut state = GameState::new(&Settings::default());
        state.score = score;
        state.bricks.iter_mut().for_each(|b| b.visible = false);
        state.ball.pos = Vec2::new(50.0, 595.0);

        tick(&mut state);

        assert_eq!(state.score, 0);
        assert!(state.bricks.all_visible());
    }
}

#[test]
fn test_custom_settings_layout() {
    let settings = Settings::from_json(
        r#"{
            "width": 480,
            "height": 320,
            "grid": { "rows": 5, "columns": 3, "offset_x": 40, "offset_y": 40 }
        }"#,
    )
    .unwrap();

    let mut game = FrameScheduler::new(&settings, RecordingRenderer::new());
    game.on_frame(0.0);

    let frame = &game.renderer().last_frame;
    assert_eq!(
        frame.commands[0],
        DrawCommand::Clear {
            width: 480.0,
            height: 320.0
        }
    );
    assert_eq!(frame.rect_count(), 1 + 15);
    assert_eq!(game.state().paddle.pos, Vec2::new(200.0, 300.0));
}
