//! Per-frame simulation tick
//!
//! One call advances the game by exactly one display frame. The steps run in
//! a fixed order and each one sees the results of the previous ones.

use super::collision::{
    ball_below_floor, ball_hits_brick, ball_hits_end_wall, ball_hits_paddle, ball_hits_side_wall,
};
use super::state::{Axis, GameEvent, GameState, RefillReason};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    state.events.clear();
    state.time_ticks += 1;

    move_paddle(state);
    move_ball(state);
    resolve_wall_collisions(state);
    resolve_paddle_collision(state);
    resolve_brick_collisions(state);
    // The bottom wall already flipped dy above; the loss reset fires as well
    check_ball_lost(state);
}

/// Move the paddle by its velocity and keep it on the playfield
pub fn move_paddle(state: &mut GameState) {
    let max_x = state.paddle.max_x(state.width());
    let paddle = &mut state.paddle;
    paddle.pos.x += paddle.dx;

    if paddle.pos.x > max_x {
        paddle.pos.x = max_x;
    }
    if paddle.pos.x < 0.0 {
        paddle.pos.x = 0.0;
    }
}

pub fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}

/// Bounce off the four walls
pub fn resolve_wall_collisions(state: &mut GameState) {
    if ball_hits_side_wall(&state.ball, state.width()) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce { axis: Axis::X });
    }

    if ball_hits_end_wall(&state.ball, state.height()) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce { axis: Axis::Y });
    }
}

/// Send the ball back up at its nominal speed, whatever the incoming angle
pub fn resolve_paddle_collision(state: &mut GameState) {
    if ball_hits_paddle(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.speed;
        state.events.push(GameEvent::PaddleBounce);
    }
}

/// Break every visible brick the ball overlaps
///
/// Scans the whole grid; several bricks can break in one tick, each flipping
/// dy again. A refill takes effect immediately, so bricks later in the scan
/// can be hit again on the same tick.
pub fn resolve_brick_collisions(state: &mut GameState) {
    let total = state.bricks.total() as u64;

    for index in 0..state.bricks.total() {
        let Some(brick) = state.bricks.brick_mut(index) else {
            continue;
        };
        if !brick.visible || !ball_hits_brick(&state.ball, brick) {
            continue;
        }

        brick.visible = false;
        state.ball.vel.y = -state.ball.vel.y;
        state.score += 1;
        state.events.push(GameEvent::BrickHit {
            index,
            score: state.score,
        });

        if state.score % total == 0 {
            state.bricks.refill();
            state.events.push(GameEvent::GridRefilled {
                reason: RefillReason::Cleared,
            });
        }
    }
}

/// Ball below the playfield: restore the grid and zero the score
pub fn check_ball_lost(state: &mut GameState) {
    if ball_below_floor(&state.ball, state.height()) {
        state.events.push(GameEvent::BallLost {
            final_score: state.score,
        });
        state.bricks.refill();
        state.score = 0;
        state.events.push(GameEvent::GridRefilled {
            reason: RefillReason::BallLost,
        });
    }
}
