//! Collision tests for the ball against walls, paddle and bricks
//!
//! Everything is an axis-aligned box. The ball is treated as the square that
//! bounds its circle. Comparisons are strict, so touching is not a hit.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// True if this box's horizontal span lies strictly inside `outer`'s
    #[inline]
    pub fn within_x(&self, outer: &Aabb) -> bool {
        self.min.x > outer.min.x && self.max.x < outer.max.x
    }

    /// True if the vertical spans overlap
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// Ball's leading edge is past the left or right wall
pub fn ball_hits_side_wall(ball: &Ball, surface_width: f32) -> bool {
    let b = ball.bounds();
    b.max.x > surface_width || b.min.x < 0.0
}

/// Ball's leading edge is past the top or bottom wall
pub fn ball_hits_end_wall(ball: &Ball, surface_height: f32) -> bool {
    let b = ball.bounds();
    b.max.y > surface_height || b.min.y < 0.0
}

/// Ball is horizontally within the paddle and its bottom edge has passed the
/// paddle's top edge
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let b = ball.bounds();
    let p = paddle.bounds();
    b.within_x(&p) && b.max.y > p.min.y
}

/// Ball is horizontally within the brick and overlaps it vertically
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    let b = ball.bounds();
    b.within_x(&brick.bounds()) && b.overlaps_y(&brick.bounds())
}

/// Ball's bottom edge has passed the bottom of the playfield
pub fn ball_below_floor(ball: &Ball, surface_height: f32) -> bool {
    ball.bounds().max.y > surface_height
}
