//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Radius
    pub size: f32,
    /// Nominal speed restored on every paddle bounce
    pub speed: f32,
}

impl Ball {
    /// Ball centered on the playfield, heading up and to the right
    pub fn new(settings: &Settings) -> Self {
        let speed = settings.ball.speed;
        Self {
            pos: Vec2::new(settings.width / 2.0, settings.height / 2.0),
            vel: Vec2::new(speed, -speed),
            size: settings.ball.size,
            speed,
        }
    }

    /// Bounding box of the ball
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.size))
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity, one of -speed, 0, +speed
    pub dx: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom edge, at rest
    pub fn new(settings: &Settings) -> Self {
        let p = &settings.paddle;
        Self {
            pos: Vec2::new(
                settings.width / 2.0 - p.width / 2.0,
                settings.height - p.bottom_gap,
            ),
            width: p.width,
            height: p.height,
            dx: 0.0,
            speed: p.speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(self.pos, Vec2::new(self.width, self.height))
    }

    /// Largest x the paddle may take on a surface of the given width
    pub fn max_x(&self, surface_width: f32) -> f32 {
        surface_width - self.width
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, fixed at creation
    pub pos: Vec2,
    pub size: Vec2,
    pub visible: bool,
}

impl Brick {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(self.pos, self.size)
    }
}

/// The brick grid, stored row by row
///
/// A "row" runs along the horizontal axis: brick `(row, column)` sits at
/// `x = row * (w + padding) + offset_x`, `y = column * (h + padding) + offset_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a full, visible grid
    pub fn new(settings: &Settings) -> Self {
        let g = &settings.grid;
        let size = Vec2::new(g.brick_width, g.brick_height);
        let mut bricks = Vec::with_capacity(g.total());
        for row in 0..g.rows {
            for column in 0..g.columns {
                let x = row as f32 * (g.brick_width + g.padding) + g.offset_x;
                let y = column as f32 * (g.brick_height + g.padding) + g.offset_y;
                bricks.push(Brick {
                    pos: Vec2::new(x, y),
                    size,
                    visible: true,
                });
            }
        }
        Self {
            rows: g.rows,
            columns: g.columns,
            bricks,
        }
    }

    /// Number of bricks in the full grid
    pub fn total(&self) -> usize {
        self.bricks.len()
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn all_visible(&self) -> bool {
        self.bricks.iter().all(|b| b.visible)
    }

    /// Make every brick visible again
    pub fn refill(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + column)
    }

    /// Brick by position in row-major order
    pub fn brick_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.bricks.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }
}

/// Axis of a wall bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Why the grid was refilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefillReason {
    /// Score reached a multiple of the brick count
    Cleared,
    /// Ball passed below the playfield
    BallLost,
}

/// Something that happened during the last tick
///
/// Observation only; never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { axis: Axis },
    PaddleBounce,
    BrickHit { index: usize, score: u64 },
    GridRefilled { reason: RefillReason },
    BallLost { final_score: u64 },
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield and tuning this session was built from
    pub settings: Settings,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            ball: Ball::new(settings),
            paddle: Paddle::new(settings),
            bricks: BrickGrid::new(settings),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Start over from the initial layout. Does not run the refill check.
    pub fn restart(&mut self) {
        *self = Self::new(&self.settings);
    }

    pub fn width(&self) -> f32 {
        self.settings.width
    }

    pub fn height(&self) -> f32 {
        self.settings.height
    }
}
