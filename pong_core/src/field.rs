use glam::Vec2;

use crate::components::{Ball, Paddle};
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test; boxes that only touch do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Paddle rectangle at its current position
pub fn paddle_aabb(paddle: &Paddle, config: &Config) -> Aabb {
    Aabb::from_center_size(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(config.paddle_width, config.paddle_height),
    )
}

/// Ball square at its current position
pub fn ball_aabb(ball: &Ball, config: &Config) -> Aabb {
    Aabb::from_center_size(ball.pos, Vec2::splat(config.ball_diameter))
}
