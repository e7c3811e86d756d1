use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::decider::Intent;
use crate::params::Params;
use crate::resources::GameRng;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in update order
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Numeric identity: 0 = left, 1 = right
    pub fn player_id(self) -> u8 {
        self.index() as u8
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // fixed per side, re-derived on reset
    pub y: f32, // vertical center
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
        }
    }

    /// Return to the side's rest position
    pub fn reset(&mut self, config: &Config) {
        self.x = config.paddle_x(self.side);
        self.y = config.paddle_spawn_y();
    }
}

/// Last movement intent applied to a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub intent: Intent,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Horizontal direction sign, -1.0 or +1.0
    pub x_dir: f32,
    /// Vertical speed, applied once per frame
    pub y_vel: f32,
    /// Paddle hits in the current rally
    pub collisions: u32,
}

impl Ball {
    /// Create the ball already served
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            x_dir: 1.0,
            y_vel: 0.0,
            collisions: 0,
        };
        ball.reset(config, rng);
        ball
    }

    /// Distance covered this frame horizontally, grown by rally length
    pub fn rel_speed(&self, config: &Config, dt: f32) -> f32 {
        (config.ball_speed + self.collisions as f32 * config.difficulty_multiplier) * dt
    }

    /// Re-center and serve in a random direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.collisions = 0;
        self.pos = config.ball_spawn();
        self.x_dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.y_vel = rng
            .0
            .gen_range(Params::SERVE_Y_VEL_MIN..Params::SERVE_Y_VEL_MAX) as f32;
    }

    /// Bounce off a paddle: count the hit, reposition clear of the paddle,
    /// flip direction, and shift the vertical speed by where the paddle was
    /// struck. The hit is counted first so the new rally length feeds the
    /// shift range and its clamp.
    pub fn deflect(&mut self, shift: f32, new_x: f32, dt: f32, config: &Config) {
        self.collisions += 1;
        let rel_speed = self.rel_speed(config, dt);
        let shift_range = Params::SHIFT_RANGE_FACTOR * rel_speed;
        let max_shift = Params::MAX_SHIFT_FACTOR * rel_speed;
        self.pos.x = new_x;
        self.x_dir = -self.x_dir;
        self.y_vel = (self.y_vel + shift * shift_range).clamp(-max_shift, max_shift);
    }
}
