use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Immutable simulation configuration. Entities and systems take a reference
/// to this instead of reading process-wide globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_diameter: f32,
    pub ball_speed: f32,
    pub difficulty_multiplier: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_diameter: Params::BALL_DIAMETER,
            ball_speed: Params::BALL_SPEED,
            difficulty_multiplier: Params::DIFFICULTY_MULTIPLIER,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resting X position for a paddle, a fixed offset in from its edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        let offset = Params::PADDLE_EDGE_OFFSET * self.paddle_width / 2.0;
        match side {
            Side::Left => offset,
            Side::Right => self.field_width - offset,
        }
    }

    /// Paddles start vertically centered
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// The ball serves from the field center
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
