//! Read-only world snapshots handed to move deciders.
//!
//! Named fields internally; the fixed-index float vector in [`index`] is the
//! export layout external tooling relies on.

use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;

/// Fixed index layout of the exported state vector
pub mod index {
    pub const PLAYER_ID: usize = 0;
    pub const BALL_X: usize = 1;
    pub const BALL_Y: usize = 2;
    pub const BALL_VX: usize = 3;
    pub const BALL_VY: usize = 4;
    pub const PADDLE_LEFT_Y: usize = 5;
    pub const PADDLE_RIGHT_Y: usize = 6;
    pub const LEN: usize = 7;
}

/// One frame's world state as seen by a single decider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Numeric id of the side the snapshot was captured for
    pub player_id: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    /// Horizontal distance the ball covers this frame, signed
    pub ball_vx: f32,
    /// Vertical distance the ball covers this frame, signed
    pub ball_vy: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
}

impl Snapshot {
    /// The side this snapshot was captured for
    pub fn side(&self) -> Side {
        if self.player_id < 0.5 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Paddle Y of the requesting side
    pub fn own_paddle_y(&self) -> f32 {
        match self.side() {
            Side::Left => self.paddle_left_y,
            Side::Right => self.paddle_right_y,
        }
    }

    /// Export as the fixed-index state vector
    pub fn to_array(&self) -> [f32; index::LEN] {
        let mut states = [0.0; index::LEN];
        states[index::PLAYER_ID] = self.player_id;
        states[index::BALL_X] = self.ball_x;
        states[index::BALL_Y] = self.ball_y;
        states[index::BALL_VX] = self.ball_vx;
        states[index::BALL_VY] = self.ball_vy;
        states[index::PADDLE_LEFT_Y] = self.paddle_left_y;
        states[index::PADDLE_RIGHT_Y] = self.paddle_right_y;
        states
    }

    /// Rebuild from the fixed-index state vector
    pub fn from_array(states: [f32; index::LEN]) -> Self {
        Self {
            player_id: states[index::PLAYER_ID],
            ball_x: states[index::BALL_X],
            ball_y: states[index::BALL_Y],
            ball_vx: states[index::BALL_VX],
            ball_vy: states[index::BALL_VY],
            paddle_left_y: states[index::PADDLE_LEFT_Y],
            paddle_right_y: states[index::PADDLE_RIGHT_Y],
        }
    }
}

/// Capture the world as `side` sees it this frame. `dt` fixes the frame's
/// relative ball velocity; a fresh snapshot is built per decider call.
pub fn capture(world: &World, side: Side, config: &Config, dt: f32) -> Snapshot {
    let mut snap = Snapshot {
        player_id: side.player_id() as f32,
        ball_x: 0.0,
        ball_y: 0.0,
        ball_vx: 0.0,
        ball_vy: 0.0,
        paddle_left_y: 0.0,
        paddle_right_y: 0.0,
    };

    let mut ball_query = world.query::<&Ball>();
    if let Some((_entity, ball)) = ball_query.iter().next() {
        snap.ball_x = ball.pos.x;
        snap.ball_y = ball.pos.y;
        snap.ball_vx = ball.x_dir * ball.rel_speed(config, dt);
        snap.ball_vy = ball.y_vel;
    }

    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => snap.paddle_left_y = paddle.y,
            Side::Right => snap.paddle_right_y = paddle.y,
        }
    }

    snap
}
