use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::field::{ball_aabb, paddle_aabb};
use crate::params::Params;
use crate::resources::{Events, Time};

/// Check the ball against both paddles, left first.
///
/// Each check runs against the ball's state at that point, so a ball
/// overlapping both paddles in one frame deflects twice. The strike offset is
/// normalized by the paddle's absolute Y, which makes deflection strength
/// depend on where on the screen the paddle sits.
pub fn check_collisions(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = {
        let mut paddle_query = world.query::<&Paddle>();
        paddle_query.iter().map(|(_e, paddle)| *paddle).collect()
    };
    paddles.sort_by_key(|paddle| paddle.side.index());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !ball_aabb(ball, config).intersects(&paddle_aabb(paddle, config)) {
                continue;
            }

            let shift = -(paddle.y - ball.pos.y) / paddle.y;
            let new_x = match paddle.side {
                Side::Left => paddle.x + config.paddle_width + Params::DEFLECT_PUSH,
                Side::Right => paddle.x - config.paddle_width / 2.0 - Params::DEFLECT_PUSH,
            };
            ball.deflect(shift, new_x, time.dt, config);
            events.ball_hit_paddle = true;
        }
    }
}
