use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check if the ball left the field and score the point.
///
/// The left and right bound checks are independent and both run every frame.
/// A point re-serves the ball within the same frame.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(config, rng);
        }
        if ball.pos.x >= config.field_width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(config, rng);
        }
    }
}
