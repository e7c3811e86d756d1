use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::decider::Intent;
use crate::resources::{Events, Time};

/// Apply one side's intent to its paddle.
///
/// The step is skipped outright when it would carry the paddle center past
/// the field limits; there is no post-move clamp, so the paddle parks at the
/// last reachable position inside `[half_height, field_height - half_height]`.
pub fn move_paddle(world: &mut World, side: Side, intent: Intent, time: &Time, config: &Config) {
    for (_entity, (paddle, paddle_intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
    {
        if paddle.side != side {
            continue;
        }
        paddle_intent.intent = intent;

        let next = paddle.y + intent.dir() * config.paddle_speed * time.dt;
        let half_height = config.paddle_height / 2.0;
        if next >= half_height && next <= config.field_height - half_height {
            paddle.y = next;
        }
    }
}

/// Advance the ball and bounce it off the top/bottom walls.
///
/// Horizontal motion scales with dt and rally length; vertical motion is the
/// per-frame `y_vel`. A wall hit clamps the ball back into the field and
/// mirrors the vertical speed.
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rel_speed = ball.rel_speed(config, time.dt);
        ball.pos.x += ball.x_dir * rel_speed;
        ball.pos.y += ball.y_vel;

        let half = config.ball_diameter / 2.0;
        if ball.pos.y <= half || ball.pos.y >= config.field_height - half {
            ball.pos.y = ball.pos.y.clamp(0.0, config.field_height);
            ball.y_vel = -ball.y_vel;
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::GameRng;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Time, Events) {
        let world = World::new();
        let config = Config::new();
        let time = Time::new(1.0 / 60.0, 0.0);
        let events = Events::new();
        (world, config, time, events)
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        let mut query = world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let start = config.paddle_spawn_y();
        let step = config.paddle_speed * time.dt;

        move_paddle(&mut world, Side::Left, Intent::Up, &time, &config);
        assert_eq!(paddle_y(&world, Side::Left), start - step);

        move_paddle(&mut world, Side::Left, Intent::Down, &time, &config);
        assert_eq!(paddle_y(&world, Side::Left), start);

        move_paddle(&mut world, Side::Left, Intent::Hold, &time, &config);
        assert_eq!(paddle_y(&world, Side::Left), start);
    }

    #[test]
    fn test_paddle_skips_step_past_top_limit() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let half_height = config.paddle_height / 2.0;

        // Park the paddle just above the limit, closer than one step
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = half_height + 1.0;
        }

        move_paddle(&mut world, Side::Left, Intent::Up, &time, &config);
        assert_eq!(
            paddle_y(&world, Side::Left),
            half_height + 1.0,
            "step crossing the limit is skipped, not clamped"
        );
    }

    #[test]
    fn test_paddle_skips_step_past_bottom_limit() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        let limit = config.field_height - config.paddle_height / 2.0;

        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = limit - 1.0;
        }

        move_paddle(&mut world, Side::Right, Intent::Down, &time, &config);
        assert_eq!(paddle_y(&world, Side::Right), limit - 1.0);
    }

    #[test]
    fn test_paddle_can_land_exactly_on_limit() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let half_height = config.paddle_height / 2.0;
        let step = config.paddle_speed * time.dt;

        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = half_height + step;
        }

        move_paddle(&mut world, Side::Left, Intent::Up, &time, &config);
        assert_eq!(paddle_y(&world, Side::Left), half_height);

        // And a further step is refused
        move_paddle(&mut world, Side::Left, Intent::Up, &time, &config);
        assert_eq!(paddle_y(&world, Side::Left), half_height);
    }

    #[test]
    fn test_move_paddle_only_touches_requested_side() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        move_paddle(&mut world, Side::Left, Intent::Up, &time, &config);

        assert!(paddle_y(&world, Side::Left) < config.paddle_spawn_y());
        assert_eq!(paddle_y(&world, Side::Right), config.paddle_spawn_y());
    }

    #[test]
    fn test_move_paddle_records_intent() {
        let (mut world, config, time, _events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        move_paddle(&mut world, Side::Left, Intent::Down, &time, &config);

        for (_e, intent) in world.query_mut::<&mut PaddleIntent>() {
            assert_eq!(intent.intent, Intent::Down);
        }
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let (mut world, config, time, mut events) = setup_world();
        let mut rng = GameRng::new(9);
        let entity = create_ball(&mut world, &config, &mut rng);
        {
            let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(320.0, 240.0);
            ball.x_dir = 1.0;
            ball.y_vel = 4.0;
            ball.collisions = 0;
        }

        move_ball(&mut world, &time, &config, &mut events);

        let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, 320.0 + config.ball_speed * time.dt);
        assert_eq!(ball.pos.y, 244.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_rally_length_speeds_up_advance() {
        let (mut world, config, time, mut events) = setup_world();
        let mut rng = GameRng::new(9);
        let entity = create_ball(&mut world, &config, &mut rng);
        {
            let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(320.0, 240.0);
            ball.x_dir = -1.0;
            ball.y_vel = 0.0;
            ball.collisions = 20;
        }

        move_ball(&mut world, &time, &config, &mut events);

        let expected = (config.ball_speed + 20.0 * config.difficulty_multiplier) * time.dt;
        let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, 320.0 - expected);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, time, mut events) = setup_world();
        let mut rng = GameRng::new(9);
        let entity = create_ball(&mut world, &config, &mut rng);
        {
            let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(320.0, 10.0);
            ball.x_dir = 1.0;
            ball.y_vel = -6.0;
            ball.collisions = 0;
        }

        move_ball(&mut world, &time, &config, &mut events);

        let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
        assert_eq!(ball.y_vel, 6.0, "vertical speed mirrors on wall hit");
        assert!(ball.pos.y >= 0.0 && ball.pos.y <= config.field_height);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, time, mut events) = setup_world();
        let mut rng = GameRng::new(9);
        let entity = create_ball(&mut world, &config, &mut rng);
        {
            let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(320.0, config.field_height - 10.0);
            ball.x_dir = 1.0;
            ball.y_vel = 6.0;
            ball.collisions = 0;
        }

        move_ball(&mut world, &time, &config, &mut events);

        let ball = world.query_one_mut::<&mut Ball>(entity).unwrap();
        assert_eq!(ball.y_vel, -6.0);
        assert!(ball.pos.y >= 0.0 && ball.pos.y <= config.field_height);
        assert!(events.ball_hit_wall);
    }
}
