pub mod components;
pub mod config;
pub mod decider;
pub mod field;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use decider::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use snapshot::{capture, Snapshot};

use glam::Vec2;
use hecs::World;

/// Spawn a paddle with a cleared intent for `side`
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Spawn the ball, already served
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    world.spawn((Ball::new(config, rng),))
}

/// One running match: two decider-driven paddles and a ball, stepped once per
/// rendered frame by an external driver.
///
/// The match exclusively owns its entities; outside callers read state through
/// the accessors and mutate it only via [`Match::update`] and [`Match::reset`].
pub struct Match {
    world: World,
    config: Config,
    time: Time,
    score: Score,
    events: Events,
    rng: GameRng,
    deciders: [Box<dyn MoveDecider>; 2],
}

impl Match {
    pub fn new(
        config: Config,
        seed: u64,
        left: Box<dyn MoveDecider>,
        right: Box<dyn MoveDecider>,
    ) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            time: Time::new(0.0, 0.0),
            score: Score::new(),
            events: Events::new(),
            rng,
            deciders: [left, right],
        }
    }

    /// Return paddles, score, and ball to their initial state
    pub fn reset(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.reset(&self.config);
        }
        for (_entity, intent) in self.world.query_mut::<&mut PaddleIntent>() {
            *intent = PaddleIntent::new();
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
        self.score.reset();
        self.events.clear();
    }

    /// Advance the simulation by one frame.
    ///
    /// Paddles decide and move first, left then right, each against a fresh
    /// snapshot - so the right side sees the left paddle's movement from this
    /// same frame. The ball then advances, deflects, and scores. One call is
    /// exactly one frame; there is no internal sub-stepping.
    pub fn update(&mut self, dt: f32) {
        // The physics has no meaning for negative or non-finite elapsed time
        let dt = if dt.is_finite() && dt >= 0.0 { dt } else { 0.0 };
        self.time = Time::new(dt, self.time.now + dt);
        self.events.clear();

        for side in Side::BOTH {
            let snap = snapshot::capture(&self.world, side, &self.config, dt);
            let intent = self.deciders[side.index()].decide(&snap);
            systems::move_paddle(&mut self.world, side, intent, &self.time, &self.config);
        }

        systems::move_ball(&mut self.world, &self.time, &self.config, &mut self.events);
        systems::check_collisions(&mut self.world, &self.time, &self.config, &mut self.events);
        systems::check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    /// Paddle rectangle for the render layer
    pub fn paddle_rect(&self, side: Side) -> Aabb {
        let mut paddle_query = self.world.query::<&Paddle>();
        paddle_query
            .iter()
            .find(|(_entity, paddle)| paddle.side == side)
            .map(|(_entity, paddle)| field::paddle_aabb(paddle, &self.config))
            .unwrap_or_else(|| field::paddle_aabb(&Paddle::new(side, &self.config), &self.config))
    }

    /// Ball square for the render layer
    pub fn ball_rect(&self) -> Aabb {
        let mut ball_query = self.world.query::<&Ball>();
        let center = ball_query
            .iter()
            .next()
            .map(|(_entity, ball)| ball.pos)
            .unwrap_or_else(|| self.config.ball_spawn());
        Aabb::from_center_size(center, Vec2::splat(self.config.ball_diameter))
    }

    /// World snapshot as a decider would see it, for external tooling.
    /// Velocities reflect the most recent frame's delta time.
    pub fn snapshot(&self, side: Side) -> Snapshot {
        snapshot::capture(&self.world, side, &self.config, self.time.dt)
    }
}
