use std::time::Duration;

use glam::IVec2;
use hecs::{Entity, World};

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Body, Config, CoreError, Direction, Events, FrameClock, GameRng,
    Side, Stats, Surface,
};

/// One play session: two paddles and a ball on a fixed field.
///
/// All calls are expected on one thread; the host serializes frame advance,
/// input and render.
pub struct Session {
    world: World,
    config: Config,
    events: Events,
    stats: Stats,
    clock: FrameClock,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Session {
    /// Place paddles and ball for `config`, serving the ball with a random velocity
    pub fn new(config: Config, rng: &mut GameRng) -> Result<Self, CoreError> {
        config.validate()?;
        let velocity = rng.serve_velocity(config.ball_speed);
        let center = IVec2::new(config.field_width / 2, config.center_y());
        Self::with_ball(config, center, velocity)
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, CoreError> {
        Self::new(config, &mut GameRng::new(seed))
    }

    /// Deterministic serve: the ball starts at `center` moving with `velocity`
    pub fn with_ball(config: Config, center: IVec2, velocity: IVec2) -> Result<Self, CoreError> {
        config.validate()?;
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, Side::Left)?;
        let right = create_paddle(&mut world, &config, Side::Right)?;
        let ball = create_ball(&mut world, &config, center, velocity)?;

        log::info!(
            "Session started on {}x{} field, ball at {:?} moving {:?}",
            config.field_width,
            config.field_height,
            center,
            velocity
        );

        Ok(Self {
            world,
            clock: FrameClock::new(config.frame_period()),
            config,
            events: Events::new(),
            stats: Stats::new(),
            left,
            right,
            ball,
        })
    }

    pub fn set_paddle_velocity(&mut self, side: Side, direction: Direction) {
        apply_paddle_direction(&mut self.world, side, direction, self.config.paddle_speed);
    }

    /// Left paddle, right paddle, ball, then collisions against the new positions
    pub fn advance_frame(&mut self) -> Events {
        self.events.clear();

        move_paddles(&mut self.world);
        move_ball(&mut self.world, &mut self.events, &mut self.stats);
        check_collisions(&mut self.world, &mut self.events, &mut self.stats);

        self.stats.frames += 1;
        self.events
    }

    /// Reverse the ball if it overlaps a paddle; returns whether it did
    pub fn collision_check(&mut self) -> bool {
        check_collisions(&mut self.world, &mut self.events, &mut self.stats)
    }

    /// Run the frames that fit in `elapsed` host time and merge their events
    pub fn update(&mut self, elapsed: Duration) -> Events {
        let frames = self.clock.tick(elapsed);
        let mut merged = Events::new();
        for _ in 0..frames {
            let events = self.advance_frame();
            merged.merge(&events);
        }
        merged
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.left_paddle().rect());
        surface.fill_rect(self.right_paddle().rect());
        surface.fill_ellipse(self.ball().rect());
    }

    pub fn paddle(&self, side: Side) -> Body {
        match side {
            Side::Left => self.body(self.left),
            Side::Right => self.body(self.right),
        }
    }

    pub fn left_paddle(&self) -> Body {
        self.body(self.left)
    }

    pub fn right_paddle(&self) -> Body {
        self.body(self.right)
    }

    pub fn ball(&self) -> Body {
        self.body(self.ball)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events of the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    fn body(&self, entity: Entity) -> Body {
        *self
            .world
            .get::<&Body>(entity)
            .expect("session entities are never despawned")
    }
}
