use std::time::Duration;

use glam::IVec2;
use rand::Rng;

use crate::{Params, Side};

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Both components drawn independently from `-speed..=speed`.
    /// Zero is a valid draw, so straight and stationary serves happen.
    pub fn serve_velocity(&mut self, speed: i32) -> IVec2 {
        IVec2::new(
            self.0.gen_range(-speed..=speed),
            self.0.gen_range(-speed..=speed),
        )
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    /// Ball pushed against the outer X boundary behind this side's paddle
    pub ball_out: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = None;
        self.ball_hit_wall = false;
        self.ball_out = None;
    }

    /// Fold a later frame's events into this one; later values win.
    pub fn merge(&mut self, later: &Events) {
        self.ball_hit_paddle = later.ball_hit_paddle.or(self.ball_hit_paddle);
        self.ball_hit_wall |= later.ball_hit_wall;
        self.ball_out = later.ball_out.or(self.ball_out);
    }
}

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub frames: u64,
    /// Every horizontal reversal, including repeated flips while overlapping
    pub paddle_bounces: u64,
    pub wall_bounces: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Turns host wall-clock time into whole fixed-length frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    accumulator: Duration,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add elapsed time and return how many frames are due.
    ///
    /// At most `Params::MAX_CATCH_UP_FRAMES` are returned per call; the
    /// backlog beyond that is dropped.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulator += elapsed;

        let mut frames = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            frames += 1;
            if frames == Params::MAX_CATCH_UP_FRAMES {
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        frames
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_velocity_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let vel = rng.serve_velocity(5);
            assert!((-5..=5).contains(&vel.x));
            assert!((-5..=5).contains(&vel.y));
        }
    }

    #[test]
    fn test_serve_velocity_covers_extremes() {
        let mut rng = GameRng::new(99);
        let draws: Vec<i32> = (0..2000).map(|_| rng.serve_velocity(5).x).collect();
        assert!(draws.contains(&-5), "Lower bound is inclusive");
        assert!(draws.contains(&5), "Upper bound is inclusive");
        assert!(draws.contains(&0), "Zero is a valid draw");
    }

    #[test]
    fn test_serve_velocity_is_deterministic_per_seed() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.serve_velocity(5), b.serve_velocity(5));
        }
    }

    #[test]
    fn test_entropy_serve_in_range() {
        let mut rng = GameRng::from_entropy();
        for _ in 0..100 {
            let vel = rng.serve_velocity(5);
            assert!((-5..=5).contains(&vel.x));
            assert!((-5..=5).contains(&vel.y));
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            ball_hit_paddle: Some(Side::Left),
            ball_hit_wall: true,
            ball_out: Some(Side::Right),
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_events_merge() {
        let mut events = Events {
            ball_hit_paddle: Some(Side::Left),
            ..Events::default()
        };
        events.merge(&Events {
            ball_hit_wall: true,
            ..Events::default()
        });
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_frame_clock_accumulates() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        assert_eq!(clock.tick(Duration::from_millis(30)), 0);
        assert_eq!(clock.tick(Duration::from_millis(30)), 1);
        assert_eq!(clock.tick(Duration::from_millis(40)), 1);
        assert_eq!(clock.tick(Duration::from_millis(100)), 2);
    }

    #[test]
    fn test_frame_clock_caps_catch_up() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        assert_eq!(
            clock.tick(Duration::from_secs(10)),
            Params::MAX_CATCH_UP_FRAMES
        );
        // Backlog was dropped
        assert_eq!(clock.tick(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_frame_clock_reset_drops_partial_frame() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        assert_eq!(clock.period(), Duration::from_millis(50));
        assert_eq!(clock.tick(Duration::from_millis(40)), 0);
        clock.reset();
        assert_eq!(clock.tick(Duration::from_millis(20)), 0);
        assert_eq!(clock.tick(Duration::from_millis(30)), 1);
    }

    #[test]
    fn test_frame_clock_zero_period() {
        let mut clock = FrameClock::new(Duration::ZERO);
        assert_eq!(clock.tick(Duration::from_secs(1)), 0);
    }
}
