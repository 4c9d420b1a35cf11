use hecs::World;

use crate::{Ball, Body, Events, Paddle, Rect, Side, Stats};

/// Reverse the ball's horizontal velocity if it overlaps either paddle.
///
/// The ball is not pushed out of the paddle and there is no cooldown, so a
/// ball still overlapping on the next frame is reversed again. At most one
/// reversal happens per call. Returns whether the ball was reversed.
pub fn check_collisions(world: &mut World, events: &mut Events, stats: &mut Stats) -> bool {
    let paddles: Vec<(Side, Rect)> = world
        .query::<(&Body, &Paddle)>()
        .iter()
        .map(|(_e, (body, paddle))| (paddle.side, body.rect()))
        .collect();

    let mut reversed = false;
    for (_entity, (ball, _)) in world.query_mut::<(&mut Body, &Ball)>() {
        let ball_rect = ball.rect();
        let Some(side) = paddles
            .iter()
            .find(|(_, paddle_rect)| paddle_rect.intersects(&ball_rect))
            .map(|(side, _)| *side)
        else {
            continue;
        };

        ball.reverse_x();
        reversed = true;
        events.ball_hit_paddle = Some(side);
        stats.paddle_bounces += 1;
        log::debug!(
            "Ball hit {side:?} paddle at {:?}, vx now {}",
            ball.center(),
            ball.velocity().x
        );
    }
    reversed
}
