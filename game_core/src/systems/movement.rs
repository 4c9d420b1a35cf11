use hecs::{Entity, World};

use crate::{Advance, Ball, Body, Events, Paddle, Side, Stats};

/// Advance both paddles, left first
pub fn move_paddles(world: &mut World) {
    let mut paddles: Vec<(Entity, Side)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(entity, paddle)| (entity, paddle.side))
        .collect();
    // Deterministic order regardless of spawn order
    paddles.sort_by_key(|(_, side)| *side != Side::Left);

    for (entity, side) in paddles {
        if let Ok(body) = world.query_one_mut::<&mut Body>(entity) {
            let report = body.advance();
            if report.y_rejected {
                log::trace!("{side:?} paddle held at y={}", body.center().y);
            }
        }
    }
}

/// Advance the ball and record wall reflections and out-of-field pushes
pub fn move_ball(world: &mut World, events: &mut Events, stats: &mut Stats) {
    for (_entity, (body, _ball)) in world.query_mut::<(&mut Body, &Ball)>() {
        let report: Advance = body.advance();

        if report.reflected {
            events.ball_hit_wall = true;
            stats.wall_bounces += 1;
            log::debug!(
                "Ball reflected at y={}, vy now {}",
                body.center().y,
                body.velocity().y
            );
        }

        if report.x_rejected {
            let side = if body.velocity().x < 0 {
                Side::Left
            } else {
                Side::Right
            };
            events.ball_out = Some(side);
            log::debug!("Ball held past the {side:?} paddle at x={}", body.center().x);
        }

        log::trace!("Ball at {:?} moving {:?}", body.center(), body.velocity());
    }
}
