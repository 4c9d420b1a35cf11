use hecs::World;

use crate::{Body, Direction, Paddle, Side};

/// Set the vertical velocity of the paddle on `side`. Horizontal velocity is left alone.
pub fn apply_paddle_direction(world: &mut World, side: Side, direction: Direction, speed: i32) {
    for (_entity, (body, paddle)) in world.query_mut::<(&mut Body, &Paddle)>() {
        if paddle.side == side {
            body.set_velocity(None, Some(direction.velocity(speed)));
        }
    }
}
