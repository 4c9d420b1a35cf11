pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use glam::IVec2;
use hecs::World;

/// Helper to create a paddle entity at its starting spot for `side`
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
) -> Result<hecs::Entity, CoreError> {
    let body = Body::new(
        IVec2::new(config.paddle_x(side), config.center_y()),
        IVec2::new(config.paddle_width, config.paddle_height),
        config.field_boundary()?,
        Motion::Paddle,
    )?;
    Ok(world.spawn((body, Paddle { side })))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    center: IVec2,
    velocity: IVec2,
) -> Result<hecs::Entity, CoreError> {
    for speed in [velocity.x, velocity.y] {
        if !(-Params::MAX_SPEED..=Params::MAX_SPEED).contains(&speed) {
            return Err(CoreError::InvalidSpeed {
                name: "ball velocity",
                speed,
            });
        }
    }
    let size = IVec2::splat(config.ball_diameter);
    let mut body = Body::new(center, size, config.ball_boundary()?, Motion::Ball)?;
    body.set_velocity(Some(velocity.x), Some(velocity.y));
    Ok(world.spawn((body, Ball)))
}
