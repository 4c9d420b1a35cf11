pub mod collision;
pub mod input;
pub mod movement;

pub use collision::*;
pub use input::*;
pub use movement::*;
