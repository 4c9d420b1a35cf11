use glam::IVec2;

use crate::{Boundary, CoreError, Params, Rect};

/// Which edge of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Requested paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// Vertical velocity for this direction; screen Y grows downward
    pub fn velocity(self, speed: i32) -> i32 {
        match self {
            Direction::Up => -speed,
            Direction::Down => speed,
            Direction::None => 0,
        }
    }
}

/// How a body responds when a move would leave its boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Both axes use clamp-by-rejection
    Paddle,
    /// X uses clamp-by-rejection, Y reflects off the boundary
    Ball,
}

/// Paddle component - marks a body as one player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
}

/// Ball component - marks the body as the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ball;

/// What happened to a body during one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance {
    pub x_rejected: bool,
    pub y_rejected: bool,
    pub reflected: bool,
}

/// A moving rectangle whose center is confined to a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    center: IVec2,
    size: IVec2,
    velocity: IVec2,
    boundary: Boundary,
    motion: Motion,
}

impl Body {
    /// Fails if the size is out of range or the center starts outside `boundary`.
    pub fn new(
        center: IVec2,
        size: IVec2,
        boundary: Boundary,
        motion: Motion,
    ) -> Result<Self, CoreError> {
        let size_range = 0..=Params::MAX_SIZE;
        if !size_range.contains(&size.x) || !size_range.contains(&size.y) {
            return Err(CoreError::InvalidSize(size));
        }
        if !boundary.contains(center) {
            return Err(CoreError::CenterOutsideBoundary(center));
        }
        Ok(Self {
            center,
            size,
            velocity: IVec2::ZERO,
            boundary,
            motion,
        })
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Returns `false` and leaves the body untouched when `x` is out of bounds.
    pub fn set_center_x(&mut self, x: i32) -> bool {
        if !self.boundary.contains_x(x) {
            return false;
        }
        self.center.x = x;
        true
    }

    /// Returns `false` and leaves the body untouched when `y` is out of bounds.
    pub fn set_center_y(&mut self, y: i32) -> bool {
        if !self.boundary.contains_y(y) {
            return false;
        }
        self.center.y = y;
        true
    }

    /// Assign the given velocity components; `None` keeps the current value.
    pub fn set_velocity(&mut self, vx: Option<i32>, vy: Option<i32>) {
        if let Some(vx) = vx {
            debug_assert!(vx.abs() <= Params::MAX_SPEED, "vx {vx} out of range");
            self.velocity.x = vx;
        }
        if let Some(vy) = vy {
            debug_assert!(vy.abs() <= Params::MAX_SPEED, "vy {vy} out of range");
            self.velocity.y = vy;
        }
    }

    pub fn reverse_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    /// Move one frame. X is always applied first and each axis is checked on its own.
    pub fn advance(&mut self) -> Advance {
        let mut report = Advance {
            x_rejected: !self.set_center_x(self.center.x + self.velocity.x),
            ..Advance::default()
        };

        match self.motion {
            Motion::Paddle => {
                report.y_rejected = !self.set_center_y(self.center.y + self.velocity.y);
            }
            Motion::Ball => {
                let mut new_y = self.center.y + self.velocity.y;
                if !self.boundary.contains_y(new_y) {
                    // Single reflection; a deep overshoot may leave the ball
                    // outside for this frame.
                    self.velocity.y = -self.velocity.y;
                    new_y = self.center.y + self.velocity.y;
                    report.reflected = true;
                }
                self.center.y = new_y;
            }
        }

        report
    }
}
