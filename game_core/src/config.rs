use std::time::Duration;

use crate::{Boundary, CoreError, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_padding: i32,
    pub paddle_speed: i32,
    pub ball_diameter: i32,
    pub ball_speed: i32,
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_padding: Params::PADDLE_PADDING,
            paddle_speed: Params::PADDLE_SPEED,
            ball_diameter: Params::BALL_DIAMETER,
            ball_speed: Params::BALL_SPEED,
            frame_ms: Params::FRAME_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for a field of the given size, everything else default
    pub fn with_field(width: i32, height: i32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Check every field a session relies on.
    ///
    /// Speeds must lie in `1..=Params::MAX_SPEED`, entity sizes and padding in
    /// `0..=Params::MAX_SIZE`, and the field must not be negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, speed) in [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ] {
            if !(1..=Params::MAX_SPEED).contains(&speed) {
                return Err(CoreError::InvalidSpeed { name, speed });
            }
        }

        for (name, value) in [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_padding", self.paddle_padding),
            ("ball_diameter", self.ball_diameter),
        ] {
            if !(0..=Params::MAX_SIZE).contains(&value) {
                return Err(CoreError::InvalidDimension { name, value });
            }
        }

        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ] {
            if value < 0 {
                return Err(CoreError::InvalidDimension { name, value });
            }
        }

        Ok(())
    }

    /// Center X of a paddle
    pub fn paddle_x(&self, side: Side) -> i32 {
        let inset = self.paddle_padding + self.paddle_width / 2;
        match side {
            Side::Left => inset,
            Side::Right => self.field_width - inset,
        }
    }

    /// Initial center Y shared by both paddles and the ball
    pub fn center_y(&self) -> i32 {
        self.field_height / 2
    }

    /// Whole field; paddles are confined to it
    pub fn field_boundary(&self) -> Result<Boundary, CoreError> {
        Boundary::new(0, self.field_width, 0, self.field_height)
    }

    /// The ball may travel one diameter past either side edge, and its center
    /// stays half a diameter away from the top and bottom edges.
    pub fn ball_boundary(&self) -> Result<Boundary, CoreError> {
        let d = self.ball_diameter;
        let too_large = || CoreError::FieldTooLarge {
            width: self.field_width,
        };
        let x_min = 0i32.checked_sub(d).ok_or_else(too_large)?;
        let x_max = self.field_width.checked_add(d).ok_or_else(too_large)?;
        let y_max = self.field_height.checked_sub(d / 2).ok_or_else(too_large)?;
        Boundary::new(x_min, x_max, d / 2, y_max)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
