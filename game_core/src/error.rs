use std::error::Error;
use std::fmt;

use glam::IVec2;

/// Errors raised while building a session or its entities.
///
/// Moves never fail: an out-of-range position update is dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// `min > max` on one axis of a boundary
    InvertedBoundary { axis: char, min: i32, max: i32 },
    /// Entity size component outside `[0, Params::MAX_SIZE]`
    InvalidSize(IVec2),
    /// Entity placed with its center outside its own boundary
    CenterOutsideBoundary(IVec2),
    /// Speed or velocity component outside what a body accepts
    InvalidSpeed { name: &'static str, speed: i32 },
    /// Config length that is negative or larger than `Params::MAX_SIZE`
    InvalidDimension { name: &'static str, value: i32 },
    /// Field so wide the ball boundary does not fit in an `i32`
    FieldTooLarge { width: i32 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvertedBoundary { axis, min, max } => {
                write!(f, "boundary {axis} range is inverted: {min} > {max}")
            }
            CoreError::InvalidSize(size) => {
                write!(f, "entity size {}x{} is out of range", size.x, size.y)
            }
            CoreError::CenterOutsideBoundary(center) => write!(
                f,
                "entity center ({}, {}) lies outside its boundary",
                center.x, center.y
            ),
            CoreError::InvalidSpeed { name, speed } => {
                write!(f, "{name} {speed} is out of range")
            }
            CoreError::InvalidDimension { name, value } => {
                write!(f, "{name} {value} is out of range")
            }
            CoreError::FieldTooLarge { width } => {
                write!(f, "field width {width} leaves no room for the ball boundary")
            }
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CoreError::InvertedBoundary {
            axis: 'x',
            min: 10,
            max: 0,
        };
        assert_eq!(err.to_string(), "boundary x range is inverted: 10 > 0");

        let err = CoreError::CenterOutsideBoundary(IVec2::new(-1, 4));
        assert_eq!(
            err.to_string(),
            "entity center (-1, 4) lies outside its boundary"
        );

        let err = CoreError::InvalidSpeed {
            name: "ball_speed",
            speed: 9,
        };
        assert_eq!(err.to_string(), "ball_speed 9 is out of range");
    }
}
