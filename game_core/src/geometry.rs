use glam::IVec2;

use crate::CoreError;

/// Inclusive range an entity's center may occupy on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Boundary {
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Result<Self, CoreError> {
        if x_min > x_max {
            return Err(CoreError::InvertedBoundary {
                axis: 'x',
                min: x_min,
                max: x_max,
            });
        }
        if y_min > y_max {
            return Err(CoreError::InvertedBoundary {
                axis: 'y',
                min: y_min,
                max: y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    pub fn contains_y(&self, y: i32) -> bool {
        y >= self.y_min && y <= self.y_max
    }

    pub fn contains(&self, point: IVec2) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left is `center - size / 2`, rounding toward zero
    pub fn from_center_size(center: IVec2, size: IVec2) -> Self {
        let top_left = center - size / 2;
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Overlap on both axes. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }
}
