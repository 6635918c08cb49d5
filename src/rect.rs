use crate::units::*;

/// A rectangle, specified by two opposite corners. The y axis grows downward,
/// so `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Px,
    /// The y-coordinate of the top edge.
    pub y1: Px,
    /// The x-coordinate of the right edge.
    pub x2: Px,
    /// The y-coordinate of the bottom edge.
    pub y2: Px,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_origin(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}
