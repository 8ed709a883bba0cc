//! Triangle annotation.

use super::{Point, ShapeTrait};
use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// An isosceles triangle centered at `(x, y)`.
///
/// `size` is both the base width and the height; the apex sits at
/// `(x, y - size/2)` and the base corners at `(x ± size/2, y + size/2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub x: f64,
    pub y: f64,
    /// Size, never negative.
    pub size: f64,
}

impl Triangle {
    /// Create a new triangle. Negative sizes are clamped to zero.
    pub fn new(center: Point, size: f64) -> Self {
        Self {
            x: center.x,
            y: center.y,
            size: size.max(0.0),
        }
    }

    /// Resize from the horizontal offset of `pointer` only.
    pub fn resize_to(&mut self, pointer: Point) {
        self.size = 2.0 * (pointer.x - self.x).abs();
    }

    /// Apex and base corners (left, right).
    pub fn vertices(&self) -> [Point; 3] {
        let half = self.size / 2.0;
        [
            Point::new(self.x, self.y - half),
            Point::new(self.x - half, self.y + half),
            Point::new(self.x + half, self.y + half),
        ]
    }

    /// Position of the resize handle (right base corner).
    pub fn handle_position(&self) -> Point {
        self.vertices()[2]
    }
}

impl ShapeTrait for Triangle {
    fn to_path(&self) -> BezPath {
        let [apex, left, right] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(apex);
        path.line_to(left);
        path.line_to(right);
        path.close_path();
        path
    }
}
