//! Box (rectangle) annotation.

use super::{Point, ShapeTrait};
use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// A box anchored at the corner where the drag started.
///
/// `width` and `height` are signed: a drag toward the upper-left yields
/// negative extents, and the outline is traced from the anchor in that
/// direction rather than being normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a box from the drag anchor and the current pointer position.
    pub fn from_anchor(anchor: Point, current: Point) -> Self {
        Self::new(anchor.x, anchor.y, current.x - anchor.x, current.y - anchor.y)
    }

    /// The anchor corner.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The corner opposite the anchor.
    pub fn far_corner(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

impl ShapeTrait for Rectangle {
    fn to_path(&self) -> BezPath {
        // Traced anchor-first so the winding follows the drag direction.
        let mut path = BezPath::new();
        path.move_to(self.anchor());
        path.line_to((self.x + self.width, self.y));
        path.line_to(self.far_corner());
        path.line_to((self.x, self.y + self.height));
        path.close_path();
        path
    }
}
