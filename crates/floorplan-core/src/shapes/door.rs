//! Door swing symbol.

use super::{Point, ShapeTrait};
use kurbo::{Affine, Arc, BezPath, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// A door, drawn as a leaf plus a quarter-circle swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Hinge position.
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees around the hinge. Always 0 for newly placed doors.
    pub rotation: f64,
}

impl Door {
    /// Leaf length in pixels.
    pub const WIDTH: f64 = 40.0;

    /// Create a new door at the hinge position, unrotated.
    pub fn new(hinge: Point) -> Self {
        Self {
            x: hinge.x,
            y: hinge.y,
            rotation: 0.0,
        }
    }

    pub fn hinge(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn transform(&self) -> Affine {
        Affine::rotate_about(self.rotation.to_radians(), self.hinge())
    }
}

impl ShapeTrait for Door {
    fn to_path(&self) -> BezPath {
        let hinge = self.hinge();
        let mut path = BezPath::new();
        // Leaf, open at 90 degrees
        path.move_to(hinge);
        path.line_to((self.x, self.y - Self::WIDTH));
        // Swing from the closed position up to the open leaf
        let swing = Arc {
            center: hinge,
            radii: Vec2::new(Self::WIDTH, Self::WIDTH),
            start_angle: 0.0,
            sweep_angle: -FRAC_PI_2,
            x_rotation: 0.0,
        };
        path.extend(swing.path_elements(0.1));
        self.transform() * path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_door_unrotated() {
        let door = Door::new(Point::new(5.0, 6.0));
        assert!(door.rotation.abs() < f64::EPSILON);
        assert_eq!(door.hinge(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_door_path_spans_leaf_and_swing() {
        let door = Door::new(Point::new(100.0, 100.0));
        let b = door.to_path().bounding_box();
        assert!((b.x0 - 100.0).abs() < 0.5);
        assert!((b.y0 - 60.0).abs() < 0.5);
        assert!((b.x1 - 140.0).abs() < 0.5);
        assert!((b.y1 - 100.0).abs() < 0.5);
    }
}
