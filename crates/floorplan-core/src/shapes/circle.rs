//! Circle annotation.

use super::{Point, ShapeTrait, distance};
use kurbo::{BezPath, Circle as KurboCircle, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    /// Radius, never negative.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle. Negative radii are clamped to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            x: center.x,
            y: center.y,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Resize so the outline passes through `pointer`.
    pub fn resize_to(&mut self, pointer: Point) {
        self.radius = distance(self.center(), pointer);
    }

    /// Position of the resize handle (rightmost point of the outline).
    pub fn handle_position(&self) -> Point {
        Point::new(self.x + self.radius, self.y)
    }
}

impl ShapeTrait for Circle {
    fn to_path(&self) -> BezPath {
        KurboCircle::new(self.center(), self.radius).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_to_is_euclidean() {
        let mut circle = Circle::new(Point::new(100.0, 100.0), 20.0);
        circle.resize_to(Point::new(130.0, 140.0));
        assert!((circle.radius - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_to_center_is_zero() {
        let mut circle = Circle::new(Point::new(10.0, 10.0), 20.0);
        circle.resize_to(Point::new(10.0, 10.0));
        assert!(circle.radius.abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let circle = Circle::new(Point::ZERO, -5.0);
        assert!(circle.radius.abs() < f64::EPSILON);
    }

    #[test]
    fn test_handle_position() {
        let circle = Circle::new(Point::new(10.0, 20.0), 15.0);
        assert_eq!(circle.handle_position(), Point::new(25.0, 20.0));
    }
}
