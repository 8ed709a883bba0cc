//! Wall polyline.

use super::{Point, ShapeTrait, polyline_path};
use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// A committed wall polyline.
///
/// Walls only enter a plan through an explicit commit, and only with at least
/// two points; see [`Wall::from_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
}

impl Wall {
    /// Minimum number of points for a valid wall.
    pub const MIN_POINTS: usize = 2;

    /// Create a wall from a polyline, or `None` if it has fewer than two points.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.len() >= Self::MIN_POINTS {
            Some(Self { points })
        } else {
            None
        }
    }
}

impl ShapeTrait for Wall {
    fn to_path(&self) -> BezPath {
        polyline_path(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_requires_two_points() {
        assert!(Wall::from_points(vec![]).is_none());
        assert!(Wall::from_points(vec![Point::new(1.0, 1.0)]).is_none());
        let wall = Wall::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(wall.points.len(), 2);
    }

    #[test]
    fn test_wall_path_is_open() {
        let wall = Wall::from_points(vec![
            Point::new(10.0, 40.0),
            Point::new(50.0, 10.0),
            Point::new(30.0, 60.0),
        ])
        .unwrap();
        let path = wall.to_path();
        assert_eq!(path.elements().len(), 3);
        assert!(!path.elements().contains(&kurbo::PathEl::ClosePath));
    }

    #[test]
    fn test_wall_serializes_points() {
        let wall = Wall::from_points(vec![Point::new(10.0, 10.0), Point::new(50.0, 10.0)]).unwrap();
        let json = serde_json::to_value(&wall).unwrap();
        assert_eq!(json["points"][1]["x"], 50.0);
        assert_eq!(json["points"][1]["y"], 10.0);
    }
}
