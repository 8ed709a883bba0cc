//! Shape definitions for the floor plan.

mod circle;
mod door;
mod equipment;
mod rectangle;
mod text;
mod triangle;
mod wall;

pub use circle::Circle;
pub use door::Door;
pub use equipment::Equipment;
pub use rectangle::Rectangle;
pub use text::Text;
pub use triangle::Triangle;
pub use wall::Wall;

pub use kurbo::Point;

use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Build an open polyline path through the given points.
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

/// Common trait for all plan primitives.
pub trait ShapeTrait {
    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;
}

/// The seven entity collections of a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Wall,
    Box,
    Circle,
    Triangle,
    Door,
    Text,
    Equipment,
}
