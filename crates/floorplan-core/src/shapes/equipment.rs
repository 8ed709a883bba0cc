//! Numbered equipment pin.

use super::{Point, ShapeTrait, distance};
use kurbo::{BezPath, Circle as KurboCircle, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A numbered equipment pin (bait station, trap, lamp, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub x: f64,
    pub y: f64,
    /// One of the caller-supplied equipment type names.
    #[serde(rename = "type")]
    pub kind: String,
    /// Session-unique number, assigned in placement order starting at 1.
    pub number: u32,
}

impl Equipment {
    /// Radius of the pin marker.
    pub const MARKER_RADIUS: f64 = 10.0;

    pub fn new(position: Point, kind: impl Into<String>, number: u32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            kind: kind.into(),
            number,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Distance from the pin center to `point`.
    pub fn distance_to(&self, point: Point) -> f64 {
        distance(self.position(), point)
    }
}

impl ShapeTrait for Equipment {
    fn to_path(&self) -> BezPath {
        KurboCircle::new(self.position(), Self::MARKER_RADIUS).to_path(0.1)
    }
}
