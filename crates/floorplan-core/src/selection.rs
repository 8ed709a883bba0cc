//! Hit-testing and the live resize/drag controller.
//!
//! All geometry here is a linear scan over small collections. The active
//! [`Selection`] belongs to the editing session and is never stored on the
//! shapes themselves.

use crate::canvas::PlanData;
use crate::shapes::{Equipment, Point, Rectangle, ShapeKind};
use serde::{Deserialize, Serialize};

/// Handle size in pixels.
pub const HANDLE_SIZE: f64 = 8.0;

/// The drag or resize interaction currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    /// Box tool drag. `index` is `None` until the first pointer-move places the box.
    DraggingBox { anchor: Point, index: Option<usize> },
    /// A freshly placed circle following the pointer.
    ResizingCircle(usize),
    /// A freshly placed triangle following the pointer.
    ResizingTriangle(usize),
}

impl Selection {
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::None)
    }
}

/// Result of applying a pointer-move to the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// No active selection, or it points at nothing.
    None,
    /// The first move of a box drag appended a new box.
    Created,
    /// An existing shape was reshaped.
    Updated,
}

/// Index of the first equipment pin strictly closer than `radius` to `point`.
pub fn find_equipment_near(equipment: &[Equipment], point: Point, radius: f64) -> Option<usize> {
    equipment.iter().position(|e| e.distance_to(point) < radius)
}

/// Apply a pointer-move to the selected shape.
///
/// A box drag replaces the box at its recorded index, appending it on the
/// first move. Circles take the Euclidean distance to the pointer as radius,
/// triangles twice the horizontal offset as size.
pub fn apply_drag(selection: &mut Selection, data: &mut PlanData, pointer: Point) -> DragEffect {
    match selection {
        Selection::None => DragEffect::None,
        Selection::DraggingBox { anchor, index } => {
            let rect = Rectangle::from_anchor(*anchor, pointer);
            match index.and_then(|i| data.boxes.get_mut(i)) {
                Some(existing) => {
                    *existing = rect;
                    DragEffect::Updated
                }
                None => {
                    data.boxes.push(rect);
                    *index = Some(data.boxes.len() - 1);
                    DragEffect::Created
                }
            }
        }
        Selection::ResizingCircle(i) => match data.circles.get_mut(*i) {
            Some(circle) => {
                circle.resize_to(pointer);
                DragEffect::Updated
            }
            None => DragEffect::None,
        },
        Selection::ResizingTriangle(i) => match data.triangles.get_mut(*i) {
            Some(triangle) => {
                triangle.resize_to(pointer);
                DragEffect::Updated
            }
            None => DragEffect::None,
        },
    }
}

/// Position of the resize handle of the selected circle or triangle.
pub fn resize_handle(selection: &Selection, data: &PlanData) -> Option<(ShapeKind, usize, Point)> {
    match *selection {
        Selection::ResizingCircle(i) => data
            .circles
            .get(i)
            .map(|c| (ShapeKind::Circle, i, c.handle_position())),
        Selection::ResizingTriangle(i) => data
            .triangles
            .get(i)
            .map(|t| (ShapeKind::Triangle, i, t.handle_position())),
        Selection::None | Selection::DraggingBox { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Triangle};

    #[test]
    fn test_find_equipment_near_first_match() {
        let pins = vec![
            Equipment::new(Point::new(0.0, 0.0), "Trap", 1),
            Equipment::new(Point::new(10.0, 0.0), "Trap", 2),
        ];
        assert_eq!(find_equipment_near(&pins, Point::new(5.0, 0.0), 20.0), Some(0));
        assert_eq!(find_equipment_near(&pins, Point::new(28.0, 0.0), 20.0), Some(1));
        assert_eq!(find_equipment_near(&pins, Point::new(100.0, 0.0), 20.0), None);
    }

    #[test]
    fn test_find_equipment_threshold_is_strict() {
        let pins = vec![Equipment::new(Point::new(0.0, 0.0), "Trap", 1)];
        assert_eq!(find_equipment_near(&pins, Point::new(20.0, 0.0), 20.0), None);
        assert_eq!(find_equipment_near(&pins, Point::new(19.9, 0.0), 20.0), Some(0));
    }

    #[test]
    fn test_box_drag_creates_then_replaces() {
        let mut data = PlanData::default();
        let mut sel = Selection::DraggingBox { anchor: Point::new(10.0, 10.0), index: None };

        assert_eq!(apply_drag(&mut sel, &mut data, Point::new(30.0, 40.0)), DragEffect::Created);
        assert_eq!(data.boxes, vec![Rectangle::new(10.0, 10.0, 20.0, 30.0)]);

        assert_eq!(apply_drag(&mut sel, &mut data, Point::new(0.0, 5.0)), DragEffect::Updated);
        assert_eq!(data.boxes, vec![Rectangle::new(10.0, 10.0, -10.0, -5.0)]);
    }

    #[test]
    fn test_circle_and_triangle_resize() {
        let mut data = PlanData::default();
        data.circles.push(Circle::new(Point::new(0.0, 0.0), 20.0));
        data.triangles.push(Triangle::new(Point::new(0.0, 0.0), 40.0));

        let mut sel = Selection::ResizingCircle(0);
        apply_drag(&mut sel, &mut data, Point::new(3.0, 4.0));
        assert!((data.circles[0].radius - 5.0).abs() < 1e-9);

        let mut sel = Selection::ResizingTriangle(0);
        apply_drag(&mut sel, &mut data, Point::new(-7.0, 99.0));
        assert!((data.triangles[0].size - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_stale_index_is_ignored() {
        let mut data = PlanData::default();
        let mut sel = Selection::ResizingCircle(3);
        assert_eq!(apply_drag(&mut sel, &mut data, Point::new(1.0, 1.0)), DragEffect::None);
        assert!(resize_handle(&sel, &data).is_none());
    }

    #[test]
    fn test_resize_handle() {
        let mut data = PlanData::default();
        data.circles.push(Circle::new(Point::new(10.0, 10.0), 5.0));
        let handle = resize_handle(&Selection::ResizingCircle(0), &data);
        assert_eq!(handle, Some((ShapeKind::Circle, 0, Point::new(15.0, 10.0))));
        assert!(resize_handle(&Selection::None, &data).is_none());
    }
}
