//! Backend-independent display list.
//!
//! The list is built fresh for every frame from the canvas, in a fixed
//! z-order. Rasterizers only replay it.

use crate::renderer::RenderContext;
use floorplan_core::selection::{self, HANDLE_SIZE};
use floorplan_core::shapes::{Equipment, Point, ShapeKind, ShapeTrait, Text, polyline_path};
use kurbo::{BezPath, Rect, Shape as KurboShape};
use peniko::Color;

/// Radius of the vertex dots on the in-progress wall.
const SCRATCH_VERTEX_RADIUS: f64 = 3.0;

/// Draw layers, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Walls,
    Scratch,
    Boxes,
    Circles,
    Triangles,
    Doors,
    Equipment,
    Texts,
}

/// Where a label's position sits relative to its glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    /// Position is the left end of the baseline.
    Baseline,
    /// Position is the center of the text.
    Center,
}

/// A single drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Color),
    StrokePath { path: BezPath, color: Color, width: f64 },
    FillPath { path: BezPath, color: Color },
    Label {
        text: String,
        position: Point,
        size: f64,
        color: Color,
        align: LabelAlign,
    },
}

#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub layer: Layer,
    pub command: DrawCommand,
}

/// Ordered drawing operations for one frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer, command: DrawCommand) {
        self.items.push(DisplayItem { layer, command });
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter()
    }

    /// Commands belonging to `layer`, in order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.command)
    }

    /// Text of every label, in painting order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match &item.command {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build the display list for the current canvas state.
pub fn build_display_list(ctx: &RenderContext) -> DisplayList {
    let canvas = ctx.canvas;
    let data = canvas.data();
    let theme = &ctx.theme;
    let handle = selection::resize_handle(canvas.selection(), data);
    let handle_at = |kind: ShapeKind, index: usize| -> Option<Point> {
        handle.and_then(|(k, i, p)| (k == kind && i == index).then_some(p))
    };

    let mut list = DisplayList::new();
    list.push(Layer::Background, DrawCommand::Clear(ctx.background_color));

    for wall in &data.walls {
        list.push(
            Layer::Walls,
            DrawCommand::StrokePath {
                path: wall.to_path(),
                color: theme.wall_color,
                width: theme.wall_width,
            },
        );
    }

    let scratch = canvas.scratch_wall();
    if !scratch.is_empty() {
        list.push(
            Layer::Scratch,
            DrawCommand::StrokePath {
                path: polyline_path(scratch),
                color: theme.scratch_color,
                width: theme.scratch_width,
            },
        );
        // A lone first click has no segment to stroke
        for point in scratch {
            list.push(
                Layer::Scratch,
                DrawCommand::FillPath {
                    path: kurbo::Circle::new(*point, SCRATCH_VERTEX_RADIUS).to_path(0.1),
                    color: theme.scratch_color,
                },
            );
        }
    }

    for rect in &data.boxes {
        list.push(
            Layer::Boxes,
            DrawCommand::StrokePath {
                path: rect.to_path(),
                color: theme.shape_color,
                width: theme.shape_width,
            },
        );
    }

    for (i, circle) in data.circles.iter().enumerate() {
        list.push(
            Layer::Circles,
            DrawCommand::StrokePath {
                path: circle.to_path(),
                color: theme.shape_color,
                width: theme.shape_width,
            },
        );
        if let Some(p) = handle_at(ShapeKind::Circle, i) {
            list.push(Layer::Circles, handle_command(p, theme.handle_color));
        }
    }

    for (i, triangle) in data.triangles.iter().enumerate() {
        list.push(
            Layer::Triangles,
            DrawCommand::StrokePath {
                path: triangle.to_path(),
                color: theme.shape_color,
                width: theme.shape_width,
            },
        );
        if let Some(p) = handle_at(ShapeKind::Triangle, i) {
            list.push(Layer::Triangles, handle_command(p, theme.handle_color));
        }
    }

    for door in &data.doors {
        list.push(
            Layer::Doors,
            DrawCommand::StrokePath {
                path: door.to_path(),
                color: theme.door_color,
                width: theme.door_width,
            },
        );
    }

    for pin in &data.equipment {
        let center = pin.position();
        list.push(
            Layer::Equipment,
            DrawCommand::FillPath {
                path: pin.to_path(),
                color: theme.equipment_color,
            },
        );
        list.push(
            Layer::Equipment,
            DrawCommand::Label {
                text: pin.number.to_string(),
                position: center,
                size: theme.label_size,
                color: theme.equipment_number_color,
                align: LabelAlign::Center,
            },
        );
        list.push(
            Layer::Equipment,
            DrawCommand::Label {
                text: pin.kind.clone(),
                position: Point::new(
                    center.x + Equipment::MARKER_RADIUS + 4.0,
                    center.y + theme.label_size / 3.0,
                ),
                size: theme.label_size,
                color: theme.label_color,
                align: LabelAlign::Baseline,
            },
        );
    }

    for text in &data.texts {
        list.push(
            Layer::Texts,
            DrawCommand::Label {
                text: text.content.clone(),
                position: text.position(),
                size: Text::FONT_SIZE,
                color: theme.text_color,
                align: LabelAlign::Baseline,
            },
        );
    }

    log::trace!("Built display list with {} commands", list.len());
    list
}

fn handle_command(center: Point, color: Color) -> DrawCommand {
    DrawCommand::FillPath {
        path: Rect::from_center_size(center, (HANDLE_SIZE, HANDLE_SIZE)).to_path(0.1),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::EXPORT_BACKGROUND;
    use floorplan_core::{Canvas, KeyEvent, ToolKind};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn click(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.pointer_down(p(x, y)).unwrap();
        canvas.pointer_up(p(x, y));
    }

    fn populated() -> Canvas {
        let mut c = Canvas::new(vec!["Bait station".to_string()]);
        click(&mut c, 10.0, 10.0);
        click(&mut c, 100.0, 10.0);
        c.handle_key_event(&KeyEvent::new("Escape"));
        click(&mut c, 10.0, 200.0);

        c.set_tool(ToolKind::Text);
        c.pointer_down(p(300.0, 300.0)).unwrap();
        c.set_text_draft("Kitchen").unwrap();
        c.confirm_text().unwrap();

        c.set_tool(ToolKind::Equipment);
        click(&mut c, 50.0, 50.0);
        c.set_tool(ToolKind::Door);
        click(&mut c, 150.0, 150.0);
        c.set_tool(ToolKind::Triangle);
        click(&mut c, 200.0, 100.0);
        c.set_tool(ToolKind::Circle);
        click(&mut c, 250.0, 100.0);
        c.set_tool(ToolKind::Box);
        c.pointer_down(p(20.0, 20.0)).unwrap();
        c.pointer_move(p(60.0, 80.0));
        c.pointer_up(p(60.0, 80.0));
        c
    }

    #[test]
    fn test_empty_canvas_is_just_background() {
        let canvas = Canvas::new(Vec::new());
        let list = build_display_list(&RenderContext::new(&canvas));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].layer, Layer::Background);
        assert!(matches!(list.items()[0].command, DrawCommand::Clear(_)));
    }

    #[test]
    fn test_fixed_z_order() {
        let canvas = populated();
        let list = build_display_list(&RenderContext::new(&canvas));

        let layers: Vec<Layer> = list.iter().map(|item| item.layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]), "{layers:?}");
        for layer in [
            Layer::Background,
            Layer::Walls,
            Layer::Scratch,
            Layer::Boxes,
            Layer::Circles,
            Layer::Triangles,
            Layer::Doors,
            Layer::Equipment,
            Layer::Texts,
        ] {
            assert!(list.layer(layer).next().is_some(), "missing {layer:?}");
        }
    }

    #[test]
    fn test_equipment_labels() {
        let canvas = populated();
        let list = build_display_list(&RenderContext::new(&canvas));
        let labels: Vec<&str> = list.labels().collect();
        assert_eq!(labels, vec!["1", "Bait station", "Kitchen"]);
    }

    #[test]
    fn test_handle_only_while_resizing() {
        let mut canvas = Canvas::new(Vec::new());
        canvas.set_tool(ToolKind::Circle);
        canvas.pointer_down(p(100.0, 100.0)).unwrap();

        let list = build_display_list(&RenderContext::new(&canvas));
        let circles: Vec<&DrawCommand> = list.layer(Layer::Circles).collect();
        assert_eq!(circles.len(), 2);
        assert!(matches!(circles[1], DrawCommand::FillPath { .. }));

        canvas.pointer_up(p(100.0, 100.0));
        let list = build_display_list(&RenderContext::new(&canvas));
        assert_eq!(list.layer(Layer::Circles).count(), 1);
    }

    #[test]
    fn test_single_scratch_point_is_visible() {
        let mut canvas = Canvas::new(Vec::new());
        click(&mut canvas, 5.0, 5.0);
        let list = build_display_list(&RenderContext::new(&canvas));
        assert!(
            list.layer(Layer::Scratch)
                .any(|cmd| matches!(cmd, DrawCommand::FillPath { .. }))
        );
    }

    #[test]
    fn test_background_override() {
        let canvas = Canvas::new(Vec::new());
        let ctx = RenderContext::new(&canvas).with_background(EXPORT_BACKGROUND);
        let list = build_display_list(&ctx);
        match &list.items()[0].command {
            DrawCommand::Clear(color) => {
                let rgba = color.to_rgba8();
                assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 255, 255, 255));
            }
            other => panic!("expected clear, got {other:?}"),
        }
    }
}
