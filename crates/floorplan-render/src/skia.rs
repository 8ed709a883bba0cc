//! CPU rasterizer backed by tiny-skia.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use crate::scene::{DisplayList, DrawCommand, LabelAlign, build_display_list};
use floorplan_core::shapes::Point;
use kurbo::{BezPath, PathEl};
use peniko::Color;
use rusttype::{Font, Scale, point as rt_point};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Mask, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

/// Embedded DejaVu Sans, the default label font
static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Renders display lists onto a fixed-size pixmap.
///
/// The size is set once when the canvas is mounted and never recomputed.
pub struct SkiaRenderer {
    pixmap: Pixmap,
    font: Font<'static>,
}

impl SkiaRenderer {
    /// Create a renderer with a `width` x `height` surface, labelling with
    /// the embedded font.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RendererError::InitFailed(format!("Invalid canvas size {}x{}", width, height))
        })?;
        let font = Font::try_from_bytes(DEJAVU_SANS)
            .ok_or_else(|| RendererError::Font("Embedded font failed to load".to_string()))?;
        Ok(Self { pixmap, font })
    }

    /// Replace the label font with TrueType `data`.
    pub fn with_font(mut self, data: Vec<u8>) -> RenderResult<Self> {
        self.font = Font::try_from_vec(data)
            .ok_or_else(|| RendererError::Font("Unsupported or corrupt font data".to_string()))?;
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The live surface.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Replay `list` onto the live surface.
    pub fn rasterize(&mut self, list: &DisplayList) {
        draw_list(&mut self.pixmap, &self.font, list);
    }

    /// Replay `list` onto a fresh surface of the same size, leaving the live
    /// surface untouched.
    pub fn rasterize_offscreen(&self, list: &DisplayList) -> RenderResult<Pixmap> {
        let mut pixmap = Pixmap::new(self.width(), self.height()).ok_or_else(|| {
            RendererError::RenderFailed("Could not allocate offscreen surface".to_string())
        })?;
        draw_list(&mut pixmap, &self.font, list);
        Ok(pixmap)
    }
}

impl Renderer for SkiaRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let list = build_display_list(ctx);
        self.rasterize(&list);
    }
}

fn draw_list(pixmap: &mut Pixmap, font: &Font<'static>, list: &DisplayList) {
    for item in list.iter() {
        match &item.command {
            DrawCommand::Clear(color) => {
                let c = color.to_rgba8();
                pixmap.fill(tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a));
            }
            DrawCommand::StrokePath { path, color, width } => {
                if let Some(path) = to_skia_path(path) {
                    let stroke = Stroke {
                        width: *width as f32,
                        line_cap: LineCap::Round,
                        line_join: LineJoin::Round,
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint(*color), &stroke, Transform::identity(), None);
                }
            }
            DrawCommand::FillPath { path, color } => {
                if let Some(path) = to_skia_path(path) {
                    pixmap.fill_path(
                        &path,
                        &paint(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Label {
                text,
                position,
                size,
                color,
                align,
            } => draw_label(pixmap, font, text, *position, *size, *color, *align),
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let c = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(c.r, c.g, c.b, c.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path. Returns `None` for paths with no drawable segment.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Rasterize a label through a coverage mask.
fn draw_label(
    pixmap: &mut Pixmap,
    font: &Font<'static>,
    text: &str,
    position: Point,
    size: f64,
    color: Color,
    align: LabelAlign,
) {
    let scale = Scale::uniform(size as f32);
    let v_metrics = font.v_metrics(scale);

    let (x, baseline) = match align {
        LabelAlign::Baseline => (position.x as f32, position.y as f32),
        LabelAlign::Center => {
            let width = font
                .layout(text, scale, rt_point(0.0, 0.0))
                .last()
                .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                .unwrap_or(0.0);
            (
                position.x as f32 - width / 2.0,
                position.y as f32 + (v_metrics.ascent + v_metrics.descent) / 2.0,
            )
        }
    };

    let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
        log::debug!("Could not allocate a mask for label '{}'", text);
        return;
    };
    let (w, h) = (pixmap.width() as i32, pixmap.height() as i32);
    let mut covered: Option<(i32, i32, i32, i32)> = None;
    {
        let data = mask.data_mut();
        for glyph in font.layout(text, scale, rt_point(x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let idx = (py * w + px) as usize;
                data[idx] = data[idx].max((v * 255.0) as u8);
            });
            covered = Some(match covered {
                Some((x0, y0, x1, y1)) => {
                    (x0.min(bb.min.x), y0.min(bb.min.y), x1.max(bb.max.x), y1.max(bb.max.y))
                }
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
            });
        }
    }

    let Some((x0, y0, x1, y1)) = covered else {
        return;
    };
    let (x0, y0) = (x0.max(0), y0.max(0));
    let (x1, y1) = (x1.min(w), y1.min(h));
    if let Some(rect) = tiny_skia::Rect::from_ltrb(x0 as f32, y0 as f32, x1 as f32, y1 as f32) {
        pixmap.fill_rect(rect, &paint(color), Transform::identity(), Some(&mask));
    }
}
