//! Renderer trait abstraction.

use floorplan_core::canvas::Canvas;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Font error: {0}")]
    Font(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Working background of the live canvas.
pub const LIVE_BACKGROUND: Color = Color::from_rgba8(243, 244, 246, 255);

/// Background of exported images.
pub const EXPORT_BACKGROUND: Color = Color::from_rgba8(255, 255, 255, 255);

/// Colors and stroke widths for each entity kind.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub wall_color: Color,
    pub wall_width: f64,
    /// In-progress wall polyline.
    pub scratch_color: Color,
    pub scratch_width: f64,
    /// Boxes, circles and triangles.
    pub shape_color: Color,
    pub shape_width: f64,
    pub door_color: Color,
    pub door_width: f64,
    pub equipment_color: Color,
    pub equipment_number_color: Color,
    pub label_color: Color,
    pub label_size: f64,
    pub text_color: Color,
    pub handle_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wall_color: Color::from_rgba8(31, 41, 55, 255),
            wall_width: 4.0,
            scratch_color: Color::from_rgba8(59, 130, 246, 255), // Blue
            scratch_width: 2.0,
            shape_color: Color::from_rgba8(75, 85, 99, 255),
            shape_width: 2.0,
            door_color: Color::from_rgba8(146, 64, 14, 255),
            door_width: 2.0,
            equipment_color: Color::from_rgba8(220, 38, 38, 255), // Red
            equipment_number_color: Color::from_rgba8(255, 255, 255, 255),
            label_color: Color::from_rgba8(17, 24, 39, 255),
            label_size: 12.0,
            text_color: Color::from_rgba8(17, 24, 39, 255),
            handle_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Background color.
    pub background_color: Color,
    pub theme: Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a render context for the live canvas.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: LIVE_BACKGROUND,
            theme: Theme::default(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Redraw the whole frame from the canvas state.
    ///
    /// Called after every model change; there is no incremental update.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
