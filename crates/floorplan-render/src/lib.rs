//! Floor-plan render library
//!
//! Renderer abstraction, a deterministic display-list builder, a tiny-skia
//! CPU rasterizer and the JPEG export adapter.

mod export;
mod renderer;
mod scene;
mod skia;

pub use export::{ExportError, ExportedImage, export_file_name, export_jpeg};
pub use renderer::{
    EXPORT_BACKGROUND, LIVE_BACKGROUND, RenderContext, RenderResult, Renderer, RendererError, Theme,
};
pub use scene::{DisplayItem, DisplayList, DrawCommand, LabelAlign, Layer, build_display_list};
pub use skia::SkiaRenderer;
