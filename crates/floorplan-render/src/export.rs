//! JPEG export of the current frame.

use crate::renderer::{EXPORT_BACKGROUND, RenderContext};
use crate::scene::build_display_list;
use crate::skia::SkiaRenderer;
use floorplan_core::canvas::Canvas;
use image::ImageEncoder;
use thiserror::Error;

/// Export errors. Editor state is never touched on failure.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not create export surface: {0}")]
    Surface(String),
    #[error("JPEG encoding failed: {0}")]
    Encode(String),
}

/// An encoded image ready to be delivered as a download.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// `<trimmed name>.jpg`, or `<fallback>.jpg` when the name is blank.
///
/// Anything other than letters, digits, spaces, `-` and `_` becomes `_`, so
/// the result is always a bare file name.
pub fn export_file_name(plan_name: &str, fallback: &str) -> String {
    let trimmed = plan_name.trim();
    let stem = if trimmed.is_empty() { fallback.trim() } else { trimmed };
    let safe: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') { c } else { '_' })
        .collect();
    format!("{}.jpg", safe)
}

/// Render the canvas on white at the renderer's size and encode it as JPEG.
///
/// Quality and the fallback file name come from the canvas configuration.
pub fn export_jpeg(
    renderer: &SkiaRenderer,
    canvas: &Canvas,
    plan_name: &str,
) -> Result<ExportedImage, ExportError> {
    let ctx = RenderContext::new(canvas).with_background(EXPORT_BACKGROUND);
    let list = build_display_list(&ctx);
    let pixmap = renderer
        .rasterize_offscreen(&list)
        .map_err(|e| ExportError::Surface(e.to_string()))?;

    let (width, height) = (pixmap.width(), pixmap.height());
    // The surface is opaque, so dropping alpha loses nothing
    let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgb_data.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }

    let config = canvas.config();
    let mut buf = std::io::Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, config.jpeg_quality);
    encoder
        .write_image(&rgb_data, width, height, image::ColorType::Rgb8.into())
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    let file_name = export_file_name(plan_name, &config.default_export_name);
    log::info!("Exported {} ({}x{}, {} bytes)", file_name, width, height, buf.get_ref().len());
    Ok(ExportedImage {
        file_name,
        bytes: buf.into_inner(),
        width,
        height,
    })
}
