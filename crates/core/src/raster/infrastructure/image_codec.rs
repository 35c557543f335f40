use std::io::Cursor;

use image::imageops::FilterType;
use image::ImageFormat;
use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("frame buffer does not match its dimensions")]
    InvalidBuffer,
}

/// Decodes JPEG/PNG/WebP bytes into an RGBA frame at native size.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, RasterError> {
    let image = image::load_from_memory(bytes).map_err(RasterError::Decode)?;
    Ok(Frame::from_image(image.to_rgba8()))
}

/// Target size that caps the longest side at `max_dimension` without upscaling.
///
/// Each side is rounded and kept at least 1px.
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height).max(1) as f64;
    let scale = (max_dimension as f64 / longest).min(1.0);
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Renders a frame into a new surface of the given size.
pub fn resize_frame(frame: Frame, width: u32, height: u32) -> Result<Frame, RasterError> {
    if frame.width() == width && frame.height() == height {
        return Ok(frame);
    }
    let image = frame.into_image().ok_or(RasterError::InvalidBuffer)?;
    let resized = image::imageops::resize(&image, width, height, FilterType::Triangle);
    Ok(Frame::from_image(resized))
}

pub fn encode_png(frame: Frame) -> Result<Vec<u8>, RasterError> {
    let image = frame.into_image().ok_or(RasterError::InvalidBuffer)?;
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(RasterError::Encode)?;
    Ok(out.into_inner())
}
