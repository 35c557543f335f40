use crate::masking::infrastructure::masker_factory::create_masker;
use crate::masking::infrastructure::overlay;
use crate::raster::infrastructure::image_codec::{self, RasterError};
use crate::shared::constants::{MAX_PROCESSING_DIMENSION, WATERMARK_TEXT};
use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;
use crate::shared::hide_mode::HideMode;
use crate::shared::region::Region;

const MIN_MASK_SIDE: u32 = 64;
const MASK_WIDTH_RATIO: f64 = 0.3;
const MASK_HEIGHT_RATIO: f64 = 0.26;

/// Everything the simulated run produced, including the geometry it used.
#[derive(Clone, Debug)]
pub struct MockOutput {
    pub image: DataUrl,
    pub width: u32,
    pub height: u32,
    pub mask: Region,
    pub watermark: Option<Region>,
}

/// The centred rectangle obscured in a `width` x `height` image.
pub fn mask_geometry(width: u32, height: u32) -> Region {
    let mask_width = ((width as f64 * MASK_WIDTH_RATIO).round() as u32).max(MIN_MASK_SIDE);
    let mask_height = ((height as f64 * MASK_HEIGHT_RATIO).round() as u32).max(MIN_MASK_SIDE);
    Region::centered(width, height, mask_width, mask_height)
}

/// Client-side stand-in for the face-hide API:
/// decode → cap size → mask centre → outline → watermark → PNG.
///
/// No face detection happens; the centre of the image is assumed to hold
/// the face.
pub struct MockHideUseCase {
    max_dimension: u32,
    watermark: String,
}

impl MockHideUseCase {
    pub fn new() -> Self {
        Self {
            max_dimension: MAX_PROCESSING_DIMENSION,
            watermark: WATERMARK_TEXT.to_string(),
        }
    }

    pub fn execute(&self, target: &[u8], mode: HideMode) -> Result<MockOutput, FaceHideError> {
        self.run(target, mode)
            .map_err(|e| FaceHideError::Processing(format!("Failed to process the target image: {e}")))
    }

    fn run(&self, target: &[u8], mode: HideMode) -> Result<MockOutput, RasterError> {
        let source = image_codec::decode_frame(target)?;
        let (width, height) =
            image_codec::scaled_dimensions(source.width(), source.height(), self.max_dimension);
        log::debug!(
            "Mock source {}x{} rendered at {width}x{height}",
            source.width(),
            source.height()
        );
        let mut frame = image_codec::resize_frame(source, width, height)?;

        let mask = mask_geometry(width, height);
        log::info!(
            "Applying {mode} to {}x{} at ({}, {})",
            mask.width,
            mask.height,
            mask.x,
            mask.y
        );
        create_masker(mode).mask(&mut frame, &mask);
        overlay::draw_dashed_outline(&mut frame, &mask, overlay::OUTLINE_COLOR);
        let watermark = overlay::draw_watermark(&mut frame, &self.watermark);

        let png = image_codec::encode_png(frame)?;
        Ok(MockOutput {
            image: DataUrl::from_bytes("image/png", &png),
            width,
            height,
            mask,
            watermark,
        })
    }
}

impl Default for MockHideUseCase {
    fn default() -> Self {
        Self::new()
    }
}
