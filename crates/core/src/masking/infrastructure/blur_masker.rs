use std::cell::RefCell;

use crate::masking::domain::region_masker::RegionMasker;
use crate::shared::frame::{Frame, CHANNELS};
use crate::shared::region::Region;

use super::box_masker::fill_region;
use super::gaussian;

/// Blur radius, in pixels, of the soft treatment.
pub const DEFAULT_BLUR_SIGMA: f64 = 14.0;

/// 18%-opaque black wash laid over the blurred region.
pub const WASH_COLOR: [u8; 4] = [0, 0, 0, 46];

/// Blurs the region in an isolated buffer, draws it back, then darkens it.
///
/// Edges clamp inside the region, so nothing outside it bleeds in.
pub struct BlurMasker {
    kernel: Vec<f32>,
    roi_buf: RefCell<Vec<u8>>,
    blur_temp: RefCell<Vec<f32>>,
}

impl BlurMasker {
    pub fn new(sigma: f64) -> Self {
        let kernel_size = gaussian::kernel_size_for_sigma(sigma);
        Self {
            kernel: gaussian::gaussian_kernel_1d(kernel_size),
            roi_buf: RefCell::new(Vec::new()),
            blur_temp: RefCell::new(Vec::new()),
        }
    }
}

impl Default for BlurMasker {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_SIGMA)
    }
}

impl RegionMasker for BlurMasker {
    fn mask(&self, frame: &mut Frame, region: &Region) {
        if region.is_empty() {
            return;
        }
        let fw = frame.width() as usize;
        let rw = region.width as usize;
        let rh = region.height as usize;

        let mut roi = self.roi_buf.borrow_mut();
        let mut temp = self.blur_temp.borrow_mut();
        gaussian::extract_roi(frame.data(), fw, CHANNELS, region, &mut roi);

        gaussian::separable_gaussian_blur_with_kernel(
            &mut roi,
            rw,
            rh,
            CHANNELS,
            &self.kernel,
            &mut temp,
        );
        gaussian::write_roi_back(frame.data_mut(), &roi, fw, CHANNELS, region);
        fill_region(frame, region, WASH_COLOR);
    }
}
