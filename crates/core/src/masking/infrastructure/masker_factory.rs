use crate::masking::domain::region_masker::RegionMasker;
use crate::shared::hide_mode::HideMode;

use super::blur_masker::BlurMasker;
use super::box_masker::BoxMasker;
use super::pixelate_masker::PixelateMasker;

/// Creates the masker implementing a hide mode.
pub fn create_masker(mode: HideMode) -> Box<dyn RegionMasker> {
    log::debug!("Using {mode} masker");
    match mode {
        HideMode::Box => Box::new(BoxMasker::new()),
        HideMode::Pixelate => Box::new(PixelateMasker::new()),
        HideMode::Blur => Box::new(BlurMasker::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::Frame;
    use crate::shared::region::Region;

    #[test]
    fn test_every_mode_changes_region() {
        for &mode in HideMode::ALL {
            let mut frame = Frame::filled(40, 40, [220, 220, 220, 255]);
            // Give pixelate and blur something to work with.
            frame.data_mut()[(12 * 40 + 12) * 4] = 0;
            let original = frame.clone();

            create_masker(mode).mask(&mut frame, &Region::new(10, 10, 20, 20));
            assert_ne!(frame, original, "{mode} left the frame untouched");
        }
    }
}
