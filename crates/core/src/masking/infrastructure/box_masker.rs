use crate::masking::domain::region_masker::RegionMasker;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// 90%-opaque black.
pub const BOX_COLOR: [u8; 4] = [0, 0, 0, 230];

/// Covers the region with a near-opaque black block.
pub struct BoxMasker {
    color: [u8; 4],
}

impl BoxMasker {
    pub fn new() -> Self {
        Self { color: BOX_COLOR }
    }
}

impl Default for BoxMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionMasker for BoxMasker {
    fn mask(&self, frame: &mut Frame, region: &Region) {
        fill_region(frame, region, self.color);
    }
}

/// Source-over fill of `color` across `region`, clipped to the frame.
pub fn fill_region(frame: &mut Frame, region: &Region, color: [u8; 4]) {
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            frame.blend(x as i64, y as i64, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darkens_region_only() {
        let mut frame = Frame::filled(20, 20, [200, 200, 200, 255]);
        BoxMasker::new().mask(&mut frame, &Region::new(5, 5, 10, 10));

        let inside = frame.pixel(5, 5);
        assert!(inside[0] <= 21, "inside should be near black, got {inside:?}");
        assert_eq!(inside[3], 255);
        assert_eq!(frame.pixel(4, 5), [200, 200, 200, 255]);
        assert_eq!(frame.pixel(15, 15), [200, 200, 200, 255]);
    }

    #[test]
    fn test_box_is_not_fully_opaque() {
        let mut frame = Frame::filled(4, 4, [255, 255, 255, 255]);
        BoxMasker::new().mask(&mut frame, &Region::new(0, 0, 4, 4));
        assert!(frame.pixel(2, 2)[0] > 0);
    }

    #[test]
    fn test_empty_region_is_noop() {
        let mut frame = Frame::filled(4, 4, [9, 9, 9, 255]);
        let before = frame.clone();
        BoxMasker::new().mask(&mut frame, &Region::new(1, 1, 0, 3));
        assert_eq!(frame, before);
    }
}
