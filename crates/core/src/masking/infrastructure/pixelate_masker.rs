use crate::masking::domain::region_masker::RegionMasker;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::box_masker::fill_region;

const MIN_BLOCK_SIZE: u32 = 8;
const BLOCKS_PER_SHORT_SIDE: u32 = 15;

/// Mosaic treatment: flat square blocks coloured from each block's
/// top-left pixel.
///
/// Every block is a full square, so the last row and column of blocks
/// spill past the region's far edges, bounded only by the frame.
pub struct PixelateMasker;

impl PixelateMasker {
    pub fn new() -> Self {
        Self
    }

    /// Block side for a region: `max(8, floor(min(w, h) / 15))`.
    pub fn block_size(region: &Region) -> u32 {
        (region.shorter_side() / BLOCKS_PER_SHORT_SIDE).max(MIN_BLOCK_SIZE)
    }
}

impl Default for PixelateMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionMasker for PixelateMasker {
    fn mask(&self, frame: &mut Frame, region: &Region) {
        if region.is_empty() {
            return;
        }
        let block = Self::block_size(region);

        for row in (0..region.height).step_by(block as usize) {
            for col in (0..region.width).step_by(block as usize) {
                let sx = (region.x + col) as usize;
                let sy = (region.y + row) as usize;
                let color = {
                    let view = frame.as_ndarray();
                    [
                        view[[sy, sx, 0]],
                        view[[sy, sx, 1]],
                        view[[sy, sx, 2]],
                        view[[sy, sx, 3]],
                    ]
                };

                // Blocks are disjoint, so filling this one never disturbs
                // a sample still to be read.
                let cell = Region::new(region.x + col, region.y + row, block, block);
                fill_region(frame, &cell, color);
            }
        }
    }
}
