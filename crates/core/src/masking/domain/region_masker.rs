use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Obscures one rectangular region of a frame in place.
///
/// Pixels before the region's left and top edges are never touched. Only
/// pixelation may spill past its right and bottom edges.
pub trait RegionMasker: Send {
    fn mask(&self, frame: &mut Frame, region: &Region);
}
