use image::RgbaImage;
use ndarray::{ArrayView3, ArrayViewMut3};

/// Working raster surface: contiguous RGBA bytes in row-major order.
///
/// Decoding and encoding happen at the `raster` boundary only; maskers and
/// overlays operate on this type directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

pub const CHANNELS: usize = 4;

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame filled with a single RGBA colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self::new(data, width, height)
    }

    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height)
    }

    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Source-over composite of `rgba` onto the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are ignored so callers can draw shapes
    /// that overhang the frame.
    pub fn blend(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        let src_a = rgba[3] as f32 / 255.0;
        if src_a <= 0.0 {
            return;
        }
        let dst_a = self.data[i + 3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        for c in 0..3 {
            let src = rgba[c] as f32 * src_a;
            let dst = self.data[i + c] as f32 * dst_a * (1.0 - src_a);
            let value = if out_a > 0.0 { (src + dst) / out_a } else { 0.0 };
            self.data[i + c] = value.round().clamp(0.0, 255.0) as u8;
        }
        self.data[i + 3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 16]; // 2x2x4
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 4")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let frame = Frame::filled(3, 2, [10, 20, 30, 255]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn test_image_roundtrip() {
        let frame = Frame::filled(4, 3, [1, 2, 3, 4]);
        let image = frame.clone().into_image().unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(Frame::from_image(image), frame);
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let mut frame = Frame::filled(2, 2, [200, 200, 200, 255]);
        frame.blend(1, 1, [0, 0, 0, 255]);
        assert_eq!(frame.pixel(1, 1), [0, 0, 0, 255]);
        assert_eq!(frame.pixel(0, 0), [200, 200, 200, 255]);
    }

    #[test]
    fn test_blend_translucent_mixes() {
        let mut frame = Frame::filled(1, 1, [200, 100, 0, 255]);
        frame.blend(0, 0, [0, 0, 0, 230]);
        let [r, g, b, a] = frame.pixel(0, 0);
        assert_eq!(a, 255);
        assert!((r as i32 - 20).abs() <= 1);
        assert!((g as i32 - 10).abs() <= 1);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_blend_out_of_bounds_ignored() {
        let mut frame = Frame::filled(2, 2, [5, 5, 5, 255]);
        let before = frame.clone();
        frame.blend(-1, 0, [0, 0, 0, 255]);
        frame.blend(0, 2, [0, 0, 0, 255]);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_as_ndarray_shape_and_access() {
        let mut frame = Frame::filled(4, 2, [0, 0, 0, 255]);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[1, 0, 0]] = 255;
        }
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 4]); // (height, width, channels)
        assert_eq!(frame.pixel(0, 1), [255, 0, 0, 255]);
    }
}
