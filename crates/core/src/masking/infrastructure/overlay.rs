//! Decorations drawn after masking: the dashed outline around the mask
//! rectangle and the corner watermark that marks a simulated result.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::shared::frame::Frame;
use crate::shared::region::Region;

pub const OUTLINE_COLOR: [u8; 4] = [255, 255, 255, 235];
pub const OUTLINE_DASH: u32 = 8;
pub const OUTLINE_GAP: u32 = 6;

pub const WATERMARK_FILL: [u8; 4] = [255, 255, 255, 217];
pub const WATERMARK_STROKE: [u8; 4] = [0, 0, 0, 102];
const WATERMARK_RIGHT_INSET: u32 = 16;
const WATERMARK_BASELINE_INSET: u32 = 18;
const GLYPH_SIZE: u32 = 8;

/// Stroke width for a mask outline: 2% of the shorter side, at least 2px.
pub fn outline_width(region: &Region) -> u32 {
    ((region.shorter_side() as f64 * 0.02).floor() as u32).max(2)
}

/// Watermark font size: 2.4% of the frame width, at least 16px.
pub fn watermark_font_size(frame_width: u32) -> u32 {
    ((frame_width as f64 * 0.024).round() as u32).max(16)
}

/// Strokes a dashed rectangle centred on the edges of `region`.
///
/// The dash pattern runs continuously around the perimeter, clockwise from
/// the top-left corner. Each pixel is composited at most once so overlapping
/// corners do not double up the translucency.
pub fn draw_dashed_outline(frame: &mut Frame, region: &Region, color: [u8; 4]) {
    if region.is_empty() {
        return;
    }
    let line = outline_width(region) as i64;
    let inner = -(line / 2);
    let period = (OUTLINE_DASH + OUTLINE_GAP) as i64;

    let (x0, y0) = (region.x as i64, region.y as i64);
    let (x1, y1) = (region.right() as i64, region.bottom() as i64);
    // (start, step, length, horizontal)
    let sides = [
        ((x0, y0), (1, 0), x1 - x0, true),
        ((x1, y0), (0, 1), y1 - y0, false),
        ((x1, y1), (-1, 0), x1 - x0, true),
        ((x0, y1), (0, -1), y1 - y0, false),
    ];

    let mut coverage = Coverage::new(frame.width(), frame.height());
    let mut distance = 0i64;
    for ((sx, sy), (dx, dy), length, horizontal) in sides {
        for t in 0..length {
            if (distance + t) % period < OUTLINE_DASH as i64 {
                let (px, py) = (sx + dx * t, sy + dy * t);
                for o in inner..inner + line {
                    if horizontal {
                        coverage.mark(px, py + o);
                    } else {
                        coverage.mark(px + o, py);
                    }
                }
            }
        }
        distance += length;
    }
    coverage.composite(frame, color);
}

/// Draws bold right-aligned `text` near the bottom-right corner: a dark
/// outline behind a light fill.
///
/// Returns the visible bounds of the drawn text, or `None` if the frame is
/// too small for any of it to land inside.
pub fn draw_watermark(frame: &mut Frame, text: &str) -> Option<Region> {
    let font_size = watermark_font_size(frame.width());
    let scale = ((font_size as f64 / GLYPH_SIZE as f64).round() as i64).max(1);
    let advance = GLYPH_SIZE as i64 * scale;
    let chars: Vec<char> = text.chars().collect();
    let text_width = chars.len() as i64 * advance;

    let right = frame.width() as i64 - WATERMARK_RIGHT_INSET as i64;
    let baseline = frame.height() as i64 - WATERMARK_BASELINE_INSET as i64;
    let left = right - text_width;
    let top = baseline - advance;

    let mut fill = Coverage::new(frame.width(), frame.height());
    for (i, ch) in chars.iter().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(*ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let origin_x = left + i as i64 * advance;
        for (row_idx, row_bits) in glyph.iter().enumerate() {
            for col_idx in 0..GLYPH_SIZE as i64 {
                if (row_bits >> col_idx) & 1 == 0 {
                    continue;
                }
                let px = origin_x + col_idx * scale;
                let py = top + row_idx as i64 * scale;
                for sy in 0..scale {
                    // One extra column per glyph pixel emboldens the face.
                    for sx in 0..=scale {
                        fill.mark(px + sx, py + sy);
                    }
                }
            }
        }
    }

    let stroke = fill.dilated();
    stroke.composite(frame, WATERMARK_STROKE);
    fill.composite(frame, WATERMARK_FILL);
    stroke.bounds()
}

/// Per-pixel boolean mask over a frame.
struct Coverage {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Coverage {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    fn mark(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = true;
    }

    fn is_set(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Grows the mask by one pixel in every direction.
    fn dilated(&self) -> Self {
        let mut out = Self::new(self.width, self.height);
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                let hit = (-1..=1).any(|dy| (-1..=1).any(|dx| self.is_set(x + dx, y + dy)));
                if hit {
                    out.mark(x, y);
                }
            }
        }
        out
    }

    fn composite(&self, frame: &mut Frame, color: [u8; 4]) {
        for (i, &set) in self.cells.iter().enumerate() {
            if set {
                let x = (i % self.width as usize) as i64;
                let y = (i / self.width as usize) as i64;
                frame.blend(x, y, color);
            }
        }
    }

    fn bounds(&self) -> Option<Region> {
        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0u32, 0u32);
        let mut any = false;
        for (i, &set) in self.cells.iter().enumerate() {
            if set {
                let x = (i % self.width as usize) as u32;
                let y = (i / self.width as usize) as u32;
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x), max.1.max(y));
                any = true;
            }
        }
        any.then(|| Region::new(min.0, min.1, max.0 - min.0 + 1, max.1 - min.1 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GREY: [u8; 4] = [100, 100, 100, 255];

    #[rstest]
    #[case(Region::new(0, 0, 64, 64), 2)]
    #[case(Region::new(0, 0, 540, 468), 9)]
    #[case(Region::new(0, 0, 10, 10), 2)]
    fn test_outline_width(#[case] region: Region, #[case] expected: u32) {
        assert_eq!(outline_width(&region), expected);
    }

    #[rstest]
    #[case(100, 16)]
    #[case(1000, 24)]
    #[case(1800, 43)]
    fn test_watermark_font_size(#[case] width: u32, #[case] expected: u32) {
        assert_eq!(watermark_font_size(width), expected);
    }

    #[test]
    fn test_outline_follows_dash_pattern_on_top_edge() {
        let mut frame = Frame::filled(100, 100, GREY);
        let region = Region::new(20, 20, 60, 60);
        draw_dashed_outline(&mut frame, &region, [255, 255, 255, 255]);

        // Top edge is stroked on rows 19 and 20; dashes cover x = 20..28, 34..42.
        assert_eq!(frame.pixel(20, 20), [255, 255, 255, 255]);
        assert_eq!(frame.pixel(27, 19), [255, 255, 255, 255]);
        assert_eq!(frame.pixel(28, 20), GREY);
        assert_eq!(frame.pixel(33, 20), GREY);
        assert_eq!(frame.pixel(34, 20), [255, 255, 255, 255]);
        // Interior and far exterior untouched.
        assert_eq!(frame.pixel(50, 50), GREY);
        assert_eq!(frame.pixel(5, 5), GREY);
    }

    #[test]
    fn test_outline_translucent_corner_not_doubled() {
        let mut frame = Frame::filled(50, 50, GREY);
        let region = Region::new(10, 10, 30, 30);
        draw_dashed_outline(&mut frame, &region, OUTLINE_COLOR);
        // (39, 10) lies on both the top and right strokes; (12, 10) only on the top.
        assert_eq!(frame.pixel(39, 10), frame.pixel(12, 10));
        assert_ne!(frame.pixel(12, 10), GREY);
    }

    #[test]
    fn test_watermark_lands_in_bottom_right() {
        let mut frame = Frame::filled(400, 300, GREY);
        let bounds = draw_watermark(&mut frame, "MOCK RESULT").unwrap();

        assert!(bounds.right() <= 400 - 16 + 2);
        assert!(bounds.bottom() <= 300 - 18 + 2);
        assert!(bounds.x > 200);
        assert!(bounds.y > 250);

        let lit = (bounds.y..bounds.bottom())
            .flat_map(|y| (bounds.x..bounds.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y)[0] > 200)
            .count();
        assert!(lit > 50, "expected light glyph pixels, found {lit}");
        assert_eq!(frame.pixel(10, 10), GREY);
    }

    #[test]
    fn test_watermark_has_dark_outline() {
        let mut frame = Frame::filled(400, 300, GREY);
        let bounds = draw_watermark(&mut frame, "MOCK RESULT").unwrap();
        let dark = (bounds.y..bounds.bottom())
            .flat_map(|y| (bounds.x..bounds.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y)[0] < 100)
            .count();
        assert!(dark > 0);
    }

    #[test]
    fn test_watermark_on_tiny_frame_is_clipped() {
        let mut frame = Frame::filled(8, 8, GREY);
        assert!(draw_watermark(&mut frame, "MOCK RESULT").is_none());
    }
}
