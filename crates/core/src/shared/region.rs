/// An axis-aligned rectangle in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` rectangle centered in a frame, rounding the
    /// offset half-up.
    ///
    /// Dimensions larger than the frame are clamped to it first, so the
    /// result always lies within the frame.
    pub fn centered(frame_width: u32, frame_height: u32, width: u32, height: u32) -> Self {
        let width = width.min(frame_width);
        let height = height.min(frame_height);
        Self {
            x: (frame_width - width).div_ceil(2),
            y: (frame_height - height).div_ceil(2),
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn shorter_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    pub fn is_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.right() <= frame_width && self.bottom() <= frame_height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_centered_even_split() {
        let r = Region::centered(100, 80, 40, 20);
        assert_eq!(r, Region::new(30, 30, 40, 20));
        let (cx, cy) = r.center();
        assert_relative_eq!(cx, 50.0);
        assert_relative_eq!(cy, 40.0);
    }

    #[test]
    fn test_centered_odd_remainder_rounds_up() {
        // (101 - 40) / 2 = 30.5 -> 31
        let r = Region::centered(101, 80, 40, 20);
        assert_eq!(r.x, 31);
    }

    #[test]
    fn test_centered_clamps_oversized() {
        let r = Region::centered(50, 30, 64, 64);
        assert_eq!(r, Region::new(0, 0, 50, 30));
        assert!(r.is_within(50, 30));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(63, 200)]
    #[case(1800, 1201)]
    fn test_centered_always_within(#[case] w: u32, #[case] h: u32) {
        let r = Region::centered(w, h, 64, 64);
        assert!(r.is_within(w, h));
        let (cx, cy) = r.center();
        assert!((cx - w as f64 / 2.0).abs() <= 1.0);
        assert!((cy - h as f64 / 2.0).abs() <= 1.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Region::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(9, 12));
    }

    #[test]
    fn test_shorter_side_and_empty() {
        assert_eq!(Region::new(0, 0, 30, 12).shorter_side(), 12);
        assert!(Region::new(0, 0, 0, 12).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }
}
