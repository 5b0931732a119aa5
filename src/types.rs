// Core types shared by the kernel, the bridge and the renderer.

/// A point in pixel space: origin top-left, x right, y down.
pub type Point2D = glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// A frame filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Pixel at (x,y). Caller guarantees bounds.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack_rgb(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// Where the lens sits and how far it reaches.
///
/// `center` lives in the same space as the rendered pixels. `radius` is in
/// pixels; a lens with a non-positive (or NaN) radius is inactive and maps
/// every point to itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensParameters {
    pub center: Point2D,
    pub radius: f32,
}

impl LensParameters {
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self { center, radius }
    }

    /// NaN fails the comparison, so it counts as inactive too.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.radius > 0.0 && self.radius.is_finite()
    }

    /// True when `p` is inside (or on) the lens circle.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.is_active() && p.distance(self.center) <= self.radius
    }

    /// Pixel rectangle `(x0, y0, x1, y1)` (end-exclusive) of a `width`x`height`
    /// frame whose pixel centers may fall inside the lens.
    /// `None` when the lens is inactive or entirely off-frame.
    pub fn bounds(&self, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
        if !self.is_active() || width == 0 || height == 0 {
            return None;
        }
        let lo = self.center - glam::Vec2::splat(self.radius);
        let hi = self.center + glam::Vec2::splat(self.radius);

        // Pixel x has its center at x + 0.5.
        let x0 = (lo.x - 0.5).ceil().max(0.0);
        let y0 = (lo.y - 0.5).ceil().max(0.0);
        let x1 = ((hi.x - 0.5).floor() + 1.0).min(width as f32);
        let y1 = ((hi.y - 0.5).floor() + 1.0).min(height as f32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn pack_and_unpack_agree() {
        let px = pack_rgb(0x12, 0xAB, 0xFE);
        assert_eq!(px, 0x0012ABFE);
        assert_eq!(unpack_rgb(px), (0x12, 0xAB, 0xFE));
    }

    #[test]
    fn inactive_lens_contains_nothing() {
        let lens = LensParameters::new(vec2(10.0, 10.0), 0.0);
        assert!(!lens.is_active());
        assert!(!lens.contains(vec2(10.0, 10.0)));
        assert!(!LensParameters::new(vec2(0.0, 0.0), f32::NAN).is_active());
        assert!(!LensParameters::new(vec2(0.0, 0.0), -3.0).is_active());
    }

    #[test]
    fn bounds_cover_the_circle_and_clip_to_frame() {
        let lens = LensParameters::new(vec2(50.0, 50.0), 10.0);
        assert_eq!(lens.bounds(100, 100), Some((40, 40, 60, 60)));

        // Centered on the corner: clipped on the low side.
        let lens = LensParameters::new(vec2(0.0, 0.0), 10.0);
        assert_eq!(lens.bounds(100, 100), Some((0, 0, 10, 10)));

        // Completely outside.
        let lens = LensParameters::new(vec2(-100.0, -100.0), 10.0);
        assert_eq!(lens.bounds(100, 100), None);
    }
}
