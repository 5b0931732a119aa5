//! Radial fisheye kernel.
//!
//! Maps an output pixel coordinate to the coordinate the source content
//! should be sampled at. Outside the lens the mapping is the identity; inside
//! it pulls samples toward the center (magnification) and bulges harder as
//! the normalized distance approaches the edge.
//!
//! The kernel is pure: it reads only its arguments, so any number of pixels
//! may be evaluated in parallel.

use crate::types::{LensParameters, Point2D};

/// Shape of the bulge.
///
/// `factor = 1 + distortion_strength * (dist / radius) ^ falloff_exponent`
/// and the sample lands at `center + to_center / (zoom * factor)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensConstants {
    /// Divisor for the whole lens; bigger = stronger magnification.
    pub zoom: f32,
    /// Extra divisor reached at the lens edge.
    pub distortion_strength: f32,
    /// How sharply the extra divisor concentrates toward the edge.
    pub falloff_exponent: f32,
}

impl LensConstants {
    pub const DEFAULT: Self = Self {
        zoom: 1.7,
        distortion_strength: 0.8,
        falloff_exponent: 20.0,
    };

    /// Sampling coordinate for output coordinate `p`.
    #[inline]
    pub fn sample_coord(&self, p: Point2D, lens: &LensParameters) -> Point2D {
        if !lens.is_active() {
            return p;
        }
        let to_center = p - lens.center;
        let dist = to_center.length();
        if dist > lens.radius {
            return p;
        }
        let r = dist / lens.radius;
        let factor = 1.0 + self.distortion_strength * r.powf(self.falloff_exponent);
        let divisor = self.zoom * factor;
        // Constants that zero or flip the divisor switch the lens off.
        if !(divisor > 0.0 && divisor.is_finite()) {
            return p;
        }
        lens.center + to_center / divisor
    }

    /// How far the sample for `p` moved away from `p` itself.
    #[inline]
    pub fn displacement(&self, p: Point2D, lens: &LensParameters) -> f32 {
        p.distance(self.sample_coord(p, lens))
    }
}

impl Default for LensConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`LensConstants::sample_coord`] with the default constants.
#[inline]
pub fn sample_coord(p: Point2D, lens: &LensParameters) -> Point2D {
    LensConstants::DEFAULT.sample_coord(p, lens)
}
