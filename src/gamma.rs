// sRGB <-> linear-light tables for gamma-correct filtering.
// Bilinear taps blended in linear light keep edges inside the lens from
// darkening where bright and dark content meet.

use crate::types::{pack_rgb, unpack_rgb};

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), index = (linear * 4095).round()
    linear_to_srgb: [u8; 4096],
}

impl GammaLut {
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, out) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *out = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, out) in l2s.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *out = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// 0x00RRGGBB -> linear [r, g, b].
    #[inline]
    pub fn unpack_linear(&self, px: u32) -> [f32; 3] {
        let (r, g, b) = unpack_rgb(px);
        [self.srgb_u8_to_linear(r), self.srgb_u8_to_linear(g), self.srgb_u8_to_linear(b)]
    }

    /// Linear [r, g, b] -> 0x00RRGGBB.
    #[inline]
    pub fn pack_linear(&self, c: [f32; 3]) -> u32 {
        pack_rgb(
            self.linear_to_srgb_u8(c[0]),
            self.linear_to_srgb_u8(c[1]),
            self.linear_to_srgb_u8(c[2]),
        )
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_srgb_value_survives_a_round_trip() {
        let lut = GammaLut::new();
        for v in 0..=255u8 {
            assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(v)), v, "value {v}");
        }
    }

    #[test]
    fn out_of_range_linear_is_clamped() {
        let lut = GammaLut::new();
        assert_eq!(lut.linear_to_srgb_u8(-0.5), 0);
        assert_eq!(lut.linear_to_srgb_u8(7.0), 255);
    }

    #[test]
    fn linear_midpoint_is_brighter_than_srgb_midpoint() {
        let lut = GammaLut::new();
        let mid = lut.linear_to_srgb_u8(0.5 * lut.srgb_u8_to_linear(255));
        assert!(mid > 128, "got {mid}");
        assert_eq!(lut.pack_linear(lut.unpack_linear(0x00336699)), 0x00336699);
    }
}
