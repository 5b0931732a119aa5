// Reads the source frame at a continuous coordinate.
// Convention: pixel (x, y) covers [x, x+1) x [y, y+1) and its center is
// (x + 0.5, y + 0.5). Sampling at a pixel center returns that pixel exactly,
// whatever the policy. Coordinates past the border clamp to the edge pixel.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::{pack_rgb, unpack_rgb, FrameBuffer, Point2D};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SamplingPolicy {
    /// Pixel under the coordinate.
    Nearest,
    /// 2x2 taps weighted in sRGB space (what most GPU samplers do).
    #[default]
    Bilinear,
    /// 2x2 taps weighted in linear light.
    LinearLight,
}

impl SamplingPolicy {
    /// Next policy when the user presses P.
    pub fn next(self) -> Self {
        match self {
            SamplingPolicy::Nearest => SamplingPolicy::Bilinear,
            SamplingPolicy::Bilinear => SamplingPolicy::LinearLight,
            SamplingPolicy::LinearLight => SamplingPolicy::Nearest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SamplingPolicy::Nearest => "NEAREST",
            SamplingPolicy::Bilinear => "BILINEAR",
            SamplingPolicy::LinearLight => "LINEAR",
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(SamplingPolicy::Nearest),
            "bilinear" => Ok(SamplingPolicy::Bilinear),
            "linear" | "linear-light" => Ok(SamplingPolicy::LinearLight),
            other => Err(Error::Config(format!(
                "unknown sampling policy `{other}` (expected nearest, bilinear or linear)"
            ))),
        }
    }
}

pub struct Sampler {
    policy: SamplingPolicy,
    lut: GammaLut,
}

impl Sampler {
    pub fn new(policy: SamplingPolicy) -> Self {
        Self { policy, lut: GammaLut::new() }
    }

    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SamplingPolicy) {
        self.policy = policy;
    }

    /// Color of `src` at continuous coordinate `s`. An empty frame reads as black.
    #[inline]
    pub fn sample(&self, src: &FrameBuffer, s: Point2D) -> u32 {
        if src.width == 0 || src.height == 0 || src.pixels.is_empty() {
            return 0;
        }
        match self.policy {
            SamplingPolicy::Nearest => {
                let x = clamp_index(s.x.floor(), src.width);
                let y = clamp_index(s.y.floor(), src.height);
                src.at(x, y)
            }
            SamplingPolicy::Bilinear => {
                let t = Taps::new(src, s);
                let (r, g, b) = (
                    t.mix(|p| unpack_rgb(p).0 as f32),
                    t.mix(|p| unpack_rgb(p).1 as f32),
                    t.mix(|p| unpack_rgb(p).2 as f32),
                );
                pack_rgb(to_u8(r), to_u8(g), to_u8(b))
            }
            SamplingPolicy::LinearLight => {
                let t = Taps::new(src, s);
                let lut = &self.lut;
                let c = [
                    t.mix(|p| lut.unpack_linear(p)[0]),
                    t.mix(|p| lut.unpack_linear(p)[1]),
                    t.mix(|p| lut.unpack_linear(p)[2]),
                ];
                lut.pack_linear(c)
            }
        }
    }
}

#[inline]
fn clamp_index(v: f32, len: usize) -> usize {
    // NaN casts to 0.
    (v.max(0.0) as usize).min(len.saturating_sub(1))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Four neighbouring pixels and the fractional position between them.
struct Taps {
    p00: u32,
    p10: u32,
    p01: u32,
    p11: u32,
    fx: f32,
    fy: f32,
}

impl Taps {
    #[inline]
    fn new(src: &FrameBuffer, s: Point2D) -> Self {
        // Shift so integer coordinates land on pixel centers.
        let u = s.x - 0.5;
        let v = s.y - 0.5;
        let x0f = u.floor();
        let y0f = v.floor();
        let fx = (u - x0f).clamp(0.0, 1.0);
        let fy = (v - y0f).clamp(0.0, 1.0);

        let x0 = clamp_index(x0f, src.width);
        let y0 = clamp_index(y0f, src.height);
        let x1 = clamp_index(x0f + 1.0, src.width);
        let y1 = clamp_index(y0f + 1.0, src.height);

        Self {
            p00: src.at(x0, y0),
            p10: src.at(x1, y0),
            p01: src.at(x0, y1),
            p11: src.at(x1, y1),
            fx,
            fy,
        }
    }

    #[inline]
    fn mix(&self, channel: impl Fn(u32) -> f32) -> f32 {
        let top = channel(self.p00) * (1.0 - self.fx) + channel(self.p10) * self.fx;
        let bottom = channel(self.p01) * (1.0 - self.fx) + channel(self.p11) * self.fx;
        top * (1.0 - self.fy) + bottom * self.fy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const ALL_POLICIES: [SamplingPolicy; 3] =
        [SamplingPolicy::Nearest, SamplingPolicy::Bilinear, SamplingPolicy::LinearLight];

    fn two_by_one() -> FrameBuffer {
        FrameBuffer { width: 2, height: 1, pixels: vec![0x00000000, 0x00C8C8C8] }
    }

    #[test]
    fn pixel_centers_are_exact_for_every_policy() {
        let src = FrameBuffer {
            width: 3,
            height: 2,
            pixels: vec![0x00112233, 0x00445566, 0x00778899, 0x00AABBCC, 0x00DDEEFF, 0x00102030],
        };
        for policy in ALL_POLICIES {
            let sampler = Sampler::new(policy);
            for y in 0..2 {
                for x in 0..3 {
                    let s = vec2(x as f32 + 0.5, y as f32 + 0.5);
                    assert_eq!(sampler.sample(&src, s), src.at(x, y), "{policy} at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn bilinear_midpoint_averages() {
        let sampler = Sampler::new(SamplingPolicy::Bilinear);
        assert_eq!(sampler.sample(&two_by_one(), vec2(1.0, 0.5)), 0x00646464);
    }

    #[test]
    fn linear_light_midpoint_is_brighter() {
        let sampler = Sampler::new(SamplingPolicy::LinearLight);
        let (r, _, _) = unpack_rgb(sampler.sample(&two_by_one(), vec2(1.0, 0.5)));
        assert!(r > 0x64, "got {r}");
    }

    #[test]
    fn coordinates_clamp_to_the_edge() {
        let src = two_by_one();
        for policy in ALL_POLICIES {
            let sampler = Sampler::new(policy);
            assert_eq!(sampler.sample(&src, vec2(-40.0, -3.0)), 0x00000000);
            assert_eq!(sampler.sample(&src, vec2(90.0, 12.0)), 0x00C8C8C8);
        }
    }

    #[test]
    fn empty_frames_read_as_black() {
        for policy in ALL_POLICIES {
            let sampler = Sampler::new(policy);
            for (w, h) in [(0, 0), (0, 5), (5, 0)] {
                let src = FrameBuffer::new(w, h);
                assert_eq!(sampler.sample(&src, vec2(1.5, 1.5)), 0, "{policy} on {w}x{h}");
            }
        }
    }

    #[test]
    fn policy_parsing_and_cycle() {
        assert_eq!("Nearest".parse::<SamplingPolicy>().ok(), Some(SamplingPolicy::Nearest));
        assert_eq!("linear".parse::<SamplingPolicy>().ok(), Some(SamplingPolicy::LinearLight));
        assert!("cubic".parse::<SamplingPolicy>().is_err());

        let start = SamplingPolicy::default();
        assert_eq!(start.next().next().next(), start);
    }
}
