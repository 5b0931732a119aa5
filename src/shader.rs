//! GPU form of the lens kernel.
//!
//! The CPU renderer is the reference. This module emits the same mapping as a
//! WGSL fragment stage so a wgpu pipeline can run it over a content texture:
//! uniforms at `@group(0) @binding(0)`, the content texture at binding 1 and
//! its sampler at binding 2. The texture is addressed in pixels through
//! `textureDimensions`, so `center` and `radius` use the same units as
//! [`LensParameters`].

use crate::lens::LensConstants;
use crate::types::LensParameters;

/// Uniform block for the lens fragment stage.
/// Layout must match the WGSL struct (vec2 needs 8-byte alignment).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LensUniforms {
    pub center: [f32; 2], // offset 0, size 8
    pub radius: f32,      // offset 8, size 4
    pub _pad: f32,        // offset 12, size 4
}

impl From<&LensParameters> for LensUniforms {
    fn from(lens: &LensParameters) -> Self {
        Self {
            center: lens.center.to_array(),
            // The shader treats radius <= 0 as "no lens"; NaN would slip through.
            radius: if lens.is_active() { lens.radius } else { 0.0 },
            _pad: 0.0,
        }
    }
}

/// WGSL fragment source with `constants` baked in.
pub fn wgsl_source(constants: &LensConstants) -> String {
    format!(
        r#"struct LensUniforms {{
    center: vec2<f32>,
    radius: f32,
    _pad: f32,
}}

@group(0) @binding(0) var<uniform> lens: LensUniforms;
@group(0) @binding(1) var content: texture_2d<f32>;
@group(0) @binding(2) var content_sampler: sampler;

const ZOOM: f32 = {zoom:?};
const DISTORTION: f32 = {distortion:?};
const FALLOFF: f32 = {falloff:?};

fn lens_sample_coord(frag: vec2<f32>) -> vec2<f32> {{
    if (lens.radius <= 0.0) {{
        return frag;
    }}
    let to_center = frag - lens.center;
    let dist = length(to_center);
    if (dist > lens.radius) {{
        return frag;
    }}
    let r = dist / lens.radius;
    let factor = 1.0 + DISTORTION * pow(r, FALLOFF);
    return lens.center + to_center / (ZOOM * factor);
}}

@fragment
fn fs_main(@builtin(position) frag_coord: vec4<f32>) -> @location(0) vec4<f32> {{
    let size = vec2<f32>(textureDimensions(content));
    let s = lens_sample_coord(frag_coord.xy);
    return textureSample(content, content_sampler, s / size);
}}
"#,
        zoom = constants.zoom,
        distortion = constants.distortion_strength,
        falloff = constants.falloff_exponent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn uniforms_are_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<LensUniforms>(), 16);
        let u = LensUniforms::from(&LensParameters::new(vec2(400.0, 300.0), 120.0));
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..12], &120.0f32.to_ne_bytes());
    }

    #[test]
    fn nan_radius_is_sent_as_inactive() {
        let u = LensUniforms::from(&LensParameters::new(vec2(1.0, 1.0), f32::NAN));
        assert_eq!(u.radius, 0.0);
    }

    #[test]
    fn generated_source_is_valid_wgsl() {
        use naga::valid::{Capabilities, ValidationFlags, Validator};

        for constants in [
            LensConstants::DEFAULT,
            LensConstants { zoom: 2.0, distortion_strength: 0.0, falloff_exponent: 3.0 },
        ] {
            let src = wgsl_source(&constants);
            let module = naga::front::wgsl::parse_str(&src)
                .unwrap_or_else(|e| panic!("{}", e.emit_to_string(&src)));
            Validator::new(ValidationFlags::all(), Capabilities::default())
                .validate(&module)
                .unwrap_or_else(|e| panic!("{e:?}"));
            assert!(module.entry_points.iter().any(|ep| ep.name == "fs_main"));
        }
    }

    #[test]
    fn source_bakes_in_the_constants() {
        let src = wgsl_source(&LensConstants::DEFAULT);
        assert!(src.contains("const ZOOM: f32 = 1.7;"));
        assert!(src.contains("const DISTORTION: f32 = 0.8;"));
        assert!(src.contains("const FALLOFF: f32 = 20.0;"));
        assert!(src.contains("fn fs_main"));

        let custom = LensConstants { zoom: 2.0, ..LensConstants::DEFAULT };
        assert!(wgsl_source(&custom).contains("const ZOOM: f32 = 2.0;"));
    }
}
