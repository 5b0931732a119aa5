// Applies the lens to a whole frame.
// Visual: `dst` becomes `src` with the bulge drawn around the lens center.
// Rows inside the lens run the kernel in parallel; everything else is copied.

use rayon::prelude::*;

use crate::error::Error;
use crate::lens::LensConstants;
use crate::sampler::Sampler;
use crate::types::{FrameBuffer, LensParameters};

pub fn apply_lens(
    src: &FrameBuffer,       // content frame (never modified)
    dst: &mut FrameBuffer,   // what goes to the screen
    lens: &LensParameters,   // read once for the whole frame
    constants: &LensConstants,
    sampler: &Sampler,
) -> Result<(), Error> {
    if !src.same_size(dst) {
        return Err(Error::FrameSize(format!(
            "apply_lens: src {}x{} vs dst {}x{}",
            src.width, src.height, dst.width, dst.height
        )));
    }
    if src.pixels.len() != src.width * src.height || dst.pixels.len() != dst.width * dst.height {
        return Err(Error::FrameSize("apply_lens: pixel count does not match dimensions".into()));
    }

    dst.pixels.copy_from_slice(&src.pixels);

    let Some((x0, y0, x1, y1)) = lens.bounds(src.width, src.height) else {
        return Ok(()); // inactive or off-screen lens: plain copy
    };

    let width = src.width;
    dst.pixels
        .par_chunks_mut(width)
        .enumerate()
        .skip(y0)
        .take(y1 - y0)
        .for_each(|(y, row)| {
            let py = y as f32 + 0.5;
            for (x, out) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let p = glam::vec2(x as f32 + 0.5, py);
                if !lens.contains(p) {
                    continue;
                }
                let s = constants.sample_coord(p, lens);
                *out = sampler.sample(src, s);
            }
        });

    Ok(())
}
