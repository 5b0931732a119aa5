// Where the lens content comes from.
// Visual: the picture under the lens is the live camera, a still image
// stretched to the window, or the built-in demo screen.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbImage;

use crate::camera::CameraCapture;
use crate::config::SourceKind;
use crate::error::Error;
use crate::scene;
use crate::types::{pack_rgb, FrameBuffer};

pub enum ContentSource {
    Camera { cam: CameraCapture, frame: FrameBuffer },
    Still(FrameBuffer),
}

impl ContentSource {
    /// Open the configured source. `width`/`height` is the requested window
    /// size; a camera may deliver something else (see [`Self::resolution`]).
    pub fn open(kind: &SourceKind, width: usize, height: usize) -> Result<Self, Error> {
        match kind {
            SourceKind::Scene => {
                log::info!("content: demo screen {width}x{height}");
                Ok(ContentSource::Still(scene::demo_screen(width, height)))
            }
            SourceKind::Image(path) => {
                log::info!("content: image {}", path.display());
                Ok(ContentSource::Still(load_still(path, width, height)?))
            }
            SourceKind::Camera(index) => {
                let cam = CameraCapture::new(*index, width as u32, height as u32)?;
                let (w, h) = cam.resolution();
                Ok(ContentSource::Camera { cam, frame: FrameBuffer::new(w as usize, h as usize) })
            }
        }
    }

    /// Content for this frame. Blocks for the next camera image when live.
    pub fn frame(&mut self) -> Result<&FrameBuffer, Error> {
        match self {
            ContentSource::Camera { cam, frame } => {
                cam.next_frame_into(frame)?;
                Ok(frame)
            }
            ContentSource::Still(fb) => Ok(fb),
        }
    }

    /// Size of the frames this source hands out.
    pub fn resolution(&self) -> (usize, usize) {
        match self {
            ContentSource::Camera { frame, .. } => (frame.width, frame.height),
            ContentSource::Still(fb) => (fb.width, fb.height),
        }
    }
}

/// Decode an image file and stretch it to `width`x`height`.
pub fn load_still(path: &Path, width: usize, height: usize) -> Result<FrameBuffer, Error> {
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
        .to_rgb8();
    let img = if img.dimensions() == (width as u32, height as u32) {
        img
    } else {
        log::debug!("resizing {}x{} image to {width}x{height}", img.width(), img.height());
        image::imageops::resize(&img, width as u32, height as u32, FilterType::Triangle)
    };
    Ok(from_rgb_image(&img))
}

/// Pack an RGB image into a 0x00RRGGBB frame.
pub fn from_rgb_image(img: &RgbImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    FrameBuffer {
        width: w as usize,
        height: h as usize,
        pixels: img.pixels().map(|p| pack_rgb(p[0], p[1], p[2])).collect(),
    }
}
