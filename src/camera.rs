// Live camera as lens content.
// Each `next_frame_into` call refreshes a reusable FrameBuffer with the newest
// camera image packed as 0x00RRGGBB, ready for the lens pass.

use crate::error::Error;
use crate::types::{pack_rgb, FrameBuffer};

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Open camera `index` near `width`x`height` and start streaming.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,
        );
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(CameraIndex::Index(index), req)
            .map_err(|e| Error::CameraInit(format!("Create camera {index}: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The driver may settle on a different size than we asked for.
        let actual = cam.resolution();
        log::info!(
            "camera {index} streaming at {}x{} (requested {width}x{height})",
            actual.width(),
            actual.height()
        );

        Ok(Self { cam, width: actual.width(), height: actual.height() })
    }

    /// Block until the next camera frame and write it into `out`,
    /// resizing `out` if the stream changed size.
    pub fn next_frame_into(&mut self, out: &mut FrameBuffer) -> Result<(), Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        let (w, h) = rgb.dimensions();
        if out.width != w as usize || out.height != h as usize {
            log::debug!("camera frame size changed to {w}x{h}");
            *out = FrameBuffer::new(w as usize, h as usize);
        }
        for (dst, px) in out.pixels.iter_mut().zip(rgb.pixels()) {
            *dst = pack_rgb(px[0], px[1], px[2]);
        }
        Ok(())
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
