//! Pointer-driven fisheye lens over a software-rendered frame.
//!
//! The core is two small pieces: [`lens`], a pure kernel mapping each output
//! pixel to the point it should sample, and [`bridge`], which moves the lens
//! center with the pointer. [`render`] runs the kernel over a whole frame in
//! parallel and [`shader`] emits the same kernel as WGSL. The remaining
//! modules back the demo window.

pub mod bridge;
pub mod camera;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod lens;
pub mod logging;
pub mod pointer;
pub mod render;
pub mod sampler;
pub mod scene;
pub mod shader;
pub mod source;
pub mod types;

pub use bridge::{LensBridge, PointerEvent, PointerState};
pub use error::Error;
pub use lens::{sample_coord, LensConstants};
pub use render::apply_lens;
pub use sampler::{Sampler, SamplingPolicy};
pub use types::{FrameBuffer, LensParameters, Point2D};
