// One error type for the whole crate.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    CameraInit(String),   // Opening/starting the camera failed
    CameraFrame(String),  // Grabbing/decoding a frame failed
    ImageLoad(String),    // Reading/decoding a still image failed
    FrameSize(String),    // Two buffers that must match in size don't
    Config(String),       // A command-line argument was missing or malformed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::CameraInit(s) => write!(f, "Camera init error: {s}"),
            Error::CameraFrame(s) => write!(f, "Camera frame error: {s}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::FrameSize(s) => write!(f, "Frame size error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let e = Error::FrameSize("src 4x4 vs dst 2x2".into());
        assert_eq!(e.to_string(), "Frame size error: src 4x4 vs dst 2x2");

        let e = Error::Config("--radius expects a number".into());
        assert!(e.to_string().starts_with("Config error:"));
    }
}
