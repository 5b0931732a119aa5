// Startup settings for the demo window.
// Defaults reproduce the phone demo: 120 dp lens at (400, 400) over the
// demo screen. Everything can be overridden from the command line.

use std::path::PathBuf;

use crate::bridge::{radius_from_dp, DEFAULT_CENTER, DEFAULT_RADIUS_DP};
use crate::error::Error;
use crate::lens::LensConstants;
use crate::sampler::SamplingPolicy;
use crate::types::Point2D;

pub const USAGE: &str = "usage: fisheye-lens [--scene | --camera N | --image PATH] [--size WxH] \
[--radius DP] [--density F] [--center X,Y] [--sampling nearest|bilinear|linear] \
[--zoom F] [--distortion F] [--falloff F] [--no-outline]";

#[derive(Clone, Debug, PartialEq)]
pub enum SourceKind {
    Scene,
    Camera(u32),
    Image(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub source: SourceKind,
    pub radius_dp: f32,
    pub density: f32, // physical pixels per dp
    pub initial_center: Point2D,
    pub sampling: SamplingPolicy,
    pub constants: LensConstants,
    pub show_outline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 720,
            height: 900,
            source: SourceKind::Scene,
            radius_dp: DEFAULT_RADIUS_DP,
            density: 1.0,
            initial_center: DEFAULT_CENTER,
            sampling: SamplingPolicy::default(),
            constants: LensConstants::DEFAULT,
            show_outline: true,
        }
    }
}

impl Config {
    /// Parse arguments (program name already stripped).
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Config::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let flag = flag.as_str();
            match flag {
                "--scene" => cfg.source = SourceKind::Scene,
                "--camera" => cfg.source = SourceKind::Camera(next(flag, &mut args)?),
                "--image" => cfg.source = SourceKind::Image(PathBuf::from(value(flag, &mut args)?)),
                "--size" => {
                    let v = value(flag, &mut args)?;
                    let (w, h) = v
                        .split_once(['x', 'X'])
                        .ok_or_else(|| Error::Config(format!("--size expects WxH, got `{v}`")))?;
                    cfg.width = parse(flag, w)?;
                    cfg.height = parse(flag, h)?;
                    if cfg.width == 0 || cfg.height == 0 {
                        return Err(Error::Config(format!("--size must be non-zero, got `{v}`")));
                    }
                }
                "--radius" => cfg.radius_dp = next(flag, &mut args)?,
                "--density" => cfg.density = positive(flag, next(flag, &mut args)?)?,
                "--center" => {
                    let v = value(flag, &mut args)?;
                    let (x, y) = v
                        .split_once(',')
                        .ok_or_else(|| Error::Config(format!("--center expects X,Y, got `{v}`")))?;
                    cfg.initial_center = glam::vec2(parse(flag, x)?, parse(flag, y)?);
                }
                "--sampling" => cfg.sampling = value(flag, &mut args)?.parse()?,
                "--zoom" => cfg.constants.zoom = positive(flag, next(flag, &mut args)?)?,
                "--distortion" => {
                    cfg.constants.distortion_strength = non_negative(flag, next(flag, &mut args)?)?
                }
                "--falloff" => {
                    cfg.constants.falloff_exponent = positive(flag, next(flag, &mut args)?)?
                }
                "--no-outline" => cfg.show_outline = false,
                other => {
                    return Err(Error::Config(format!("unknown argument `{other}`\n{USAGE}")));
                }
            }
        }
        Ok(cfg)
    }

    /// Lens radius in window pixels. Non-positive values leave the lens inactive.
    pub fn radius_px(&self) -> f32 {
        radius_from_dp(self.radius_dp, self.density)
    }
}

fn value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, Error> {
    args.next()
        .ok_or_else(|| Error::Config(format!("{flag} expects a value\n{USAGE}")))
}

fn parse<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T, Error> {
    v.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{flag}: cannot parse `{v}`")))
}

/// Take the flag's value and parse it.
fn next<T: std::str::FromStr>(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, Error> {
    parse(flag, &value(flag, args)?)
}

fn positive(flag: &str, v: f32) -> Result<f32, Error> {
    if v > 0.0 && v.is_finite() {
        Ok(v)
    } else {
        Err(Error::Config(format!("{flag} must be a positive number, got {v}")))
    }
}

fn non_negative(flag: &str, v: f32) -> Result<f32, Error> {
    if v >= 0.0 && v.is_finite() {
        Ok(v)
    } else {
        Err(Error::Config(format!("{flag} must be zero or positive, got {v}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn defaults_match_the_phone_demo() {
        let cfg = Config::from_args(Vec::new()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.initial_center, glam::vec2(400.0, 400.0));
        assert_eq!(cfg.radius_px(), 120.0);
        assert_eq!(cfg.constants, LensConstants::DEFAULT);
    }

    #[test]
    fn every_flag_is_understood() {
        let cfg = Config::from_args(args(
            "--camera 1 --size 640x480 --radius 100 --density 2.5 --center 10,20 \
             --sampling nearest --zoom 2 --distortion 0.5 --falloff 8 --no-outline",
        ))
        .unwrap();
        assert_eq!(cfg.source, SourceKind::Camera(1));
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(cfg.radius_px(), 250.0);
        assert_eq!(cfg.initial_center, glam::vec2(10.0, 20.0));
        assert_eq!(cfg.sampling, SamplingPolicy::Nearest);
        let constants =
            LensConstants { zoom: 2.0, distortion_strength: 0.5, falloff_exponent: 8.0 };
        assert_eq!(cfg.constants, constants);
        assert!(!cfg.show_outline);

        let cfg = Config::from_args(args("--image photo.png")).unwrap();
        assert_eq!(cfg.source, SourceKind::Image(PathBuf::from("photo.png")));
    }

    #[test]
    fn bad_arguments_are_config_errors() {
        for bad in [
            "--radius",
            "--radius wide",
            "--size 640",
            "--size 0x10",
            "--density 0",
            "--zoom -1",
            "--center 5",
            "--sampling cubic",
            "--distortion -1",
            "--distortion NaN",
            "--falloff 0",
            "--falloff -3",
            "--falloff inf",
            "--fullscreen",
        ] {
            let err = Config::from_args(args(bad));
            assert!(matches!(err, Err(Error::Config(_))), "{bad} should fail");
        }
    }
}
