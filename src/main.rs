// What you SEE:
// • The content (demo screen, still image or live camera) fills the window.
// • A fisheye bulge sits at (400,400); press and drag with the left mouse
//   button to move it. Releasing leaves it where it is.
// • O toggles the lens outline, P cycles NEAREST/BILINEAR/LINEAR sampling.
// • ESC quits.

use std::time::{Duration, Instant};

use fisheye_lens::bridge::LensBridge;
use fisheye_lens::config::Config;
use fisheye_lens::draw::{draw_crosshair, draw_ring, draw_status_line, Drawer};
use fisheye_lens::error::Error;
use fisheye_lens::logging::{init_logging, LoggingConfig};
use fisheye_lens::pointer::PointerTracker;
use fisheye_lens::render::apply_lens;
use fisheye_lens::sampler::Sampler;
use fisheye_lens::source::ContentSource;
use fisheye_lens::types::FrameBuffer;

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::default());

    let cfg = match Config::from_args(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}");
            return Err(e);
        }
    };

    /* --- Content + window setup ---
       The window takes the size of whatever the source delivers. */
    let mut source = ContentSource::open(&cfg.source, cfg.width, cfg.height)?;
    let (w, h) = source.resolution();
    let mut drawer = Drawer::new("Fisheye Lens", w, h)?;
    let mut screen = FrameBuffer::new(w, h);

    /* --- Lens state ---
       The bridge owns the parameters; the renderer reads them once per frame. */
    let radius = cfg.radius_px();
    if radius <= 0.0 {
        log::warn!("lens radius {radius} px is not positive; the lens stays inactive");
    }
    let mut bridge = LensBridge::with_center(cfg.initial_center, radius);
    let mut tracker = PointerTracker::new();
    let mut sampler = Sampler::new(cfg.sampling);
    let mut show_outline = cfg.show_outline;
    log::info!(
        "lens radius {radius:.1} px at ({:.0}, {:.0}), sampling {}",
        cfg.initial_center.x,
        cfg.initial_center.y,
        sampler.policy()
    );

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs: pointer edges drive the lens; keys flip display options. */
        if let Some(event) = tracker.update(drawer.left_mouse_down(), drawer.mouse_pos()) {
            if let Some(params) = bridge.handle(event) {
                log::trace!("lens center -> ({:.1}, {:.1})", params.center.x, params.center.y);
            }
        }
        if drawer.o_pressed_once() {
            show_outline = !show_outline;
        }
        if drawer.p_pressed_once() {
            sampler.set_policy(sampler.policy().next());
            log::info!("sampling: {}", sampler.policy());
        }

        /* 2) Content for this frame, then the lens on top of it. */
        let content = source.frame()?;
        if !content.same_size(&screen) {
            // A camera may switch resolution mid-stream; the window follows the buffer.
            screen = FrameBuffer::new(content.width, content.height);
        }
        let lens = bridge.params();
        apply_lens(content, &mut screen, &lens, &cfg.constants, &sampler)?;

        /* 3) Overlays: outline ring, center crosshair, HUD text. */
        let (cx, cy) = (lens.center.x.round() as i32, lens.center.y.round() as i32);
        if show_outline && lens.is_active() {
            draw_ring(&mut screen, cx, cy, lens.radius.round() as i32, 0x00_FF_CC_33);
            draw_crosshair(&mut screen, cx, cy, 6, 0x00_FF_CC_33);
        }
        let hud = format!(
            "{} | X:{cx} Y:{cy} | {} | O: RING  P: SAMPLING",
            sampler.policy(),
            hud_fps_text
        );
        draw_status_line(&mut screen, &hud, 0x00_FF_FF_FF);

        /* 4) Present. */
        drawer.present(&screen)?;

        /* 5) FPS, once per second. */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
