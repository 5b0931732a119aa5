//! Pointer-to-lens bridge.
//!
//! Tracks one pointer stream and writes its position into the lens center.
//! Idle --press--> Active --drag--> Active --release--> Idle.
//! Release does not move or hide the lens; it stays where the pointer left it.

use crate::types::{LensParameters, Point2D};

/// Where the lens sits before anyone touches it.
pub const DEFAULT_CENTER: Point2D = glam::Vec2::new(400.0, 400.0);

/// Lens radius in density-independent pixels.
pub const DEFAULT_RADIUS_DP: f32 = 120.0;

/// Convert a dp length to physical pixels.
#[inline]
pub fn radius_from_dp(dp: f32, density: f32) -> f32 {
    dp * density
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Point2D),
    Drag(Point2D),
    Release,
}

#[derive(Debug, Clone)]
pub struct LensBridge {
    state: PointerState,
    params: LensParameters,
}

impl LensBridge {
    /// Lens at [`DEFAULT_CENTER`] with a fixed `radius` (pixels).
    pub fn new(radius: f32) -> Self {
        Self::with_center(DEFAULT_CENTER, radius)
    }

    pub fn with_center(center: Point2D, radius: f32) -> Self {
        Self {
            state: PointerState::Idle,
            params: LensParameters::new(center, radius),
        }
    }

    /// Current parameters; the renderer reads these once per frame.
    pub fn params(&self) -> LensParameters {
        self.params
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// First contact: jump the lens to `p`.
    pub fn on_press(&mut self, p: Point2D) -> LensParameters {
        self.state = PointerState::Active;
        self.params.center = p;
        self.params
    }

    /// Movement of the active pointer. Returns true when the event was
    /// consumed (the lens followed it); idle movement is left to the host.
    pub fn on_move(&mut self, p: Point2D) -> bool {
        if self.state != PointerState::Active {
            return false;
        }
        self.params.center = p;
        true
    }

    pub fn on_release(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Dispatch one event; returns the parameters if it produced an update.
    pub fn handle(&mut self, event: PointerEvent) -> Option<LensParameters> {
        match event {
            PointerEvent::Press(p) => Some(self.on_press(p)),
            PointerEvent::Drag(p) => self.on_move(p).then_some(self.params),
            PointerEvent::Release => {
                self.on_release();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn press_drag_release() {
        let mut bridge = LensBridge::new(120.0);
        assert_eq!(bridge.state(), PointerState::Idle);
        assert_eq!(bridge.params().center, DEFAULT_CENTER);

        let up = bridge.handle(PointerEvent::Press(vec2(10.0, 20.0)));
        assert_eq!(up.map(|p| p.center), Some(vec2(10.0, 20.0)));
        assert_eq!(bridge.state(), PointerState::Active);

        let up = bridge.handle(PointerEvent::Drag(vec2(30.0, 40.0)));
        assert_eq!(up.map(|p| p.center), Some(vec2(30.0, 40.0)));

        assert_eq!(bridge.handle(PointerEvent::Release), None);
        assert_eq!(bridge.state(), PointerState::Idle);
        assert_eq!(bridge.params().center, vec2(30.0, 40.0));
    }

    #[test]
    fn idle_movement_is_not_consumed() {
        let mut bridge = LensBridge::with_center(vec2(1.0, 2.0), 50.0);
        assert!(!bridge.on_move(vec2(9.0, 9.0)));
        assert_eq!(bridge.handle(PointerEvent::Drag(vec2(9.0, 9.0))), None);
        assert_eq!(bridge.params().center, vec2(1.0, 2.0));
    }

    #[test]
    fn every_drag_emits_an_update() {
        let mut bridge = LensBridge::new(80.0);
        bridge.on_press(vec2(0.0, 0.0));
        for i in 1..=5 {
            let p = vec2(i as f32 * 3.0, i as f32);
            assert!(bridge.on_move(p));
            assert_eq!(bridge.params().center, p);
        }
    }

    #[test]
    fn second_press_overwrites_without_history() {
        let mut bridge = LensBridge::new(80.0);
        bridge.on_press(vec2(5.0, 5.0));
        bridge.on_press(vec2(600.0, 10.0));
        assert_eq!(bridge.params().center, vec2(600.0, 10.0));
        assert_eq!(bridge.state(), PointerState::Active);
    }

    #[test]
    fn radius_is_fixed_for_the_lifetime() {
        let mut bridge = LensBridge::new(radius_from_dp(DEFAULT_RADIUS_DP, 2.0));
        bridge.on_press(vec2(1.0, 1.0));
        bridge.on_move(vec2(2.0, 2.0));
        bridge.on_release();
        assert_eq!(bridge.params().radius, 240.0);
    }
}
