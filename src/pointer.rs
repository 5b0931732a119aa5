// Turns the window's polled mouse state into press/drag/release events.
// minifb only answers "is the button down?" and "where is the mouse?" each
// frame, so we diff against the previous frame to recover the edges.

use crate::bridge::PointerEvent;
use crate::types::Point2D;

#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    down: bool,
    last: Option<Point2D>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's button state and position; get at most one event back.
    pub fn update(&mut self, down: bool, pos: Option<Point2D>) -> Option<PointerEvent> {
        match (self.down, down) {
            (false, true) => {
                // A press needs a position; outside the window we wait.
                let p = pos?;
                self.down = true;
                self.last = Some(p);
                Some(PointerEvent::Press(p))
            }
            (true, true) => {
                let p = pos?;
                if self.last == Some(p) {
                    return None;
                }
                self.last = Some(p);
                Some(PointerEvent::Drag(p))
            }
            (true, false) => {
                self.down = false;
                self.last = None;
                Some(PointerEvent::Release)
            }
            (false, false) => None,
        }
    }
}
