//! Classifies raw pointer press/move/release events into clicks and drags.

use crate::core::geometry::{Point, distance};

/// Releases closer than this to the press position count as clicks.
pub const DRAG_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Click { at: Point, button: PointerButton },
    Drag { start: Point, end: Point },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Pressed {
        start: Point,
        button: PointerButton,
    },
    Dragging {
        start: Point,
        current: Point,
        button: PointerButton,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct GestureTracker {
    state: PointerState,
    threshold: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl GestureTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: PointerState::Idle,
            threshold,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn press(&mut self, at: Point, button: PointerButton) {
        self.state = PointerState::Pressed { start: at, button };
    }

    pub fn motion(&mut self, at: Point) {
        self.state = match self.state {
            PointerState::Idle => PointerState::Idle,
            PointerState::Pressed { start, button } if distance(start, at) >= self.threshold => {
                PointerState::Dragging {
                    start,
                    current: at,
                    button,
                }
            }
            pressed @ PointerState::Pressed { .. } => pressed,
            PointerState::Dragging { start, button, .. } => PointerState::Dragging {
                start,
                current: at,
                button,
            },
        };
    }

    /// Segment to draw as a drag preview, if the pointer has moved far enough.
    pub fn preview(&self) -> Option<(Point, Point)> {
        match self.state {
            PointerState::Dragging { start, current, .. }
                if distance(start, current) >= self.threshold =>
            {
                Some((start, current))
            }
            _ => None,
        }
    }

    pub fn release(&mut self, at: Point) -> Option<Gesture> {
        let (start, button) = match std::mem::take(&mut self.state) {
            PointerState::Idle => return None,
            PointerState::Pressed { start, button }
            | PointerState::Dragging { start, button, .. } => (start, button),
        };

        if distance(start, at) < self.threshold {
            Some(Gesture::Click { at, button })
        } else {
            Some(Gesture::Drag { start, end: at })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Gesture, GestureTracker, PointerButton, PointerState};
    use crate::core::geometry::Point;

    #[test]
    fn short_press_is_a_click() {
        let mut tracker = GestureTracker::default();
        tracker.press(Point::new(100.0, 100.0), PointerButton::Primary);
        tracker.motion(Point::new(103.0, 104.0));
        assert!(tracker.preview().is_none());

        let gesture = tracker.release(Point::new(103.0, 104.0));
        assert_eq!(
            gesture,
            Some(Gesture::Click {
                at: Point::new(103.0, 104.0),
                button: PointerButton::Primary,
            })
        );
        assert_eq!(tracker.state(), PointerState::Idle);
    }

    #[test]
    fn long_press_is_a_drag() {
        let mut tracker = GestureTracker::default();
        tracker.press(Point::new(0.0, 0.0), PointerButton::Primary);
        tracker.motion(Point::new(30.0, 0.0));
        assert_eq!(
            tracker.preview(),
            Some((Point::new(0.0, 0.0), Point::new(30.0, 0.0)))
        );

        tracker.motion(Point::new(50.0, 0.0));
        let gesture = tracker.release(Point::new(50.0, 0.0));
        assert_eq!(
            gesture,
            Some(Gesture::Drag {
                start: Point::new(0.0, 0.0),
                end: Point::new(50.0, 0.0),
            })
        );
    }

    #[test]
    fn returning_to_start_is_still_a_click() {
        let mut tracker = GestureTracker::default();
        tracker.press(Point::new(0.0, 0.0), PointerButton::Secondary);
        tracker.motion(Point::new(40.0, 0.0));
        tracker.motion(Point::new(2.0, 0.0));
        assert!(tracker.preview().is_none());

        let gesture = tracker.release(Point::new(2.0, 0.0));
        assert_eq!(
            gesture,
            Some(Gesture::Click {
                at: Point::new(2.0, 0.0),
                button: PointerButton::Secondary,
            })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.motion(Point::new(10.0, 10.0));
        assert_eq!(tracker.release(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn secondary_drag_draws_an_arrow() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.press(Point::new(0.0, 0.0), PointerButton::Secondary);
        let gesture = tracker.release(Point::new(0.0, 6.0));
        assert!(matches!(gesture, Some(Gesture::Drag { .. })));
    }
}
