use crate::core::geometry::Point;

pub const ZOOM_STEP: f64 = 1.05;
pub const MIN_ZOOM: f64 = 0.4;
pub const MAX_ZOOM: f64 = 3.0;

/// Uniform zoom plus offset between canvas space and screen space:
/// `screen = canvas * zoom + offset`. Recorded points stay in canvas space so
/// measurements do not depend on the current view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomView {
    zoom: f64,
    offset: Point,
}

impl Default for ZoomView {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Point::new(0.0, 0.0),
        }
    }
}

impl ZoomView {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Screen position of the canvas origin.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Applies one zoom step about `anchor` (a screen position, usually the
    /// view centre), which stays fixed on screen. Positive deltas zoom in,
    /// anything else zooms out. Steps that would leave `[MIN_ZOOM, MAX_ZOOM]`
    /// are ignored.
    pub fn apply_pinch(&mut self, delta: f64, anchor: Point) -> bool {
        let factor = if delta > 0.0 {
            ZOOM_STEP
        } else {
            1.0 / ZOOM_STEP
        };
        let zoom = self.zoom * factor;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return false;
        }

        let pinned = self.to_canvas(anchor);
        self.zoom = zoom;
        self.offset = Point::new(anchor.x - pinned.x * zoom, anchor.y - pinned.y * zoom);
        true
    }

    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    pub fn to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.offset.x,
            canvas.y * self.zoom + self.offset.y,
        )
    }
}
