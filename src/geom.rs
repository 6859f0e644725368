//! Coordinate mapping between the host's client space and the canvas.

/// A position in canvas-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canvas element's bounding rectangle in absolute client coordinates.
///
/// The canvas may move or scroll between events, so the host must re-query
/// this for every pointer event rather than caching it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Maps an absolute client position to canvas-local coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_exactly() {
        let rect = BoundingRect::new(120.0, 48.0, 640.0, 480.0);
        assert_eq!(rect.to_local(120.0, 48.0), Point::new(0.0, 0.0));
        assert_eq!(rect.to_local(130.0, 58.0), Point::new(10.0, 10.0));
        assert_eq!(rect.to_local(759.0, 527.0), Point::new(639.0, 479.0));
    }

    #[test]
    fn maps_fractional_scroll_positions() {
        let rect = BoundingRect::new(12.5, 7.25, 100.0, 100.0);
        let p = rect.to_local(62.5, 57.25);
        assert_eq!(p, Point::new(50.0, 50.0));
    }
}
