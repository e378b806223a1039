//! Basic geometric types for capture and page planning
//!
//! All rectangles use a top-left origin with y growing downwards, which is
//! what both the browser viewport and the page plan use.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drags smaller than this (in CSS pixels) on either side cancel the capture.
pub const MIN_SELECTION_PX: f64 = 10.0;

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0)
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// True when `other` lies entirely inside `self`, edges included.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A region the user dragged out while in screenshot mode.
///
/// Stored in document coordinates: the vertical scroll offset at the time of
/// the drag is folded into `rect.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionRect {
    pub rect: Rect,
}

impl SelectionRect {
    /// Normalise a drag from `start` to `end` (viewport coordinates) into a
    /// rectangle, regardless of drag direction.
    pub fn from_drag(start: Point, end: Point, scroll_y: f64) -> Self {
        let left = start.x.min(end.x);
        let top = start.y.min(end.y) + scroll_y;
        let width = (end.x - start.x).abs();
        let height = (end.y - start.y).abs();

        Self {
            rect: Rect::new(left, top, width, height),
        }
    }

    /// Whether the selection is large enough to capture.
    pub fn is_capturable(&self) -> bool {
        self.rect.width >= MIN_SELECTION_PX && self.rect.height >= MIN_SELECTION_PX
    }
}

/// Clamp a host-supplied length to a usable non-negative value.
///
/// Negative, NaN and infinite inputs become 0.
pub(crate) fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
        assert_eq!(Point::origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
        assert!(!rect.is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 90.0, 90.0)));
        assert!(!outer.contains_rect(&Rect::new(10.0, 10.0, 91.0, 10.0)));
    }

    #[test]
    fn test_selection_from_drag_any_direction() {
        let down_right = SelectionRect::from_drag(Point::new(10.0, 20.0), Point::new(110.0, 70.0), 0.0);
        let up_left = SelectionRect::from_drag(Point::new(110.0, 70.0), Point::new(10.0, 20.0), 0.0);

        assert_eq!(down_right, up_left);
        assert_eq!(down_right.rect, Rect::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_selection_applies_scroll_offset() {
        let selection = SelectionRect::from_drag(Point::new(0.0, 5.0), Point::new(50.0, 55.0), 400.0);
        assert_eq!(selection.rect.y, 405.0);
        assert_eq!(selection.rect.height, 50.0);
    }

    #[test]
    fn test_small_selection_is_not_capturable() {
        let tiny = SelectionRect::from_drag(Point::new(0.0, 0.0), Point::new(9.0, 200.0), 0.0);
        assert!(!tiny.is_capturable());

        let ok = SelectionRect::from_drag(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.0);
        assert!(ok.is_capturable());
    }

    #[test]
    fn test_sanitize_length() {
        assert_eq!(sanitize_length(12.5), 12.5);
        assert_eq!(sanitize_length(-3.0), 0.0);
        assert_eq!(sanitize_length(f64::NAN), 0.0);
        assert_eq!(sanitize_length(f64::INFINITY), 0.0);
    }
}
