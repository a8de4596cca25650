//! Capabilities a widget exposes to the host's widget tree.
//!
//! The host routes pointer and focus events by capability rather than by
//! concrete type: anything [`Hoverable`] can be hit tested, anything
//! [`Focusable`] can take keyboard focus, and anything that is a
//! [`CaretOwner`] can report where its caret is drawn.

use crate::geometry::{Point, Rect};

/// A widget that owns a text caret.
pub trait CaretOwner {
    /// Caret byte offset.
    fn caret_offset(&self) -> usize;

    /// Visual caret position in content coordinates (bottom of the caret's row).
    fn caret_point(&mut self) -> Point;
}

/// A widget that occupies a rectangle and can be hit tested.
pub trait Hoverable {
    /// Bounds in host coordinates.
    fn bounds(&self) -> Rect;

    /// Check whether `point` (host coordinates) lies over the widget.
    fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// A widget that can take keyboard focus.
pub trait Focusable {
    fn focus(&mut self);

    /// Give up focus, ending any gesture in progress.
    fn blur(&mut self);

    fn is_focused(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Panel(Rect);

    impl Hoverable for Panel {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_default_contains_uses_bounds() {
        let panel = Panel(Rect::new(10.0, 10.0, 20.0, 5.0));
        assert!(panel.contains(Point::new(10.0, 10.0)));
        assert!(panel.contains(Point::new(29.0, 14.0)));
        assert!(!panel.contains(Point::new(30.0, 12.0)));
        assert!(!panel.contains(Point::new(15.0, 9.0)));
    }
}
