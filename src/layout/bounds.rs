//! Absolute rectangles produced by the partitioner.

use ratatui::layout::Rect;

/// Inclusive cell rectangle. A collapsed box has `right == left - 1` (or
/// `bottom == top - 1`), which is a valid zero-sized result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at `(x, y)` spanning `width` by `height` cells.
    /// Negative sizes collapse to zero.
    #[must_use]
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        let width = if width < 0 { 0 } else { width };
        let height = if height < 0 { 0 } else { height };
        Self::new(x, y, x + width - 1, y + height - 1)
    }

    #[must_use]
    pub const fn width(self) -> i32 {
        let width = self.right - self.left + 1;
        if width < 0 {
            0
        } else {
            width
        }
    }

    #[must_use]
    pub const fn height(self) -> i32 {
        let height = self.bottom - self.top + 1;
        if height < 0 {
            0
        } else {
            height
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the cell at `(x, y)` lies inside.
    #[must_use]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }

    /// Convert into a ratatui `Rect`, clamping every coordinate into `u16`.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        let x = clamp_u16(self.left);
        let y = clamp_u16(self.top);
        let right = clamp_u16(self.left.saturating_add(self.width()));
        let bottom = clamp_u16(self.top.saturating_add(self.height()));
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::from_origin(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

fn clamp_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_is_inclusive() {
        let bounds = Bounds::from_origin(2, 3, 10, 4);
        assert_eq!(bounds, Bounds::new(2, 3, 11, 6));
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 4);
    }

    #[test]
    fn test_zero_size_collapses() {
        let bounds = Bounds::from_origin(5, 5, 0, -3);
        assert_eq!(bounds.right, 4, "zero width means right == left - 1");
        assert_eq!(bounds.bottom, 4, "negative height collapses to zero");
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_contains_edges() {
        let bounds = Bounds::from_origin(0, 0, 3, 2);
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(2, 1));
        assert!(!bounds.contains(3, 1));
        assert!(!bounds.contains(2, 2));
    }

    #[test]
    fn test_to_rect_clamps_negative_origin() {
        let rect = Bounds::from_origin(-2, -1, 5, 3).to_rect();
        assert_eq!(rect, Rect::new(0, 0, 3, 2));
    }

    #[test]
    fn test_rect_round_trip() {
        let rect = Rect::new(4, 1, 20, 7);
        assert_eq!(Bounds::from(rect).to_rect(), rect);
    }
}
