//! Scroll state shared by every scrollable panel.
//!
//! A [`ViewportState`] is reprojected from scratch on every frame: given the
//! number of items, the window height and the logical cursor, [`ViewportState::clamp`]
//! yields the scroll offset and [`scrollbar_geometry`] the thumb. There is no
//! incremental bookkeeping to drift out of sync between panels.

mod scrollbar;
mod state;

pub use scrollbar::{scrollbar_geometry, ScrollbarGeometry};
pub use state::{Reveal, ViewportState};

/// Rows taken by the top and bottom border of a panel.
pub const BORDER_ROWS: usize = 2;
/// Rows taken by the title line and the spacer beneath it.
pub const TITLE_ROWS: usize = 2;
/// Panels never shrink their content area below this many rows.
pub const MIN_CONTENT_ROWS: usize = 5;

/// Number of item rows that fit in a panel of the given outer height.
#[must_use]
pub fn window_for_height(height: i32) -> usize {
    let height = usize::try_from(height).unwrap_or(0);
    let content = height.saturating_sub(BORDER_ROWS).max(MIN_CONTENT_ROWS);
    content - TITLE_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_for_height() {
        assert_eq!(window_for_height(29), 25);
        assert_eq!(window_for_height(10), 6);
    }

    #[test]
    fn test_window_for_tiny_height_uses_minimum() {
        assert_eq!(window_for_height(4), 3);
        assert_eq!(window_for_height(-7), 3);
    }
}
