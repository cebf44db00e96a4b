use std::ops::Range;

use super::{scrollbar_geometry, ScrollbarGeometry};

/// Whether [`ViewportState::clamp`] pulls the scroll offset toward the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    /// Only keep the offset in range (text panels without a cursor).
    #[default]
    Offset,
    /// Also scroll so the cursor row is visible.
    Cursor,
}

/// Scroll state of one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    /// Selectable rows (or text lines) currently available.
    pub item_count: usize,
    /// Highlighted row. Meaningless while `item_count == 0`.
    pub cursor: usize,
    /// First visible row.
    pub scroll_offset: usize,
    /// Rows that fit in the panel as of the last frame.
    pub visible_window: usize,
}

impl ViewportState {
    #[must_use]
    pub const fn new(item_count: usize) -> Self {
        Self {
            item_count,
            cursor: 0,
            scroll_offset: 0,
            visible_window: 0,
        }
    }

    /// Reproject the offset for a (possibly new) window height.
    ///
    /// Afterwards `scroll_offset <= max(0, item_count - visible_window)`, and
    /// with [`Reveal::Cursor`] the cursor row lies inside the window whenever
    /// there are items and the window is non-empty. Applying it twice gives
    /// the same result as applying it once.
    #[must_use]
    pub fn clamp(self, visible_window: usize, reveal: Reveal) -> Self {
        let cursor = self.cursor.min(self.item_count.saturating_sub(1));
        let max_scroll = self.item_count.saturating_sub(visible_window);
        let mut scroll_offset = self.scroll_offset.min(max_scroll);

        if reveal == Reveal::Cursor && self.item_count > 0 && visible_window > 0 {
            if cursor < scroll_offset {
                scroll_offset = cursor;
            } else if cursor >= scroll_offset + visible_window {
                scroll_offset = cursor + 1 - visible_window;
            }
        }

        Self {
            item_count: self.item_count,
            cursor,
            scroll_offset,
            visible_window,
        }
    }

    /// Indices of the rows to draw.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.scroll_offset.min(self.item_count);
        let end = self
            .item_count
            .min(self.scroll_offset.saturating_add(self.visible_window));
        start..end
    }

    /// The highlighted row, if there is anything to highlight.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        if self.item_count == 0 {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Thumb geometry for a track of `track_length` cells.
    #[must_use]
    pub fn scrollbar(&self, track_length: usize) -> Option<ScrollbarGeometry> {
        scrollbar_geometry(
            self.item_count,
            self.visible_window,
            self.scroll_offset,
            track_length,
        )
    }

    /// Move the cursor up one row. Returns true if it moved.
    pub fn select_previous(&mut self) -> bool {
        if self.item_count == 0 || self.cursor == 0 {
            return false;
        }
        self.select(self.cursor - 1)
    }

    /// Move the cursor down one row. Returns true if it moved.
    pub fn select_next(&mut self) -> bool {
        self.select(self.cursor.saturating_add(1))
    }

    /// Put the cursor on `index`. Returns true if the cursor changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.item_count || index == self.cursor {
            return false;
        }
        self.cursor = index;
        *self = self.clamp(self.visible_window, Reveal::Cursor);
        true
    }

    /// Shift the window without touching the cursor.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        *self = self.clamp(self.visible_window, Reveal::Offset);
    }

    /// Adopt a new item count after a content reload.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        *self = self.clamp(self.visible_window, Reveal::Cursor);
    }

    /// Back to the first row.
    pub const fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }
}
