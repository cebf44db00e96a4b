use std::ops::Range;

/// Thumb placement along a scrollbar track, in track cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    pub track_length: usize,
    pub thumb_start: usize,
    pub thumb_size: usize,
}

impl ScrollbarGeometry {
    /// One past the last thumb cell. May exceed `track_length`.
    #[must_use]
    pub const fn thumb_end(&self) -> usize {
        self.thumb_start + self.thumb_size
    }

    /// Whether track cell `cell` is part of the thumb.
    #[must_use]
    pub const fn covers(&self, cell: usize) -> bool {
        self.thumb_start <= cell && cell < self.thumb_end()
    }

    /// Thumb cells clipped to the track, for drawing.
    #[must_use]
    pub fn visible_thumb(&self) -> Range<usize> {
        self.thumb_start.min(self.track_length)..self.thumb_end().min(self.track_length)
    }
}

/// Thumb geometry for a list of `item_count` rows showing `visible_window`
/// of them from `scroll_offset`. `None` when the whole list fits.
///
/// The thumb is never thinner than one cell. Its end is not clipped to the
/// track; renderers clip.
#[must_use]
pub fn scrollbar_geometry(
    item_count: usize,
    visible_window: usize,
    scroll_offset: usize,
    track_length: usize,
) -> Option<ScrollbarGeometry> {
    if item_count <= visible_window {
        return None;
    }

    let thumb_size = (track_length.saturating_mul(visible_window) / item_count).max(1);
    let thumb_start = track_length.saturating_mul(scroll_offset) / item_count;

    Some(ScrollbarGeometry {
        track_length,
        thumb_start,
        thumb_size,
    })
}
