//! Frame shared by every scrollable panel: rounded border, title row, and a
//! scrollbar column outside the border.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Padding, Widget},
};

use super::Theme;
use crate::viewport::{window_for_height, Reveal, ScrollbarGeometry, ViewportState};

const THUMB: &str = "█";
const TRACK: &str = "░";

/// Clamp `state` to the window that fits in `area`, draw the frame, and
/// return the area left for content rows.
pub fn draw_frame(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    focused: bool,
    state: &mut ViewportState,
    reveal: Reveal,
) -> Rect {
    *state = state.clamp(window_for_height(i32::from(area.height)), reveal);

    let geometry = state.scrollbar(usize::from(area.height));
    let mut box_area = area;
    if let Some(geometry) = geometry {
        box_area.width = area.width.saturating_sub(1);
        draw_scrollbar(area, buf, geometry);
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::BORDER_FOCUSED
        } else {
            Theme::BORDER
        })
        .padding(Padding::horizontal(1));
    let inner = block.inner(box_area);
    block.render(box_area, buf);

    if inner.height == 0 {
        return inner;
    }
    buf.set_span(
        inner.x,
        inner.y,
        &Span::styled(format!(" {title} "), Theme::TITLE),
        inner.width,
    );

    // Title row and the spacer beneath it.
    let skip = inner.height.min(2);
    Rect {
        y: inner.y + skip,
        height: inner.height - skip,
        ..inner
    }
}

/// Full-height column at the right edge of `area`. The thumb is shifted down
/// one row so that it lines up with the content below the top border.
fn draw_scrollbar(area: Rect, buf: &mut Buffer, geometry: ScrollbarGeometry) {
    let Some(x) = area.right().checked_sub(1) else {
        return;
    };
    for row in 0..area.height {
        let on_thumb = usize::from(row)
            .checked_sub(1)
            .is_some_and(|cell| geometry.covers(cell));
        let (symbol, style) = if on_thumb {
            (THUMB, Theme::THUMB)
        } else {
            (TRACK, Theme::TRACK)
        };
        if let Some(cell) = buf.cell_mut((x, area.y + row)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}
