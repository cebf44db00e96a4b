//! Read-only scrolling text (details panel).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

use super::{panel::draw_frame, Theme};
use crate::viewport::{Reveal, ViewportState};

/// Lines are never truncated below this many columns.
const MIN_LINE_WIDTH: usize = 20;
const ELLIPSIS: &str = "...";

pub struct TextPanel<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
    pub focused: bool,
}

/// Expand tabs and cut `line` to `width` columns, ending in `...` when cut.
pub fn fit_line(line: &str, width: usize) -> String {
    let line = line.replace('\t', "    ");
    let width = width.max(MIN_LINE_WIDTH);
    let keep = width - ELLIPSIS.len();
    if line.chars().count() > keep {
        line.chars().take(keep).chain(ELLIPSIS.chars()).collect()
    } else {
        line
    }
}

impl StatefulWidget for TextPanel<'_> {
    type State = ViewportState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.item_count = self.lines.len();
        let content = draw_frame(area, buf, self.title, self.focused, state, Reveal::Offset);

        let width = usize::from(content.width);
        for (index, row) in state.visible_range().zip(content.rows()) {
            let Some(line) = self.lines.get(index) else {
                break;
            };
            Line::styled(fit_line(line, width), Theme::NORMAL).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_line() {
        assert_eq!(fit_line("short", 40), "short");
        assert_eq!(fit_line("\tx", 40), "    x");
        let long = "a".repeat(30);
        assert_eq!(fit_line(&long, 25), format!("{}...", "a".repeat(22)));
    }

    #[test]
    fn test_narrow_panels_still_show_twenty_columns() {
        let long = "b".repeat(30);
        assert_eq!(fit_line(&long, 5).chars().count(), 20);
    }

    #[test]
    fn test_offset_is_kept_in_range() {
        let lines: Vec<String> = (0..8).map(|i| format!("line {i}")).collect();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let mut state = ViewportState {
            scroll_offset: 50,
            ..ViewportState::default()
        };

        TextPanel {
            title: "Details",
            lines: &lines,
            focused: true,
        }
        .render(area, &mut buf, &mut state);

        assert_eq!(state.scroll_offset, 4, "8 lines in a window of 4");
        assert_eq!(state.visible_range(), 4..8);
    }
}
