//! Selectable list with a `▶` cursor (main menu and option panels).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use super::{panel::draw_frame, Theme};
use crate::viewport::{Reveal, ViewportState};

pub struct ListPanel<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub focused: bool,
}

impl StatefulWidget for ListPanel<'_> {
    type State = ViewportState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.item_count = self.items.len();
        let content = draw_frame(area, buf, self.title, self.focused, state, Reveal::Cursor);

        let rows = state.visible_range().zip(content.rows());
        for (index, row) in rows {
            let Some(item) = self.items.get(index) else {
                break;
            };
            let line = if state.selected() == Some(index) {
                let style = if self.focused {
                    Theme::SELECTED
                } else {
                    Theme::ACTIVE
                };
                Line::from(Span::styled(format!("▶ {item}"), style))
            } else {
                Line::from(Span::styled(format!("  {item}"), Theme::NORMAL))
            };
            line.render(row, buf);
        }
    }
}
