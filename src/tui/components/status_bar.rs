//! Footer with the keybindings of the focused panel.

use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::Theme;
use crate::tui::app::Panel;

pub struct StatusBar<'a> {
    pub focus: Panel,
    /// Whether the focused option is a deletable site.
    pub site_selected: bool,
    /// Last service status, shown at the right edge.
    pub status: &'a str,
}

impl StatusBar<'_> {
    fn keybindings(&self) -> Vec<(&'static str, &'static str)> {
        let mut keys = vec![("↑↓/jk", "scroll")];
        match self.focus {
            Panel::Main => {
                keys.extend([("→/l/tab", "next panel"), ("enter", "select")]);
            }
            Panel::Options => {
                keys.extend([
                    ("←/h", "prev panel"),
                    ("→/l/tab", "next panel"),
                    ("enter", "execute"),
                ]);
                if self.site_selected {
                    keys.push(("d", "delete"));
                }
            }
            Panel::Details => keys.push(("←/h", "prev panel")),
        }
        keys.extend([("mouse", "scroll/click"), ("q", "quit")]);
        keys
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = Line::styled(format!("{} ", self.status), Theme::HINT).right_aligned();
        let spans = self.keybindings().into_iter().flat_map(|(key, desc)| {
            [
                Span::styled(format!("[{key}]"), Theme::KEY),
                Span::raw(format!(" {desc} ")),
            ]
        });
        let line = Line::from(iter::once(Span::raw(" ")).chain(spans).collect::<Vec<_>>());
        let free = usize::from(area.width).saturating_sub(line.width());
        line.render(area, buf);
        if status.width() < free {
            status.render(area, buf);
        }
    }
}
