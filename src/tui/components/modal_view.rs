//! Centered overlay for the active modal dialog.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

use super::Theme;
use crate::{
    layout::{partition, presets, Bounds},
    tui::modal::Modal,
};

/// Outer width of every dialog, border included.
const MODAL_WIDTH: i32 = 52;
/// Border plus one padding row above and below.
const CHROME_ROWS: i32 = 4;

pub struct ModalView<'a> {
    pub modal: &'a Modal,
}

impl ModalView<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let modal = self.modal;
        let mut lines = vec![
            Line::from(Span::styled(format!(" {} ", modal.title()), Theme::TITLE)),
            Line::default(),
        ];
        lines.extend(modal.prompt().into_iter().map(Line::from));
        lines.push(Line::default());

        if let Some((choices, cursor)) = modal.choices() {
            lines.extend(choices.iter().enumerate().map(|(i, choice)| {
                if i == cursor {
                    Line::styled(format!("▶ {choice}"), Theme::SELECTED)
                } else {
                    Line::styled(format!("  {choice}"), Theme::NORMAL)
                }
            }));
        }
        if let Some(input) = modal.input() {
            lines.push(Line::styled(format!(" {input}█ "), Theme::SELECTED));
        }

        lines.push(Line::default());
        lines.push(Line::styled(modal.hint(), Theme::HINT));
        lines
    }

    /// Where a dialog of `rows` content lines lands on `screen`.
    fn placement(screen: Rect, rows: usize) -> Option<Rect> {
        let height = i32::try_from(rows).unwrap_or(i32::MAX).saturating_add(CHROME_ROWS);
        let boxes = partition(&presets::centered(MODAL_WIDTH, height), Bounds::from(screen));
        boxes
            .get(presets::OVERLAY)
            .filter(|bounds| !bounds.is_empty())
            .map(|bounds| bounds.to_rect())
    }
}

impl Widget for ModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let Some(popup) = Self::placement(area, lines.len()) else {
            return;
        };

        Clear.render(popup, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Theme::MODAL_BORDER)
            .padding(Padding::new(2, 2, 1, 1));
        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SiteKind;

    #[test]
    fn test_confirm_dialog_is_centered() {
        let modal = Modal::confirm_stop();
        let view = ModalView { modal: &modal };
        // title, blank, prompt, blank, Yes, No, blank, hint
        assert_eq!(view.lines().len(), 8);

        let popup = ModalView::placement(Rect::new(0, 0, 120, 30), 8).expect("fits");
        assert_eq!(popup, Rect::new(34, 9, 52, 12));
    }

    #[test]
    fn test_dialog_shrinks_on_small_screens() {
        let popup = ModalView::placement(Rect::new(0, 0, 40, 10), 8).expect("fits");
        assert_eq!(popup, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_input_dialog_shows_text() {
        let modal = Modal::SiteName {
            kind: SiteKind::Custom,
            input: "blog".into(),
        };
        let text: Vec<String> = ModalView { modal: &modal }
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(text.contains(&" blog█ ".to_string()));
    }
}
