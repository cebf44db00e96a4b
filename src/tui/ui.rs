//! UI rendering for the dashboard.

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::{
    app::{App, Panel},
    components::{ListPanel, ModalView, StatusBar, TextPanel, Theme},
};
use crate::layout::{partition, presets, Bounds};

/// Below this size the panels are not drawn at all.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: i32 = 1;

/// Render the UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        app.panels.clear();
        frame.render_widget(
            Paragraph::new("Terminal too small. Please resize.").style(Theme::WARNING),
            area,
        );
        return;
    }

    let panels = partition(&presets::dashboard_layout(FOOTER_HEIGHT), Bounds::from(area));
    let rect = |label: &str| panels.get(label).map_or(Rect::default(), |b| b.to_rect());

    frame.render_stateful_widget(
        ListPanel {
            title: "Main Menu",
            items: &app.main_items,
            focused: app.focus == Panel::Main,
        },
        rect(presets::MAIN_MENU),
        &mut app.main,
    );

    let option_rows = app.option_rows();
    frame.render_stateful_widget(
        ListPanel {
            title: "Options",
            items: &option_rows,
            focused: app.focus == Panel::Options,
        },
        rect(presets::OPTIONS),
        &mut app.options,
    );

    let lines = app.detail_lines().to_vec();
    frame.render_stateful_widget(
        TextPanel {
            title: "Details",
            lines: &lines,
            focused: app.focus == Panel::Details,
        },
        rect(presets::DETAILS),
        &mut app.details,
    );

    frame.render_widget(
        StatusBar {
            focus: app.focus,
            site_selected: app.selected_site().is_some(),
            status: &app.status,
        },
        rect(presets::FOOTER),
    );

    if let Some(modal) = &app.modal {
        frame.render_widget(ModalView { modal }, area);
    }

    app.panels = panels;
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::tui::modal::Modal;

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, app))
            .expect("draw succeeds");
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_too_small_terminal() {
        let mut app = App::new(true);
        let terminal = draw(&mut app, 39, 20);
        assert!(screen(&terminal).starts_with("Terminal too small. Please resize."));
        assert!(app.panels.is_empty());
    }

    #[test]
    fn test_frame_records_layout_and_windows() {
        let mut app = App::new(true);
        let terminal = draw(&mut app, 120, 30);

        assert_eq!(app.panels[presets::DETAILS], Bounds::new(60, 0, 119, 28));
        assert_eq!(app.main.visible_window, 25);
        assert_eq!(app.options.visible_window, 25);
        let text = screen(&terminal);
        assert!(text.contains(" Main Menu "));
        assert!(text.contains("▶ Status & Monitoring"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_resize_reclamps_main_menu() {
        let mut app = App::new(true);
        draw(&mut app, 120, 30);
        app.main.select(6);

        // Height 11 leaves 10 panel rows: a window of 6 of the 7 sections.
        let terminal = draw(&mut app, 60, 11);
        assert_eq!(app.main.visible_window, 6);
        assert_eq!(app.main.scroll_offset, 1);
        let text = screen(&terminal);
        assert!(text.contains("▶ Quit"));
        assert!(text.contains("█"), "scrollbar shown");
    }

    #[test]
    fn test_modal_overlay_drawn() {
        let mut app = App::new(true);
        app.modal = Some(Modal::confirm_stop());
        let text = screen(&draw(&mut app, 120, 30));
        assert!(text.contains("Are you sure you want to stop Nginx?"));
    }
}
