//! Widgets drawn by the dashboard.
//!
//! Scrollable panels are `StatefulWidget`s over a shared
//! [`ViewportState`](crate::viewport::ViewportState): rendering clamps the
//! state to the area it was given and writes it back, so the next key press
//! navigates against the window that is actually on screen.

mod list_panel;
mod modal_view;
mod panel;
mod status_bar;
mod text_panel;
mod theme;

pub use list_panel::ListPanel;
pub use modal_view::ModalView;
pub use status_bar::StatusBar;
pub use text_panel::TextPanel;
pub use theme::Theme;
