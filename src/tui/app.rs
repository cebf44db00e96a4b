//! Application state for the dashboard.

use std::{collections::HashMap, mem};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{
    menu::{self, Listing, Section},
    modal::{Modal, ModalAction},
};
use crate::{
    backend::{Message, Request, ServiceAction},
    layout::{presets, Bounds},
    viewport::ViewportState,
};

pub const WELCOME: &str = "Select an option from the menu";

/// Rows between a panel's top edge and its first item: border, title, spacer.
const FIRST_ITEM_ROW: i32 = 3;

fn admin_warning() -> String {
    format!(
        "\n\n{}\n\n\
         ⚠️  WARNING: Not running with administrator privileges\n\n\
         Some operations (start, stop, restart, reload) may fail.\n\
         Please restart LazyNginx with elevated permissions:\n\n\
         Windows: Run as Administrator\n\
         Linux/macOS: Use sudo",
        "─".repeat(50)
    )
}

/// The three scrollable panels, left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Main,
    Options,
    Details,
}

impl Panel {
    pub const ALL: [Self; 3] = [Self::Main, Self::Options, Self::Details];

    /// Layout label of the box this panel is drawn in.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => presets::MAIN_MENU,
            Self::Options => presets::OPTIONS,
            Self::Details => presets::DETAILS,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Main => Self::Options,
            Self::Options | Self::Details => Self::Details,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Main | Self::Options => Self::Main,
            Self::Details => Self::Options,
        }
    }
}

/// Application state.
pub struct App {
    /// Section titles shown in the main menu.
    pub main_items: Vec<String>,
    pub main: ViewportState,
    pub options: ViewportState,
    pub details: ViewportState,
    pub focus: Panel,
    pub sites: Listing,
    pub proxies: Listing,
    /// Details text split into display lines.
    detail_lines: Vec<String>,
    /// Last service status line.
    pub status: String,
    admin: bool,
    pub modal: Option<Modal>,
    /// Panel boxes of the last frame, for mouse hit testing.
    pub panels: HashMap<String, Bounds>,
    /// Whether app should exit.
    pub should_exit: bool,
    /// Outgoing request queue.
    pending: Vec<Request>,
}

impl App {
    pub fn new(admin: bool) -> Self {
        let main_items: Vec<String> = Section::ALL
            .iter()
            .map(|section| section.title().to_string())
            .collect();
        let mut app = Self {
            main: ViewportState::new(main_items.len()),
            main_items,
            options: ViewportState::default(),
            details: ViewportState::default(),
            focus: Panel::Main,
            sites: Listing::Loading,
            proxies: Listing::Loading,
            detail_lines: Vec::new(),
            status: String::new(),
            admin,
            modal: None,
            panels: HashMap::new(),
            should_exit: false,
            pending: Vec::new(),
        };
        app.refresh_options();
        app.set_details(WELCOME);
        app.queue_request(Request::Status);
        app
    }

    pub fn section(&self) -> Section {
        Section::at(self.main.cursor)
    }

    pub fn option_rows(&self) -> Vec<String> {
        menu::option_rows(self.section(), &self.sites, &self.proxies)
    }

    pub fn detail_lines(&self) -> &[String] {
        &self.detail_lines
    }

    /// The site under the option cursor, if the cursor is on a real site.
    pub fn selected_site(&self) -> Option<&str> {
        if self.section() != Section::Sites {
            return None;
        }
        let index = self.options.selected()?.checked_sub(1)?;
        self.sites.items().get(index).map(String::as_str)
    }

    /// Queue a request to be sent to the worker.
    pub fn queue_request(&mut self, request: Request) {
        self.pending.push(request);
    }

    /// Take all queued requests.
    pub fn take_requests(&mut self) -> Vec<Request> {
        mem::take(&mut self.pending)
    }

    fn set_details(&mut self, text: &str) {
        let mut text = text.to_string();
        if !self.admin {
            text.push_str(&admin_warning());
        }
        self.detail_lines = text.split('\n').map(ToString::to_string).collect();
        self.details.reset();
        self.details.set_item_count(self.detail_lines.len());
    }

    fn clear_details(&mut self) {
        self.detail_lines.clear();
        self.details.reset();
        self.details.set_item_count(0);
    }

    fn refresh_options(&mut self) {
        let count = self.option_rows().len();
        self.options.set_item_count(count);
    }

    /// The main menu cursor landed on a new section.
    fn section_changed(&mut self) {
        self.options.reset();
        self.clear_details();
        match self.section() {
            Section::Status => self.queue_request(Request::Status),
            Section::Sites => {
                self.sites = Listing::Loading;
                self.queue_request(Request::ListSites);
            }
            Section::Proxies => {
                self.proxies = Listing::Loading;
                self.queue_request(Request::ListProxies);
            }
            Section::Configuration => self.queue_request(Request::ViewConfig),
            Section::Service | Section::Logs | Section::Quit => {}
        }
        self.refresh_options();
    }

    /// The option cursor moved to a new row.
    fn option_changed(&mut self) {
        self.clear_details();
        match self.section() {
            Section::Logs => {
                if let Some(kind) = menu::log_kind(self.options.cursor) {
                    self.queue_request(Request::ViewLog(kind));
                }
            }
            Section::Sites => {
                if let Some(site) = self.selected_site() {
                    let request = Request::ViewSite(site.to_string());
                    self.queue_request(request);
                }
            }
            _ => {}
        }
    }

    fn viewport_mut(&mut self, panel: Panel) -> &mut ViewportState {
        match panel {
            Panel::Main => &mut self.main,
            Panel::Options => &mut self.options,
            Panel::Details => &mut self.details,
        }
    }

    /// Put the cursor of a list panel on `index`, loading what it points at.
    fn select(&mut self, panel: Panel, index: usize) {
        if !self.viewport_mut(panel).select(index) {
            return;
        }
        match panel {
            Panel::Main => self.section_changed(),
            Panel::Options => self.option_changed(),
            Panel::Details => {}
        }
    }

    /// One step up or down: moves the cursor of a list, scrolls the details.
    fn step(&mut self, panel: Panel, down: bool) {
        if panel == Panel::Details {
            self.details.scroll_by(if down { 1 } else { -1 });
            return;
        }
        let cursor = self.viewport_mut(panel).cursor;
        let target = if down {
            cursor.saturating_add(1)
        } else {
            match cursor.checked_sub(1) {
                Some(target) => target,
                None => return,
            }
        };
        self.select(panel, target);
    }

    /// Enter on the focused panel.
    fn activate(&mut self) {
        match self.focus {
            Panel::Main => self.focus = Panel::Options,
            Panel::Options => self.execute_option(),
            Panel::Details => {}
        }
    }

    fn execute_option(&mut self) {
        let option = self.options.cursor;
        let request = match (self.section(), option) {
            (Section::Status, 0) => Request::Status,
            (Section::Status, 1) => Request::TestConfig,
            (Section::Service, 0) => Request::Service(ServiceAction::Start),
            (Section::Service, 1) => {
                self.modal = Some(Modal::confirm_stop());
                return;
            }
            (Section::Service, 2) => Request::Service(ServiceAction::Restart),
            (Section::Service, 3) => Request::Service(ServiceAction::Reload),
            (Section::Sites, 0) => {
                self.modal = Some(Modal::site_type());
                return;
            }
            (Section::Sites, _) => match self.selected_site() {
                Some(site) => Request::ViewSite(site.to_string()),
                None => return,
            },
            (Section::Proxies, 0) => {
                self.modal = Some(Modal::proxy_type());
                return;
            }
            (Section::Configuration, _) => Request::ViewConfig,
            (Section::Logs, option) => match menu::log_kind(option) {
                Some(kind) => Request::ViewLog(kind),
                None => return,
            },
            (Section::Quit, _) => {
                self.should_exit = true;
                return;
            }
            _ => return,
        };
        self.queue_request(request);
    }

    fn request_delete(&mut self) {
        if self.focus != Panel::Options {
            return;
        }
        if let Some(site) = self.selected_site() {
            self.modal = Some(Modal::confirm_delete(site.to_string()));
        }
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        if let Some(modal) = &mut self.modal {
            match modal.handle_key(key) {
                ModalAction::Stay => {}
                ModalAction::Next(next) => self.modal = Some(next),
                ModalAction::Close => self.modal = None,
                ModalAction::Submit(request) => {
                    self.modal = None;
                    self.queue_request(request);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Left | KeyCode::Char('h') => self.focus = self.focus.previous(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::Char('k') => self.step(self.focus, false),
            KeyCode::Down | KeyCode::Char('j') => self.step(self.focus, true),
            KeyCode::Enter => self.activate(),
            KeyCode::Char('d') => self.request_delete(),
            _ => {}
        }
    }

    fn panel_at(&self, x: i32, y: i32) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| {
            self.panels
                .get(panel.label())
                .is_some_and(|bounds| bounds.contains(x, y))
        })
    }

    /// Item index under screen row `y` of `panel`, if that row shows an item.
    fn item_at(&self, panel: Panel, y: i32) -> Option<usize> {
        let bounds = self.panels.get(panel.label())?;
        let row = usize::try_from(y - bounds.top - FIRST_ITEM_ROW).ok()?;
        let state = match panel {
            Panel::Main => &self.main,
            Panel::Options => &self.options,
            Panel::Details => return None,
        };
        (row < state.visible_window).then(|| state.scroll_offset + row)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.modal.is_some() {
            return;
        }
        let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
        let Some(panel) = self.panel_at(x, y) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.focus = panel;
                if let Some(index) = self.item_at(panel, y) {
                    self.select(panel, index);
                }
            }
            MouseEventKind::ScrollUp => self.step(panel, false),
            MouseEventKind::ScrollDown => self.step(panel, true),
            _ => {}
        }
    }

    /// Handle a result from the worker.
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::Status(outcome) => {
                let (Ok(text) | Err(text)) = outcome;
                self.status.clone_from(&text);
                self.set_details(&text);
            }
            Message::Output(outcome) => {
                let (Ok(text) | Err(text)) = outcome;
                self.set_details(&text);
            }
            Message::Sites(result) => {
                let summary = match &result {
                    Ok(sites) if sites.is_empty() => "No sites found".to_string(),
                    Ok(sites) => format!("Found {} sites", sites.len()),
                    Err(e) => e.clone(),
                };
                self.sites = result.map_or_else(Listing::Failed, Listing::Loaded);
                self.listing_loaded(Section::Sites, &summary);
            }
            Message::Proxies(result) => {
                let summary = match &result {
                    Ok(proxies) if proxies.is_empty() => "No reverse proxies configured".to_string(),
                    Ok(proxies) => format!("Found {} reverse proxies", proxies.len()),
                    Err(e) => e.clone(),
                };
                self.proxies = result.map_or_else(Listing::Failed, Listing::Loaded);
                self.listing_loaded(Section::Proxies, &summary);
            }
            Message::SitesChanged(outcome) => {
                if outcome.is_ok() {
                    self.sites = Listing::Loading;
                    self.queue_request(Request::ListSites);
                }
                let (Ok(text) | Err(text)) = outcome;
                self.set_details(&text);
                self.refresh_options();
            }
            Message::ProxiesChanged(outcome) => {
                if outcome.is_ok() {
                    self.proxies = Listing::Loading;
                    self.queue_request(Request::ListProxies);
                }
                let (Ok(text) | Err(text)) = outcome;
                self.set_details(&text);
                self.refresh_options();
            }
        }
    }

    /// A listing for `section` arrived. The summary only replaces empty
    /// details, so it never hides the result of an add or delete.
    fn listing_loaded(&mut self, section: Section, summary: &str) {
        tracing::debug!(?section, summary, "listing loaded");
        if self.section() != section {
            return;
        }
        self.refresh_options();
        if self.detail_lines.is_empty() {
            self.set_details(summary);
        }
    }
}
