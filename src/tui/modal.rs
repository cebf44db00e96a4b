//! Modal dialogs as a tagged union, one variant per dialog.

use crossterm::event::{KeyCode, KeyEvent};

use crate::backend::{ProxyKind, Request, ServiceAction, SiteKind};

const YES_NO: &[&str] = &["Yes", "No"];
const SITE_KINDS: &[&str] = &[
    SiteKind::Laravel.label(),
    SiteKind::Static.label(),
    SiteKind::VanillaPhp.label(),
    SiteKind::Custom.label(),
];
const PROXY_KINDS: &[&str] = &[ProxyKind::Simple.label(), ProxyKind::LoadBalanced.label()];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    ConfirmStop { cursor: usize },
    ConfirmDelete { site: String, cursor: usize },
    SiteType { cursor: usize },
    SiteName { kind: SiteKind, input: String },
    ProxyType { cursor: usize },
    ProxyTarget { kind: ProxyKind, input: String },
}

/// What the dashboard should do after a key press inside a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Keep the (possibly updated) modal open.
    Stay,
    /// Replace the modal with the next step.
    Next(Modal),
    /// Close without doing anything.
    Close,
    /// Close and send a request.
    Submit(Request),
}

impl Modal {
    pub const fn confirm_stop() -> Self {
        Self::ConfirmStop { cursor: 0 }
    }

    pub const fn confirm_delete(site: String) -> Self {
        Self::ConfirmDelete { site, cursor: 0 }
    }

    pub const fn site_type() -> Self {
        Self::SiteType { cursor: 0 }
    }

    pub const fn proxy_type() -> Self {
        Self::ProxyType { cursor: 0 }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::ConfirmStop { .. } => "Confirm Stop",
            Self::ConfirmDelete { .. } => "Confirm Delete Site",
            Self::SiteType { .. } => "Add New Site",
            Self::SiteName { kind, .. } => match kind {
                SiteKind::Laravel => "Laravel Site Name",
                SiteKind::Static => "Static Website Name",
                SiteKind::VanillaPhp => "Vanilla PHP Site Name",
                SiteKind::Custom => "Custom Site Name",
            },
            Self::ProxyType { .. } => "Add Reverse Proxy",
            Self::ProxyTarget { kind, .. } => match kind {
                ProxyKind::Simple => "Simple Reverse Proxy",
                ProxyKind::LoadBalanced => "Load Balanced Proxy",
            },
        }
    }

    /// Explanatory lines shown above the choices or the input field.
    pub fn prompt(&self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::ConfirmStop { .. } => &["Are you sure you want to stop Nginx?"],
            Self::ConfirmDelete { .. } => &[
                "Are you sure you want to delete this site?",
                "This will remove the configuration file.",
            ],
            Self::SiteType { .. } => &["Select site type:"],
            Self::SiteName { .. } => &["Enter site name:"],
            Self::ProxyType { .. } => &["Select proxy type:"],
            Self::ProxyTarget { kind, .. } => match kind {
                ProxyKind::Simple => &[
                    "Enter domain[:port] -> backend",
                    "Example: app.local -> localhost:3000",
                ],
                ProxyKind::LoadBalanced => &[
                    "Enter domain[:port] -> backend,backend",
                    "Example: app.local:80 -> localhost:3000,localhost:3001",
                ],
            },
        };
        let mut lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
        if let Self::ConfirmDelete { site, .. } = self {
            lines.insert(0, format!("Site: {site}"));
        }
        lines
    }

    /// Choices and the highlighted one, for choice dialogs.
    pub fn choices(&self) -> Option<(&'static [&'static str], usize)> {
        match self {
            Self::ConfirmStop { cursor } | Self::ConfirmDelete { cursor, .. } => {
                Some((YES_NO, *cursor))
            }
            Self::SiteType { cursor } => Some((SITE_KINDS, *cursor)),
            Self::ProxyType { cursor } => Some((PROXY_KINDS, *cursor)),
            Self::SiteName { .. } | Self::ProxyTarget { .. } => None,
        }
    }

    /// Current text, for input dialogs.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::SiteName { input, .. } | Self::ProxyTarget { input, .. } => Some(input),
            _ => None,
        }
    }

    pub const fn hint(&self) -> &'static str {
        match self {
            Self::ConfirmStop { .. } | Self::ConfirmDelete { .. } => {
                "↑/↓: Navigate | Enter: Confirm | Esc: Cancel"
            }
            Self::SiteType { .. } | Self::ProxyType { .. } => {
                "↑/↓: Navigate | Enter: Select | Esc: Cancel"
            }
            Self::SiteName { .. } => "Type site name | Enter: Confirm | Esc: Cancel",
            Self::ProxyTarget { .. } => "Type target | Enter: Create | Esc: Cancel",
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self {
            Self::ConfirmStop { cursor }
            | Self::ConfirmDelete { cursor, .. }
            | Self::SiteType { cursor }
            | Self::ProxyType { cursor } => Some(cursor),
            Self::SiteName { .. } | Self::ProxyTarget { .. } => None,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let count = self.choices().map_or(0, |(choices, _)| choices.len());
        if let Some(cursor) = self.cursor_mut() {
            if down {
                *cursor = (*cursor + 1).min(count.saturating_sub(1));
            } else {
                *cursor = cursor.saturating_sub(1);
            }
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::SiteName { .. } => c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'),
            Self::ProxyTarget { .. } => !c.is_control(),
            _ => false,
        }
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::SiteName { input, .. } | Self::ProxyTarget { input, .. } => Some(input),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ModalAction {
        match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => self.confirm(),
            KeyCode::Backspace => {
                if let Some(input) = self.input_mut() {
                    input.pop();
                }
                ModalAction::Stay
            }
            KeyCode::Up | KeyCode::Down => {
                self.move_cursor(key.code == KeyCode::Down);
                ModalAction::Stay
            }
            KeyCode::Char(c) if self.input().is_some() => {
                if self.accepts(c) {
                    if let Some(input) = self.input_mut() {
                        input.push(c);
                    }
                }
                ModalAction::Stay
            }
            KeyCode::Char(c @ ('j' | 'k')) => {
                self.move_cursor(c == 'j');
                ModalAction::Stay
            }
            _ => ModalAction::Stay,
        }
    }

    fn confirm(&self) -> ModalAction {
        match self {
            Self::ConfirmStop { cursor: 0 } => {
                ModalAction::Submit(Request::Service(ServiceAction::Stop))
            }
            Self::ConfirmDelete { site, cursor: 0 } => {
                ModalAction::Submit(Request::DeleteSite(site.clone()))
            }
            Self::ConfirmStop { .. } | Self::ConfirmDelete { .. } => ModalAction::Close,
            Self::SiteType { cursor } => match SiteKind::ALL.get(*cursor) {
                Some(&kind) => ModalAction::Next(Self::SiteName {
                    kind,
                    input: String::new(),
                }),
                None => ModalAction::Close,
            },
            Self::ProxyType { cursor } => match ProxyKind::ALL.get(*cursor) {
                Some(&kind) => ModalAction::Next(Self::ProxyTarget {
                    kind,
                    input: String::new(),
                }),
                None => ModalAction::Close,
            },
            Self::SiteName { kind, input } => ModalAction::Submit(Request::AddSite {
                kind: *kind,
                name: input.clone(),
            }),
            Self::ProxyTarget { kind, input } => ModalAction::Submit(Request::AddProxy {
                kind: *kind,
                target: input.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(modal: &mut Modal, code: KeyCode) -> ModalAction {
        modal.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_confirm_stop_yes_and_no() {
        let mut modal = Modal::confirm_stop();
        assert_eq!(
            press(&mut modal, KeyCode::Enter),
            ModalAction::Submit(Request::Service(ServiceAction::Stop))
        );

        press(&mut modal, KeyCode::Down);
        press(&mut modal, KeyCode::Down);
        assert_eq!(modal, Modal::ConfirmStop { cursor: 1 }, "cursor stops at No");
        assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::Close);
    }

    #[test]
    fn test_site_flow() {
        let mut modal = Modal::site_type();
        press(&mut modal, KeyCode::Char('j'));
        let ModalAction::Next(mut name) = press(&mut modal, KeyCode::Enter) else {
            panic!("site type leads to a name prompt");
        };
        assert_eq!(name.title(), "Static Website Name");

        for c in "my site/k".chars() {
            press(&mut name, KeyCode::Char(c));
        }
        press(&mut name, KeyCode::Backspace);
        assert_eq!(name.input(), Some("mysite"), "space and slash rejected, k typed");
        assert_eq!(
            press(&mut name, KeyCode::Enter),
            ModalAction::Submit(Request::AddSite {
                kind: SiteKind::Static,
                name: "mysite".into()
            })
        );
    }

    #[test]
    fn test_proxy_input_accepts_arrows_and_spaces() {
        let mut modal = Modal::ProxyTarget {
            kind: ProxyKind::LoadBalanced,
            input: String::new(),
        };
        for c in "a -> b:1,c:2".chars() {
            press(&mut modal, KeyCode::Char(c));
        }
        assert_eq!(modal.input(), Some("a -> b:1,c:2"));
        assert_eq!(modal.choices(), None);
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = Modal::confirm_delete("blog".into());
        assert_eq!(press(&mut modal, KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.prompt()[0], "Site: blog");
    }
}
