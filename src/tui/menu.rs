//! Main menu sections and the option rows each one offers.

use crate::backend::LogKind;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Status,
    Service,
    Sites,
    Proxies,
    Configuration,
    Logs,
    Quit,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Status,
        Self::Service,
        Self::Sites,
        Self::Proxies,
        Self::Configuration,
        Self::Logs,
        Self::Quit,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Status => "Status & Monitoring",
            Self::Service => "Service Control",
            Self::Sites => "Sites",
            Self::Proxies => "Reverse Proxies",
            Self::Configuration => "Configuration",
            Self::Logs => "Logs",
            Self::Quit => "Quit",
        }
    }

    /// Section at main menu row `index`, falling back to the first one.
    pub fn at(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Status)
    }

    /// Rows that do not depend on loaded data.
    const fn fixed_options(self) -> &'static [&'static str] {
        match self {
            Self::Status => &["Check Status", "Test Configuration"],
            Self::Service => &["Start", "Stop", "Restart", "Reload Configuration"],
            Self::Sites => &["Add site"],
            Self::Proxies => &["Add Reverse Proxy"],
            Self::Configuration => &[],
            Self::Logs => &["View Error Log", "View Access Log"],
            Self::Quit => &["Exit Application"],
        }
    }
}

pub fn log_kind(option: usize) -> Option<LogKind> {
    match option {
        0 => Some(LogKind::Error),
        1 => Some(LogKind::Access),
        _ => None,
    }
}

/// Contents of a list that the worker fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

impl Listing {
    pub fn items(&self) -> &[String] {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Option rows for `section`. Dynamic sections show a placeholder row while
/// their listing is loading or empty.
pub fn option_rows(section: Section, sites: &Listing, proxies: &Listing) -> Vec<String> {
    let mut rows: Vec<String> = section
        .fixed_options()
        .iter()
        .map(ToString::to_string)
        .collect();

    let (listing, loading, empty) = match section {
        Section::Sites => (sites, "Loading sites...", "No sites found"),
        Section::Proxies => (
            proxies,
            "Loading reverse proxies...",
            "No reverse proxies found",
        ),
        _ => return rows,
    };
    match listing {
        Listing::Loading => rows.push(loading.to_string()),
        Listing::Loaded(items) if !items.is_empty() => rows.extend(items.iter().cloned()),
        Listing::Loaded(_) | Listing::Failed(_) => rows.push(empty.to_string()),
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_sections() {
        let none = Listing::Loading;
        assert_eq!(
            option_rows(Section::Service, &none, &none),
            vec!["Start", "Stop", "Restart", "Reload Configuration"]
        );
        assert!(option_rows(Section::Configuration, &none, &none).is_empty());
    }

    #[test]
    fn test_site_rows_follow_listing() {
        let proxies = Listing::Loading;
        assert_eq!(
            option_rows(Section::Sites, &Listing::Loading, &proxies),
            vec!["Add site", "Loading sites..."]
        );
        assert_eq!(
            option_rows(Section::Sites, &Listing::Loaded(vec![]), &proxies),
            vec!["Add site", "No sites found"]
        );
        let loaded = Listing::Loaded(vec!["blog".into(), "shop".into()]);
        assert_eq!(
            option_rows(Section::Sites, &loaded, &proxies),
            vec!["Add site", "blog", "shop"]
        );
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(Section::at(2), Section::Sites);
        assert_eq!(Section::at(99), Section::Status);
        assert_eq!(Section::ALL.len(), 7);
    }
}
