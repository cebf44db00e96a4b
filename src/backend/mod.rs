//! External collaborators: service control, config files, logs, sites.
//!
//! The dashboard never blocks on these. It queues a [`Request`], the worker
//! task executes it, and a [`Message`] comes back with either display text or
//! an error string. Nothing here knows about layout or scrolling.

mod files;
mod privilege;
mod service;
mod templates;
mod worker;

pub use files::extract_proxy_targets;
pub use privilege::is_admin;
pub use templates::{parse_proxy_target, ProxyTarget};
pub use worker::{execute, spawn_worker, WorkerEndpoint};

/// Text for the details panel, or an error to show in its place.
pub type Outcome = Result<String, String>;

/// Service control actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
    Reload,
}

impl ServiceAction {
    const fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Reload => "reload",
        }
    }

    const fn past_tense(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Restart => "restarted",
            Self::Reload => "reloaded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Error,
    Access,
}

impl LogKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Access => "access",
        }
    }
}

/// Server block flavours for new sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Laravel,
    Static,
    VanillaPhp,
    Custom,
}

impl SiteKind {
    pub const ALL: [Self; 4] = [Self::Laravel, Self::Static, Self::VanillaPhp, Self::Custom];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Laravel => "Laravel",
            Self::Static => "Static Website",
            Self::VanillaPhp => "Vanilla PHP",
            Self::Custom => "Custom",
        }
    }

    /// Name used when the user leaves the name blank.
    pub const fn fallback_name(self) -> &'static str {
        match self {
            Self::Laravel => "laravel-site",
            Self::Static => "static-site",
            Self::VanillaPhp => "php-site",
            Self::Custom => "custom-site",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    Simple,
    LoadBalanced,
}

impl ProxyKind {
    pub const ALL: [Self; 2] = [Self::Simple, Self::LoadBalanced];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple Proxy",
            Self::LoadBalanced => "Load Balanced",
        }
    }
}

/// Work the dashboard asks the worker to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Status,
    TestConfig,
    Service(ServiceAction),
    ViewConfig,
    ViewLog(LogKind),
    ListSites,
    ViewSite(String),
    AddSite { kind: SiteKind, name: String },
    DeleteSite(String),
    ListProxies,
    AddProxy { kind: ProxyKind, target: String },
}

/// Results coming back from the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Service status line.
    Status(Outcome),
    /// Text for the details panel.
    Output(Outcome),
    Sites(Result<Vec<String>, String>),
    Proxies(Result<Vec<String>, String>),
    /// A site was added or removed; the site list is stale.
    SitesChanged(Outcome),
    /// A proxy was added; the proxy list is stale.
    ProxiesChanged(Outcome),
}
