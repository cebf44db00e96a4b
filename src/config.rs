//! User configuration loaded from a JSON file.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lazynginx/config.json")
}

/// Default location of the log file.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lazynginx/lazynginx.log")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: NginxPaths,
    pub service: ServiceCommands,
    /// Lines shown when viewing a log file.
    pub log_tail_lines: usize,
    /// Redraw interval while idle, in milliseconds.
    pub tick_rate_ms: u64,
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: NginxPaths::default(),
            service: ServiceCommands::default(),
            log_tail_lines: 50,
            tick_rate_ms: 50,
            mouse: true,
        }
    }
}

/// Where nginx keeps its files. Each list is searched in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NginxPaths {
    pub main_config: Vec<PathBuf>,
    pub sites_available: Vec<PathBuf>,
    pub conf_d: Vec<PathBuf>,
    pub error_log: Vec<PathBuf>,
    pub access_log: Vec<PathBuf>,
}

impl Default for NginxPaths {
    fn default() -> Self {
        Self {
            main_config: paths(&[
                "/etc/nginx/nginx.conf",
                "/usr/local/nginx/conf/nginx.conf",
                "/usr/local/etc/nginx/nginx.conf",
            ]),
            sites_available: paths(&[
                "/etc/nginx/sites-available",
                "/usr/local/nginx/sites-available",
            ]),
            conf_d: paths(&["/etc/nginx/conf.d"]),
            error_log: paths(&[
                "/var/log/nginx/error.log",
                "/usr/local/nginx/logs/error.log",
            ]),
            access_log: paths(&[
                "/var/log/nginx/access.log",
                "/usr/local/nginx/logs/access.log",
            ]),
        }
    }
}

/// Command lines (program followed by arguments) for service control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceCommands {
    pub status: Vec<String>,
    pub start: Vec<String>,
    pub stop: Vec<String>,
    pub restart: Vec<String>,
    pub reload: Vec<String>,
    pub test: Vec<String>,
}

impl Default for ServiceCommands {
    fn default() -> Self {
        Self {
            status: argv(&["systemctl", "is-active", "nginx"]),
            start: argv(&["systemctl", "start", "nginx"]),
            stop: argv(&["systemctl", "stop", "nginx"]),
            restart: argv(&["systemctl", "restart", "nginx"]),
            reload: argv(&["systemctl", "reload", "nginx"]),
            test: argv(&["nginx", "-t"]),
        }
    }
}

impl ServiceCommands {
    fn validate(&self) -> Result<()> {
        let commands = [
            ("status", &self.status),
            ("start", &self.start),
            ("stop", &self.stop),
            ("restart", &self.restart),
            ("reload", &self.reload),
            ("test", &self.test),
        ];
        match commands.into_iter().find(|(_, argv)| argv.is_empty()) {
            Some((action, _)) => Err(ConfigError::EmptyCommand { action }.into()),
            None => Ok(()),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(default_config_path, Path::to_path_buf);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = Self::parse(&text).map_err(|source| ConfigError::Malformed {
            path: path.clone(),
            source,
        })?;
        config.service.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Pretty JSON rendering, used to print a starter config.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
