//! Server block templates for new sites and reverse proxies.

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};

use super::{
    files::{enabled_dir, is_plain_name, searched},
    Outcome, ProxyKind, SiteKind,
};
use crate::config::NginxPaths;

const PHP_FPM_SOCKET: &str = "unix:/var/run/php/php8.1-fpm.sock";

const STATIC_ASSETS: &str = "    location = /favicon.ico { access_log off; log_not_found off; }
    location = /robots.txt  { access_log off; log_not_found off; }";

fn php_location() -> String {
    format!(
        "    location ~ \\.php$ {{
        fastcgi_pass {PHP_FPM_SOCKET};
        fastcgi_param SCRIPT_FILENAME $realpath_root$fastcgi_script_name;
        include fastcgi_params;
    }}"
    )
}

/// Server block for a new site named `name`.
pub fn site_config(kind: SiteKind, name: &str) -> String {
    match kind {
        SiteKind::Laravel => format!(
            "server {{
    listen 80;
    server_name {name}.local;
    root /var/www/{name}/public;

    add_header X-Frame-Options \"SAMEORIGIN\";
    add_header X-Content-Type-Options \"nosniff\";

    index index.php;

    charset utf-8;

    location / {{
        try_files $uri $uri/ /index.php?$query_string;
    }}

{STATIC_ASSETS}

    error_page 404 /index.php;

{php}

    location ~ /\\.(?!well-known).* {{
        deny all;
    }}
}}
",
            php = php_location()
        ),
        SiteKind::Static => format!(
            "server {{
    listen 80;
    server_name {name}.local;
    root /var/www/{name};

    index index.html index.htm;

    location / {{
        try_files $uri $uri/ =404;
    }}

{STATIC_ASSETS}
}}
"
        ),
        SiteKind::VanillaPhp => format!(
            "server {{
    listen 80;
    server_name {name}.local;
    root /var/www/{name};

    index index.php index.html index.htm;

    location / {{
        try_files $uri $uri/ =404;
    }}

{STATIC_ASSETS}

{php}
}}
",
            php = php_location()
        ),
        SiteKind::Custom => format!(
            "server {{
    listen 80;
    server_name {name}.local;
    root /var/www/{name};

    index index.html index.htm index.php;

    location / {{
        try_files $uri $uri/ =404;
    }}
}}
"
        ),
    }
}

/// Parsed `domain[:port] -> backend[,backend...]` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    pub server_name: String,
    pub listen_port: u16,
    pub backends: Vec<String>,
}

pub const PROXY_FORMAT_HELP: &str = "Expected format:
- Simple: domain.com:port -> http://backend:port
- Load Balanced: domain.com:port -> backend1:port,backend2:port";

pub fn parse_proxy_target(input: &str) -> Result<ProxyTarget, String> {
    let Some((frontend, backends)) = input.split_once("->") else {
        return Err(format!("Invalid proxy configuration format.\n\n{PROXY_FORMAT_HELP}"));
    };
    let frontend = frontend.trim();
    let backends: Vec<String> = backends
        .split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(ToString::to_string)
        .collect();
    if frontend.is_empty() || backends.is_empty() {
        return Err("Invalid proxy configuration. Frontend and backend cannot be empty.".into());
    }

    let (server_name, listen_port) = match frontend.split_once(':') {
        Some((name, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| format!("Invalid listen port: {port}"))?;
            (name, port)
        }
        None => (frontend, 80),
    };
    if !is_plain_name(server_name) {
        return Err(format!("Invalid server name: {server_name}"));
    }

    Ok(ProxyTarget {
        server_name: server_name.to_string(),
        listen_port,
        backends,
    })
}

fn with_scheme(backend: &str) -> String {
    if backend.starts_with("http://") || backend.starts_with("https://") {
        backend.to_string()
    } else {
        format!("http://{backend}")
    }
}

fn without_scheme(backend: &str) -> &str {
    backend
        .strip_prefix("http://")
        .or_else(|| backend.strip_prefix("https://"))
        .unwrap_or(backend)
}

const PROXY_HEADERS: &str = "        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;";

/// File name and contents of the proxy config for `target`.
pub fn proxy_config(kind: ProxyKind, target: &ProxyTarget) -> Result<(String, String), String> {
    let ProxyTarget {
        server_name,
        listen_port,
        backends,
    } = target;
    match kind {
        ProxyKind::Simple => {
            let [backend] = backends.as_slice() else {
                return Err(
                    "A simple proxy takes exactly one backend; use Load Balanced for several."
                        .into(),
                );
            };
            let content = format!(
                "# Simple Reverse Proxy for {server_name}
server {{
    listen {listen_port};
    server_name {server_name};

    location / {{
        proxy_pass {pass};
{PROXY_HEADERS}
    }}
}}
",
                pass = with_scheme(backend)
            );
            Ok((format!("proxy-{server_name}"), content))
        }
        ProxyKind::LoadBalanced => {
            let upstream = format!("{}_backend", server_name.replace('.', "_"));
            let servers: String = backends
                .iter()
                .map(|b| format!("    server {};\n", without_scheme(b)))
                .collect();
            let content = format!(
                "# Load Balanced Reverse Proxy for {server_name}
upstream {upstream} {{
{servers}}}

server {{
    listen {listen_port};
    server_name {server_name};

    location / {{
        proxy_pass http://{upstream};
{PROXY_HEADERS}
    }}
}}
"
            );
            Ok((format!("proxy-lb-{server_name}"), content))
        }
    }
}

/// Write `content` to a new file at `path` and link it into `sites-enabled`
/// when `dir` is a `sites-available` directory. An existing file is left
/// untouched.
async fn install(dir: &Path, path: &Path, content: &str) -> Result<(), String> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => format!("{} already exists", path.display()),
            _ => format!("{e}\n\nYou may need sudo/administrator privileges"),
        })?;
    let written = match file.write_all(content.as_bytes()).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    written.map_err(|e| format!("{e}\n\nYou may need sudo/administrator privileges"))?;

    if let Some(enabled) = enabled_dir(dir) {
        let link = enabled.join(path.file_name().unwrap_or_default());
        if let Err(e) = symlink(path, &link).await {
            tracing::warn!("Could not enable {}: {e}", link.display());
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn symlink(original: &Path, link: &Path) -> io::Result<()> {
    fs::symlink(original, link).await
}

#[cfg(not(unix))]
async fn symlink(_original: &Path, _link: &Path) -> io::Result<()> {
    Ok(())
}

async fn first_existing_dir(dirs: &[PathBuf]) -> Option<&PathBuf> {
    for dir in dirs {
        if fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
            return Some(dir);
        }
    }
    None
}

pub async fn add_site(kind: SiteKind, name: &str, dirs: &[PathBuf]) -> Outcome {
    let name = match name.trim() {
        "" => kind.fallback_name(),
        name => name,
    };
    if !is_plain_name(name) {
        return Err(format!("Invalid site name: {name}"));
    }

    let Some(dir) = first_existing_dir(dirs).await else {
        return Err(format!(
            "Could not locate nginx sites directory.\n\nPlease ensure Nginx is properly installed.\n\nSearched:\n{}",
            searched(dirs)
        ));
    };
    let path = dir.join(name);
    install(dir, &path, &site_config(kind, name))
        .await
        .map_err(|e| format!("Failed to create site: {e}"))?;

    tracing::info!("Created {} site {name} at {}", kind.label(), path.display());
    Ok(format!(
        "Site '{name}' created successfully!\n\nConfiguration file: {}\n\nType: {}\n\nNext steps:\n1. Create directory: /var/www/{name}\n2. Reload nginx\n3. Add to /etc/hosts: 127.0.0.1 {name}.local",
        path.display(),
        kind.label()
    ))
}

pub async fn add_proxy(kind: ProxyKind, input: &str, paths: &NginxPaths) -> Outcome {
    let target = parse_proxy_target(input)?;
    let (config_name, content) = proxy_config(kind, &target)?;

    let (dir, path) = if let Some(dir) = first_existing_dir(&paths.sites_available).await {
        (dir, dir.join(&config_name))
    } else if let Some(dir) = first_existing_dir(&paths.conf_d).await {
        (dir, dir.join(format!("{config_name}.conf")))
    } else {
        let all: Vec<PathBuf> = paths
            .sites_available
            .iter()
            .chain(&paths.conf_d)
            .cloned()
            .collect();
        return Err(format!(
            "Could not locate nginx configuration directory.\n\nSearched:\n{}",
            searched(&all)
        ));
    };
    install(dir, &path, &content)
        .await
        .map_err(|e| format!("Failed to create reverse proxy: {e}"))?;

    tracing::info!("Created {} {config_name} at {}", kind.label(), path.display());
    Ok(format!(
        "Reverse proxy '{config_name}' created successfully!\n\nConfiguration file: {}\n\nType: {}\n\nFrontend: {}:{}\nBackend(s): {}\n\nNext steps:\n1. Test configuration\n2. Reload nginx",
        path.display(),
        kind.label(),
        target.server_name,
        target.listen_port,
        target.backends.join(","),
    ))
}
