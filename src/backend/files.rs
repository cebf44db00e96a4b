//! Reading nginx config files, logs and the sites directory.

use std::{
    io::{self, SeekFrom},
    path::{Path, PathBuf},
};

use tokio::{
    fs,
    io::{AsyncReadExt, AsyncSeekExt},
};

use super::{LogKind, Outcome};
use crate::config::NginxPaths;

/// Entry in a sites directory that is never listed.
const DEFAULT_SITE: &str = "default";

/// Bytes read per step when tailing a log from its end.
const TAIL_BLOCK: u64 = 8 * 1024;

/// Bulleted list of searched locations for "not found" messages.
pub(super) fn searched(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("- {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `name` is a bare file name (no separators, not `.` or `..`).
pub(super) fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

/// The `sites-enabled` sibling of a `sites-available` directory.
pub(super) fn enabled_dir(available: &Path) -> Option<PathBuf> {
    (available.file_name()? == "sites-available")
        .then(|| available.with_file_name("sites-enabled"))
}

/// First path in `paths` whose contents can be read. Invalid UTF-8 is
/// replaced, not rejected.
async fn read_first(paths: &[PathBuf]) -> Option<(&PathBuf, String)> {
    for path in paths {
        match fs::read(path).await {
            Ok(bytes) => return Some((path, String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Cannot read {}: {e}", path.display()),
        }
    }
    None
}

pub async fn view_main_config(paths: &[PathBuf]) -> Outcome {
    match read_first(paths).await {
        Some((path, content)) => Ok(format!(
            "Nginx Configuration ({}):\n\n{content}",
            path.display()
        )),
        None => Err(format!(
            "Could not locate nginx configuration file.\n\nSearched:\n{}",
            searched(paths)
        )),
    }
}

fn last_lines(content: &str, count: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

/// The last `count` lines of the file at `path`.
///
/// Reads backwards from the end in [`TAIL_BLOCK`] steps until enough line
/// breaks are buffered, so only the tail of a large log is held in memory.
async fn read_tail(path: &Path, count: usize) -> io::Result<String> {
    let mut file = fs::File::open(path).await?;
    let mut pos = file.metadata().await?.len();
    let mut tail = Vec::new();
    let mut newlines = 0;

    // One break more than `count`: the first buffered line may be partial.
    while pos > 0 && newlines <= count {
        let step = pos.min(TAIL_BLOCK);
        pos -= step;
        file.seek(SeekFrom::Start(pos)).await?;
        let mut block = Vec::new();
        (&mut file).take(step).read_to_end(&mut block).await?;
        newlines += block.iter().filter(|&&byte| byte == b'\n').count();
        block.extend_from_slice(&tail);
        tail = block;
    }

    Ok(last_lines(&String::from_utf8_lossy(&tail), count))
}

pub async fn tail_log(kind: LogKind, paths: &[PathBuf], count: usize) -> Outcome {
    for path in paths {
        match read_tail(path, count).await {
            Ok(lines) => {
                return Ok(format!(
                    "Last {count} lines of {} log ({}):\n\n{lines}",
                    kind.name(),
                    path.display(),
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Cannot read {}: {e}", path.display()),
        }
    }
    Err(format!(
        "Could not locate nginx {} log file.\n\nSearched:\n{}",
        kind.name(),
        searched(paths)
    ))
}

/// Regular files in `dir`, sorted, skipping the stock `default` site.
async fn site_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != DEFAULT_SITE {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Sites from the first readable directory that has any. `Err` only when no
/// directory could be read.
pub async fn list_sites(dirs: &[PathBuf]) -> Result<Vec<String>, String> {
    let mut readable = false;
    for dir in dirs {
        match site_files(dir).await {
            Ok(names) if !names.is_empty() => {
                tracing::info!("Found {} sites in {}", names.len(), dir.display());
                return Ok(names);
            }
            Ok(_) => readable = true,
            Err(e) => tracing::debug!("Skipping {}: {e}", dir.display()),
        }
    }
    if readable {
        Ok(Vec::new())
    } else {
        Err(format!(
            "Could not locate nginx sites directory.\n\nSearched:\n{}",
            searched(dirs)
        ))
    }
}

fn site_paths(name: &str, dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter().map(|dir| dir.join(name)).collect()
}

pub async fn view_site(name: &str, dirs: &[PathBuf]) -> Outcome {
    if !is_plain_name(name) {
        return Err(format!("Invalid site name: {name}"));
    }
    let paths = site_paths(name, dirs);
    match read_first(&paths).await {
        Some((path, content)) => Ok(format!(
            "Site Configuration: {name}\n\nPath: {}\n\n{content}",
            path.display()
        )),
        None => Err(format!(
            "Could not locate configuration file for site: {name}\n\nSearched:\n{}",
            searched(&paths)
        )),
    }
}

pub async fn delete_site(name: &str, dirs: &[PathBuf]) -> Outcome {
    if !is_plain_name(name) {
        return Err(format!("Invalid site name: {name}"));
    }

    let mut found = None;
    for dir in dirs {
        let path = dir.join(name);
        if fs::try_exists(&path).await.unwrap_or(false) {
            found = Some((dir, path));
            break;
        }
    }
    let Some((dir, path)) = found else {
        return Err(format!(
            "Could not locate configuration file for site: {name}\n\nSearched:\n{}",
            searched(&site_paths(name, dirs))
        ));
    };

    if let Some(link) = enabled_dir(dir).map(|enabled| enabled.join(name)) {
        if fs::symlink_metadata(&link).await.is_ok() {
            fs::remove_file(&link).await.map_err(|e| {
                format!(
                    "Failed to remove {}: {e}\n\nYou may need sudo/administrator privileges",
                    link.display()
                )
            })?;
        }
    }

    fs::remove_file(&path).await.map_err(|e| {
        format!("Failed to delete site configuration: {e}\n\nYou may need sudo/administrator privileges")
    })?;

    tracing::info!("Deleted site {name} at {}", path.display());
    Ok(format!(
        "Site '{name}' deleted successfully!\n\nRemoved: {}\n\nNext steps:\n1. Reload nginx\n2. Remove the site's document root if needed: /var/www/{name}",
        path.display()
    ))
}

/// `proxy_pass` targets in order of first appearance, without duplicates.
pub fn extract_proxy_targets(config: &str) -> Vec<String> {
    let mut targets: Vec<String> = Vec::new();
    for line in config.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word != "proxy_pass" {
                continue;
            }
            if let Some(target) = words.next() {
                let target = target.trim_end_matches(';');
                if !target.is_empty() && !targets.iter().any(|t| t == target) {
                    targets.push(target.to_string());
                }
            }
        }
    }
    targets
}

/// Every config file that may hold `proxy_pass` directives.
async fn proxy_candidates(paths: &NginxPaths) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = paths.main_config.clone();
    for dir in paths.sites_available.iter().chain(&paths.conf_d) {
        let Ok(mut entries) = fs::read_dir(dir).await else {
            continue;
        };
        let mut names = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            names.push(entry.path());
        }
        names.sort();
        files.extend(names);
    }
    files
}

pub async fn list_proxies(paths: &NginxPaths) -> Result<Vec<String>, String> {
    let mut targets: Vec<String> = Vec::new();
    let mut scanned = 0usize;
    for file in proxy_candidates(paths).await {
        let Ok(content) = fs::read_to_string(&file).await else {
            continue;
        };
        scanned += 1;
        for target in extract_proxy_targets(&content) {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
    }
    if scanned == 0 {
        return Err("Could not read any nginx configuration file".to_string());
    }
    tracing::info!("Found {} reverse proxies in {scanned} files", targets.len());
    Ok(targets)
}
