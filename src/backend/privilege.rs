#[cfg(unix)]
use nix::unistd::geteuid;

/// Whether the process runs with root privileges.
#[cfg(unix)]
pub fn is_admin() -> bool {
    geteuid().is_root()
}

#[cfg(not(unix))]
pub const fn is_admin() -> bool {
    false
}
