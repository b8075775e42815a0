//! Path helpers for config and database locations.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~/` and resolve a relative result against the config directory.
pub fn resolve_in(base: &std::path::Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}
