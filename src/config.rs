//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that overrides the export directory
pub const EXPORT_DIR_ENV: &str = "NOVA_HELPER_EXPORT_DIR";

/// Directory exports are written to when no output path is given
/// - `$NOVA_HELPER_EXPORT_DIR` if set
/// - otherwise the user's download directory (~/Downloads)
/// - otherwise the current directory
pub fn export_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(EXPORT_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Could not determine current directory"),
    }
}
