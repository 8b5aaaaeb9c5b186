//! Shared utilities for commands

use anyhow::{bail, Result};
use log::info;
use std::path::Path;

use nova_helper::nova::{self, ErrorKind, Lang, NovaError, Resolution};

/// Run one processing pass over a backup file
pub fn load_resolution(backup_file: &str, lang: Lang) -> Result<Resolution> {
    let path = Path::new(backup_file);

    if !path.exists() {
        bail!("Backup file does not exist: {}", path.display());
    }

    info!("Processing {}", path.display());
    let resolution = nova::process_backup(path, lang).map_err(|e| with_hint(e, path))?;
    info!(
        "Resolved {} folders and {} apps",
        resolution.folders.len(),
        resolution.apps.len()
    );

    Ok(resolution)
}

/// Attach a user-facing summary matching the failure category
pub fn with_hint(err: NovaError, path: &Path) -> anyhow::Error {
    let hint = match err.kind() {
        ErrorKind::DecoderInit => "Failed to load the backup database".to_string(),
        ErrorKind::Format => format!("Not a valid Nova backup: {}", path.display()),
        ErrorKind::Resolution => "An error occurred while processing the backup".to_string(),
    };
    anyhow::Error::new(err).context(hint)
}

/// Current time as unix seconds
pub fn now_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// File name of a backup path, for display in exports
pub fn source_name(backup_file: &str) -> String {
    Path::new(backup_file)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| backup_file.to_string())
}
