//! Export command - Write the layout tables as HTML, CSV or JSON

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;

use super::utils;
use nova_helper::config;
use nova_helper::nova::export::{self, ExportFormat};
use nova_helper::nova::Lang;

/// Where export output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

/// `-` means stdout; no value means the default file in the export directory
pub fn resolve_target(output: Option<&str>, format: ExportFormat) -> Result<Target> {
    match output {
        Some("-") => Ok(Target::Stdout),
        Some(path) => Ok(Target::File(PathBuf::from(path))),
        None => {
            let dir = config::export_dir().context("Failed to determine export directory")?;
            Ok(Target::File(dir.join(format.default_file_name())))
        }
    }
}

/// Execute the export command
pub fn execute(
    backup_file: &str,
    format: ExportFormat,
    output: Option<&str>,
    lang: Lang,
) -> Result<()> {
    let resolution = utils::load_resolution(backup_file, lang)?;

    if resolution.is_empty() {
        eprintln!(
            "{} No apps or folders found, nothing to export",
            "Warning:".yellow()
        );
        return Ok(());
    }

    let content = export::render(
        format,
        &resolution,
        lang,
        &utils::source_name(backup_file),
        utils::now_timestamp(),
    )
    .context("Failed to render export")?;

    match resolve_target(output, format)? {
        Target::Stdout => print!("{}", content),
        Target::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!(
                "{} {} ({} folders, {} apps)",
                "Exported to:".green(),
                path.display(),
                resolution.folders.len(),
                resolution.apps.len()
            );
        }
    }

    Ok(())
}
