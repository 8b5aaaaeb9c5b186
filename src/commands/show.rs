//! Show command - Print the folders and apps tables of a backup

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::utils;
use nova_helper::nova::collate::natural_cmp;
use nova_helper::nova::{Lang, Resolution, ResolvedEntry};

/// Column to re-sort both tables by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Affiliation,
}

impl SortColumn {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "affiliation" | "placement" => Some(Self::Affiliation),
            _ => None,
        }
    }
}

/// Which tables to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Only {
    #[default]
    Both,
    Folders,
    Apps,
}

impl Only {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "both" => Some(Self::Both),
            "folders" => Some(Self::Folders),
            "apps" => Some(Self::Apps),
            _ => None,
        }
    }
}

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Re-sort by this column instead of the default order
    pub sort: Option<String>,
    /// Reverse sort order
    pub reverse: bool,
    /// folders, apps or both
    pub only: Option<String>,
    pub lang: Lang,
}

/// Execute the show command and return formatted output
pub fn execute(backup_file: &str, options: ShowOptions) -> Result<String> {
    let resolution = utils::load_resolution(backup_file, options.lang)?;
    format_tables(resolution, &options)
}

/// Render a resolution as terminal tables
pub fn format_tables(mut resolution: Resolution, options: &ShowOptions) -> Result<String> {
    let only = match options.only.as_deref() {
        Some(s) => match Only::from_str(s) {
            Some(only) => only,
            None => bail!("Invalid --only value '{}'. Use folders, apps or both", s),
        },
        None => Only::Both,
    };

    if let Some(ref sort) = options.sort {
        let Some(column) = SortColumn::from_str(sort) else {
            bail!("Invalid sort column '{}'. Use name or affiliation", sort);
        };
        sort_by_column(&mut resolution.folders, column, options.reverse);
        sort_by_column(&mut resolution.apps, column, options.reverse);
    } else if options.reverse {
        resolution.folders.reverse();
        resolution.apps.reverse();
    }

    if resolution.is_empty() {
        return Ok("No apps or folders found in this backup.".to_string());
    }

    let lang = options.lang;
    let mut sections = vec![];

    if only != Only::Apps && !resolution.folders.is_empty() {
        sections.push(format!(
            "{}\n{}",
            lang.folders_title().bold(),
            build_table(lang.folder_columns(), &resolution.folders)
        ));
    }
    if only != Only::Folders && !resolution.apps.is_empty() {
        sections.push(format!(
            "{}\n{}\n{}",
            lang.apps_title().bold(),
            lang.apps_note().dimmed(),
            build_table(lang.app_columns(), &resolution.apps)
        ));
    }

    let mut output = sections.join("\n\n");
    output.push_str(&format!(
        "\n\n{} folders, {} apps",
        resolution.folders.len(),
        resolution.apps.len()
    ));

    Ok(output)
}

/// Stable sort on one column, numeric-aware and case-insensitive
pub fn sort_by_column(entries: &mut [ResolvedEntry], column: SortColumn, reverse: bool) {
    entries.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Name => natural_cmp(&a.name, &b.name),
            SortColumn::Affiliation => natural_cmp(&a.affiliation, &b.affiliation),
        };
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn build_table(columns: [&str; 2], entries: &[ResolvedEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(columns.iter().map(Cell::new).collect::<Vec<_>>());

    for entry in entries {
        table.add_row(vec![Cell::new(&entry.name), Cell::new(&entry.affiliation)]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_helper::nova::classify::classify;
    use nova_helper::nova::model::{Item, ItemType};

    fn item(id: i64, title: &str, item_type: i64, container: i64) -> Item {
        Item {
            id,
            title: Some(title.to_string()),
            item_type: ItemType::from(item_type),
            container,
        }
    }

    fn sample() -> Resolution {
        let items = vec![
            item(1, "Folder 10", 2, -100),
            item(2, "Folder 2", 2, -101),
            item(3, "Camera", 0, 1),
            item(4, "Browser", 0, 2),
        ];
        classify(&items, &[], &[], Lang::En)
    }

    fn names(entries: &[ResolvedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sort_column_parse() {
        assert_eq!(SortColumn::from_str("name"), Some(SortColumn::Name));
        assert_eq!(
            SortColumn::from_str("Affiliation"),
            Some(SortColumn::Affiliation)
        );
        assert_eq!(SortColumn::from_str("size"), None);
    }

    #[test]
    fn test_sort_by_name_is_numeric_aware() {
        let mut resolution = sample();
        sort_by_column(&mut resolution.folders, SortColumn::Name, false);
        assert_eq!(names(&resolution.folders), vec!["Folder 2", "Folder 10"]);

        sort_by_column(&mut resolution.folders, SortColumn::Name, true);
        assert_eq!(names(&resolution.folders), vec!["Folder 10", "Folder 2"]);
    }

    #[test]
    fn test_sort_by_affiliation() {
        let mut resolution = sample();
        sort_by_column(&mut resolution.apps, SortColumn::Affiliation, false);
        // Camera is in "Folder 10", Browser in "Folder 2"
        assert_eq!(names(&resolution.apps), vec!["Browser", "Camera"]);
    }

    #[test]
    fn test_format_tables() {
        let output = format_tables(sample(), &ShowOptions::default()).unwrap();
        assert!(output.contains("Folders"));
        assert!(output.contains("Apps & Shortcuts"));
        assert!(output.contains("Camera"));
        assert!(output.ends_with("2 folders, 2 apps"));
        assert!(output.find("Folder 10").unwrap() < output.find("Browser").unwrap());
    }

    #[test]
    fn test_format_only_apps() {
        let options = ShowOptions {
            only: Some("apps".to_string()),
            ..Default::default()
        };
        let output = format_tables(sample(), &options).unwrap();
        assert!(!output.contains("Folders"));
        assert!(output.contains("Apps & Shortcuts"));
    }

    #[test]
    fn test_format_empty() {
        let output = format_tables(Resolution::default(), &ShowOptions::default()).unwrap();
        assert_eq!(output, "No apps or folders found in this backup.");
    }

    #[test]
    fn test_invalid_options() {
        let options = ShowOptions {
            sort: Some("size".to_string()),
            ..Default::default()
        };
        assert!(format_tables(sample(), &options).is_err());

        let options = ShowOptions {
            only: Some("widgets".to_string()),
            ..Default::default()
        };
        assert!(format_tables(sample(), &options).is_err());
    }
}
