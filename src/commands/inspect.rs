//! Inspect command - Show raw table statistics of a backup

use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::path::Path;

use super::utils;
use nova_helper::nova::classify::decode_rows;
use nova_helper::nova::extract::{self, RawTables};
use nova_helper::nova::model::{AppGroupLink, DrawerGroup, Item};
use nova_helper::nova::resolve::decode_folder_component;
use nova_helper::nova::NovaError;

/// Row statistics for a backup
#[derive(Debug, Default)]
pub struct Inspection {
    pub favorites: usize,
    pub drawer_groups: usize,
    pub app_groups: usize,

    /// Favorites per item type
    pub item_types: BTreeMap<String, usize>,

    /// Drawer groups per group type
    pub group_types: BTreeMap<String, usize>,

    /// App group links that place a drawer folder inside a tab
    pub folder_links: usize,

    /// App group links that do not encode a folder
    pub other_links: usize,
}

/// Execute the inspect command and return formatted output
pub fn execute(backup_file: &str) -> Result<String> {
    let path = Path::new(backup_file);
    if !path.exists() {
        bail!("Backup file does not exist: {}", path.display());
    }

    let tables = extract::read_backup(path).map_err(|e| utils::with_hint(e, path))?;
    let inspection = inspect(&tables).map_err(|e| utils::with_hint(e, path))?;

    Ok(format_inspection(&inspection))
}

/// Count rows by type
pub fn inspect(tables: &RawTables) -> Result<Inspection, NovaError> {
    let items: Vec<Item> = decode_rows(&tables.favorites, "favorites")?;
    let groups: Vec<DrawerGroup> = decode_rows(&tables.drawer_groups, "drawer_groups")?;
    let links: Vec<AppGroupLink> = decode_rows(&tables.app_groups, "appgroups")?;

    let mut inspection = Inspection {
        favorites: items.len(),
        drawer_groups: groups.len(),
        app_groups: links.len(),
        ..Default::default()
    };

    for item in &items {
        *inspection
            .item_types
            .entry(item.item_type.to_string())
            .or_default() += 1;
    }
    for group in &groups {
        *inspection
            .group_types
            .entry(group.group_type.to_string())
            .or_default() += 1;
    }

    inspection.folder_links = links
        .iter()
        .filter_map(|l| l.component.as_deref())
        .filter(|c| decode_folder_component(c).is_some())
        .count();
    inspection.other_links = inspection.app_groups - inspection.folder_links;

    Ok(inspection)
}

/// Format inspection for display
pub fn format_inspection(inspection: &Inspection) -> String {
    let mut lines = vec![];

    lines.push(format!("Favorites: {}", inspection.favorites));
    for (item_type, count) in &inspection.item_types {
        lines.push(format!("  {}: {}", item_type, count));
    }

    lines.push(format!("Drawer Groups: {}", inspection.drawer_groups));
    for (group_type, count) in &inspection.group_types {
        lines.push(format!("  {}: {}", group_type, count));
    }

    lines.push(format!("App Group Links: {}", inspection.app_groups));
    lines.push(format!("  folder in tab: {}", inspection.folder_links));
    lines.push(format!("  other: {}", inspection.other_links));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> extract::Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_inspect_counts() {
        let tables = RawTables {
            favorites: vec![
                row(json!({"_id": 1, "title": "A", "itemType": 0, "container": -100})),
                row(json!({"_id": 2, "title": "B", "itemType": 0, "container": -101})),
                row(json!({"_id": 3, "title": "F", "itemType": 2, "container": -100})),
            ],
            drawer_groups: vec![row(
                json!({"_id": 7, "title": "Work", "groupType": "TAB_APP_GROUP"}),
            )],
            app_groups: vec![
                row(json!({"groupId": 7, "component": "com.teslacoilsw.launcher/FOLDER:-205#"})),
                row(json!({"groupId": 7, "component": "com.android.chrome/.Main"})),
                row(json!({"groupId": 7, "component": null})),
            ],
        };

        let inspection = inspect(&tables).unwrap();
        assert_eq!(inspection.favorites, 3);
        assert_eq!(inspection.item_types["app"], 2);
        assert_eq!(inspection.item_types["folder"], 1);
        assert_eq!(inspection.group_types["TAB_APP_GROUP"], 1);
        assert_eq!(inspection.folder_links, 1);
        assert_eq!(inspection.other_links, 2);

        let output = format_inspection(&inspection);
        assert!(output.starts_with("Favorites: 3"));
        assert!(output.contains("  folder in tab: 1"));
    }

    #[test]
    fn test_inspect_default() {
        let inspection = inspect(&RawTables::default()).unwrap();
        assert_eq!(inspection.favorites, 0);
        assert!(inspection.item_types.is_empty());
    }
}
