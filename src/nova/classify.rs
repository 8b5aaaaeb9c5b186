//! Splitting resolved items into the folders and apps tables

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;

use super::collate::collate;
use super::error::{NovaError, Result};
use super::extract::{RawTables, Row};
use super::labels::Lang;
use super::model::{AppGroupLink, DrawerGroup, Item, ItemType};
use super::resolve::{Placement, Resolver};

/// One row of an output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub affiliation: String,
    pub placement: Placement,
}

/// Which table an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    App,
}

impl EntryKind {
    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Self::Folder => lang.kind_folder(),
            Self::App => lang.kind_app(),
        }
    }
}

/// Result of one processing pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolution {
    pub folders: Vec<ResolvedEntry>,
    pub apps: Vec<ResolvedEntry>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.apps.is_empty()
    }

    /// Folders followed by apps, tagged with their kind
    pub fn combined(&self) -> impl Iterator<Item = (EntryKind, &ResolvedEntry)> {
        self.folders
            .iter()
            .map(|e| (EntryKind::Folder, e))
            .chain(self.apps.iter().map(|e| (EntryKind::App, e)))
    }
}

/// Type the raw rows and classify them
pub fn resolve(tables: &RawTables, lang: Lang) -> Result<Resolution> {
    let items: Vec<Item> = decode_rows(&tables.favorites, "favorites")?;
    let groups: Vec<DrawerGroup> = decode_rows(&tables.drawer_groups, "drawer_groups")?;
    let links: Vec<AppGroupLink> = decode_rows(&tables.app_groups, "appgroups")?;

    Ok(classify(&items, &groups, &links, lang))
}

/// Deserialize raw rows of `table` into typed rows
pub fn decode_rows<T: DeserializeOwned>(rows: &[Row], table: &'static str) -> Result<Vec<T>> {
    rows.iter()
        .map(|row| {
            serde_json::from_value(serde_json::Value::Object(row.clone()))
                .map_err(|source| NovaError::Resolution { table, source })
        })
        .collect()
}

/// Build both tables from typed rows, already sorted
pub fn classify(
    items: &[Item],
    groups: &[DrawerGroup],
    links: &[AppGroupLink],
    lang: Lang,
) -> Resolution {
    let resolver = Resolver::new(items, groups, links, lang);
    let mut resolution = Resolution::default();

    for item in items {
        if item.item_type.is_launchable() {
            if let Some(title) = item.display_title() {
                resolution.apps.push(entry(&resolver, title.to_string(), item.container));
            }
        } else if item.item_type == ItemType::Folder {
            let name = resolver.folder_name(item.id);
            resolution.folders.push(entry(&resolver, name, item.container));
        }
    }

    for group in groups {
        if let Some(placement) = resolver.drawer_group_placement(group) {
            resolution.folders.push(ResolvedEntry {
                name: group.title.clone(),
                affiliation: placement.label(lang),
                placement,
            });
        }
    }

    sort_apps(&mut resolution.apps);
    sort_folders(&mut resolution.folders);

    resolution
}

fn entry(resolver: &Resolver, name: String, container: i64) -> ResolvedEntry {
    let placement = resolver.placement(container);
    ResolvedEntry {
        name,
        affiliation: placement.label(resolver.lang()),
        placement,
    }
}

pub fn sort_apps(apps: &mut [ResolvedEntry]) {
    apps.sort_by(|a, b| collate(&a.name, &b.name));
}

/// Bucket, then affiliation, then name
pub fn compare_folders(a: &ResolvedEntry, b: &ResolvedEntry) -> Ordering {
    a.placement
        .bucket()
        .cmp(&b.placement.bucket())
        .then_with(|| collate(&a.affiliation, &b.affiliation))
        .then_with(|| collate(&a.name, &b.name))
}

pub fn sort_folders(folders: &mut [ResolvedEntry]) {
    folders.sort_by(compare_folders);
}
