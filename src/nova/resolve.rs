//! Affiliation resolution
//!
//! Builds the lookups needed to describe where an item lives:
//! - drawer group id → title
//! - drawer folder id → id of the tab that contains it (from `appgroups`)
//! - container id → folder name, for drawer groups and folder items
//!
//! Folder items are inserted after drawer groups, so a folder item wins if a
//! key is ever produced by both.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

use super::labels::Lang;
use super::model::{AppGroupLink, ContainerRef, DrawerGroup, GroupType, Item, ItemType};

/// Offset between the container number embedded in a component string and
/// the drawer folder id
pub const FOLDER_COMPONENT_OFFSET: i64 = 200;

lazy_static! {
    // e.g. "com.teslacoilsw.launcher/FOLDER:-205#0"
    static ref FOLDER_COMPONENT: Regex = Regex::new(r"[\w.]+/FOLDER:-(\d+)#").unwrap();
}

/// Decode the drawer folder id referenced by an `appgroups.component` value
pub fn decode_folder_component(component: &str) -> Option<i64> {
    let captures = FOLDER_COMPONENT.captures(component)?;
    let container: i64 = captures[1].parse().ok()?;
    Some(container - FOLDER_COMPONENT_OFFSET)
}

/// Where an item is placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Desktop,
    Dock,
    /// A drawer tab itself
    DrawerTab,
    /// A drawer folder that sits inside a tab
    DrawerTabChild {
        parent_id: i64,
        parent: Option<String>,
    },
    /// A drawer folder outside any tab
    Drawer,
    /// Inside a desktop/dock folder or a drawer group
    Folder { container: ContainerRef, name: String },
    Unknown { id: i64 },
}

impl Placement {
    pub fn label(&self, lang: Lang) -> String {
        match self {
            Self::Desktop => lang.desktop().to_string(),
            Self::Dock => lang.dock().to_string(),
            Self::DrawerTab => lang.drawer_tab().to_string(),
            Self::DrawerTabChild { parent_id, parent } => match parent {
                Some(title) => lang.drawer_tab_child(title),
                None => lang.drawer_tab_child(&lang.unknown(*parent_id)),
            },
            Self::Drawer => lang.drawer().to_string(),
            Self::Folder { name, .. } => name.clone(),
            Self::Unknown { id } => lang.unknown(*id),
        }
    }

    /// Structural rank used as the primary key when ordering folders
    pub fn bucket(&self) -> u8 {
        match self {
            Self::Desktop => 0,
            Self::Dock => 1,
            Self::DrawerTab => 2,
            Self::DrawerTabChild { .. } => 3,
            Self::Drawer => 4,
            Self::Folder { .. } | Self::Unknown { .. } => 5,
        }
    }
}

/// Lookups built once per backup
#[derive(Debug, Clone)]
pub struct Resolver {
    lang: Lang,
    group_titles: HashMap<i64, String>,
    folder_parent_tabs: HashMap<i64, i64>,
    folder_names: HashMap<i64, String>,
}

impl Resolver {
    pub fn new(
        items: &[Item],
        groups: &[DrawerGroup],
        links: &[AppGroupLink],
        lang: Lang,
    ) -> Self {
        let group_titles: HashMap<i64, String> = groups
            .iter()
            .map(|g| (g.id, g.title.clone()))
            .collect();

        let mut folder_parent_tabs = HashMap::new();
        for link in links {
            let component = link.component.as_deref().unwrap_or_default();
            match decode_folder_component(component) {
                Some(folder_id) => {
                    folder_parent_tabs.insert(folder_id, link.group_id);
                }
                None => debug!(
                    "Ignoring app group link {} -> {:?}",
                    link.group_id, link.component
                ),
            }
        }

        let mut folder_names = HashMap::new();
        for group in groups {
            match group.container_id() {
                Some(container) => {
                    folder_names.insert(container, group.title.clone());
                }
                None => debug!("Drawer group id {} has no container encoding", group.id),
            }
        }
        for item in items.iter().filter(|i| i.item_type == ItemType::Folder) {
            let name = item
                .display_title()
                .map(str::to_string)
                .unwrap_or_else(|| lang.unnamed_folder(item.id));
            folder_names.insert(item.id, name);
        }

        Self {
            lang,
            group_titles,
            folder_parent_tabs,
            folder_names,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Placement of anything stored under `container`
    pub fn placement(&self, container: i64) -> Placement {
        match ContainerRef::parse(container) {
            ContainerRef::Desktop => Placement::Desktop,
            ContainerRef::Dock => Placement::Dock,
            other => match other.raw().and_then(|raw| self.folder_names.get(&raw)) {
                Some(name) => Placement::Folder {
                    container: other,
                    name: name.clone(),
                },
                None => Placement::Unknown { id: container },
            },
        }
    }

    /// Display string of the placement of `container`
    pub fn affiliation(&self, container: i64) -> String {
        self.placement(container).label(self.lang)
    }

    /// Display name of a folder item
    pub fn folder_name(&self, id: i64) -> String {
        self.folder_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| self.lang.unnamed_folder(id))
    }

    /// Tab that contains the drawer folder `group_id`, if any
    pub fn parent_tab(&self, group_id: i64) -> Option<i64> {
        self.folder_parent_tabs.get(&group_id).copied()
    }

    pub fn group_title(&self, group_id: i64) -> Option<&str> {
        self.group_titles.get(&group_id).map(String::as_str)
    }

    /// Placement of a drawer group in the drawer; `None` for group types
    /// that are not listed
    pub fn drawer_group_placement(&self, group: &DrawerGroup) -> Option<Placement> {
        match group.group_type {
            GroupType::TabAppGroup => Some(Placement::DrawerTab),
            GroupType::FolderAppGroup => Some(match self.parent_tab(group.id) {
                Some(parent_id) => Placement::DrawerTabChild {
                    parent_id,
                    parent: self.group_title(parent_id).map(str::to_string),
                },
                None => Placement::Drawer,
            }),
            GroupType::Other(_) => None,
        }
    }

    /// Number of app group links that encode a drawer folder
    pub fn linked_folder_count(&self) -> usize {
        self.folder_parent_tabs.len()
    }
}
