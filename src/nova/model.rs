//! Typed rows of the Nova launcher database
//!
//! The database encodes placement through overlapping integer ranges on
//! `favorites.container`:
//! - `-100` desktop, `-101` dock
//! - non-negative values reference a folder item by `_id`
//! - `-200 - groupId` references a drawer group
//!
//! [`ContainerRef`] parses that encoding once so the rest of the crate never
//! touches raw sentinels.

use serde::{Deserialize, Serialize};

pub const DESKTOP_CONTAINER: i64 = -100;
pub const DOCK_CONTAINER: i64 = -101;
/// Drawer groups appear as containers at `DRAWER_GROUP_BASE - group_id`
pub const DRAWER_GROUP_BASE: i64 = -200;

/// `favorites.itemType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "i64")]
pub enum ItemType {
    App,
    Shortcut,
    Folder,
    /// Type 6, deep shortcuts and other placeable launcher items
    OtherPlaceable,
    Other(i64),
}

impl From<i64> for ItemType {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::App,
            1 => Self::Shortcut,
            2 => Self::Folder,
            6 => Self::OtherPlaceable,
            other => Self::Other(other),
        }
    }
}

impl ItemType {
    /// Items listed in the apps table
    pub fn is_launchable(self) -> bool {
        matches!(self, Self::App | Self::Shortcut | Self::OtherPlaceable)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Shortcut => write!(f, "shortcut"),
            Self::Folder => write!(f, "folder"),
            Self::OtherPlaceable => write!(f, "placeable"),
            Self::Other(n) => write!(f, "type {}", n),
        }
    }
}

/// `drawer_groups.groupType`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Option<String>")]
pub enum GroupType {
    TabAppGroup,
    FolderAppGroup,
    Other(String),
}

impl From<Option<String>> for GroupType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("TAB_APP_GROUP") => Self::TabAppGroup,
            Some("FOLDER_APP_GROUP") => Self::FolderAppGroup,
            _ => Self::Other(value.unwrap_or_default()),
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TabAppGroup => write!(f, "TAB_APP_GROUP"),
            Self::FolderAppGroup => write!(f, "FOLDER_APP_GROUP"),
            Self::Other(s) if s.is_empty() => write!(f, "(none)"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A row of `favorites`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: Option<String>,
    #[serde(rename = "itemType")]
    pub item_type: ItemType,
    pub container: i64,
}

impl Item {
    /// Title, treating an empty string like a missing one
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// A row of `drawer_groups` (a drawer tab or a drawer folder)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrawerGroup {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    #[serde(rename = "groupType")]
    pub group_type: GroupType,
}

impl DrawerGroup {
    /// Container id under which items of this group are stored; `None` when
    /// the id is too large to encode
    pub fn container_id(&self) -> Option<i64> {
        DRAWER_GROUP_BASE.checked_sub(self.id)
    }
}

/// A row of `appgroups`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppGroupLink {
    #[serde(rename = "groupId")]
    pub group_id: i64,
    pub component: Option<String>,
}

/// Parsed form of a `favorites.container` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ContainerRef {
    Desktop,
    Dock,
    /// A folder item, by its `_id`
    Folder(i64),
    /// A drawer group, by its `_id`
    DrawerGroup(i64),
    /// A value outside every known range
    Unknown(i64),
}

impl ContainerRef {
    pub fn parse(raw: i64) -> Self {
        match raw {
            DESKTOP_CONTAINER => Self::Desktop,
            DOCK_CONTAINER => Self::Dock,
            id if id >= 0 => Self::Folder(id),
            id if id <= DRAWER_GROUP_BASE => Self::DrawerGroup(DRAWER_GROUP_BASE - id),
            other => Self::Unknown(other),
        }
    }

    /// The encoded container value, if it fits in an `i64`
    pub fn raw(self) -> Option<i64> {
        match self {
            Self::Desktop => Some(DESKTOP_CONTAINER),
            Self::Dock => Some(DOCK_CONTAINER),
            Self::Folder(id) => Some(id),
            Self::DrawerGroup(id) => DRAWER_GROUP_BASE.checked_sub(id),
            Self::Unknown(raw) => Some(raw),
        }
    }
}

impl From<i64> for ContainerRef {
    fn from(raw: i64) -> Self {
        Self::parse(raw)
    }
}
