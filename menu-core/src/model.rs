//! Menu model - validated navigation groups and links

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// Navigation document shipped with the front end
const MORPHIUM_MENU: &str = include_str!("../assets/navigation.json");

/// Stable identifier of a menu group, derived from its title
///
/// The id doubles as the render key and the accordion comparison key, so two
/// groups sharing one would share open/closed state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Derive an id from a group title.
    ///
    /// Alphanumerics are lowercased, every other run of characters collapses
    /// into a single `-`, and leading/trailing separators are dropped:
    /// `"Data Access & Import"` becomes `data-access-import`.
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());
        let mut pending_dash = false;
        for ch in title.chars() {
            if ch.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.extend(ch.to_lowercase());
            } else {
                pending_dash = true;
            }
        }
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A single navigation destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    /// Opaque route or URL, passed through to the router unmodified
    #[serde(rename = "href", alias = "destination")]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Deserialize)]
struct GroupRecord {
    title: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    links: Vec<MenuLink>,
}

impl From<GroupRecord> for MenuGroup {
    fn from(record: GroupRecord) -> Self {
        let mut group = MenuGroup::new(record.title, record.links);
        group.icon = record.icon;
        group
    }
}

/// A titled, collapsible group of links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GroupRecord")]
pub struct MenuGroup {
    pub id: GroupId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub links: Vec<MenuLink>,
}

impl MenuGroup {
    /// Create a group, deriving its id from the title
    pub fn new(title: impl Into<String>, links: Vec<MenuLink>) -> Self {
        let title = title.into();
        Self {
            id: GroupId::from_title(&title),
            title,
            icon: None,
            links,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// DOM id of the region holding this group's links
    pub fn region_id(&self) -> String {
        format!("group-{}", self.id)
    }

    fn validate(&self) -> MenuResult<()> {
        if self.id.is_empty() {
            return Err(MenuError::EmptyGroupId(self.title.clone()));
        }
        for link in &self.links {
            if link.label.trim().is_empty() {
                return Err(MenuError::InvalidLink {
                    group: self.title.clone(),
                    reason: format!("link to '{}' has an empty label", link.destination),
                });
            }
            if link.destination.trim().is_empty() {
                return Err(MenuError::InvalidLink {
                    group: self.title.clone(),
                    reason: format!("link '{}' has an empty destination", link.label),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct MenuFile {
    groups: Vec<MenuGroup>,
}

/// Validated, ordered sequence of menu groups
///
/// Order is display order and never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuModel {
    groups: Vec<MenuGroup>,
}

impl MenuModel {
    /// Build a model, rejecting duplicate or underivable group ids and
    /// links without a label or destination
    pub fn new(groups: Vec<MenuGroup>) -> MenuResult<Self> {
        let mut seen = HashSet::with_capacity(groups.len());
        for group in &groups {
            group.validate()?;
            if !seen.insert(&group.id) {
                return Err(MenuError::DuplicateGroupId {
                    id: group.id.to_string(),
                    title: group.title.clone(),
                });
            }
        }
        tracing::debug!("Menu model built with {} groups", groups.len());
        Ok(Self { groups })
    }

    /// Parse and validate a navigation document
    pub fn from_json(json: &str) -> MenuResult<Self> {
        let file: MenuFile = serde_json::from_str(json)?;
        Self::new(file.groups)
    }

    /// Read, parse and validate a navigation file
    pub fn load(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        tracing::info!("Loading navigation from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in Morphium navigation
    pub fn morphium() -> MenuResult<Self> {
        Self::from_json(MORPHIUM_MENU)
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    pub fn group(&self, id: &GroupId) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| &g.id == id)
    }

    pub fn contains(&self, id: &GroupId) -> bool {
        self.group(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of links across all groups
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}
