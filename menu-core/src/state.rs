//! Disclosure state - which parts of a menu are expanded

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::GroupId;

/// Policy deciding how sibling groups interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureMode {
    /// Opening one group closes its siblings
    #[default]
    Accordion,
    /// Groups expand and collapse independently
    MultiOpen,
}

/// Expanded groups, shaped by the disclosure mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveGroups {
    Accordion(Option<GroupId>),
    MultiOpen(BTreeSet<GroupId>),
}

impl ActiveGroups {
    pub fn empty(mode: DisclosureMode) -> Self {
        match mode {
            DisclosureMode::Accordion => Self::Accordion(None),
            DisclosureMode::MultiOpen => Self::MultiOpen(BTreeSet::new()),
        }
    }

    pub fn contains(&self, id: &GroupId) -> bool {
        match self {
            Self::Accordion(active) => active.as_ref() == Some(id),
            Self::MultiOpen(active) => active.contains(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Accordion(active) => active.is_none(),
            Self::MultiOpen(active) => active.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Accordion(active) => usize::from(active.is_some()),
            Self::MultiOpen(active) => active.len(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &GroupId> + '_> {
        match self {
            Self::Accordion(active) => Box::new(active.iter()),
            Self::MultiOpen(active) => Box::new(active.iter()),
        }
    }

    fn toggle(&mut self, id: &GroupId) {
        match self {
            Self::Accordion(active) => {
                *active = if active.as_ref() == Some(id) {
                    None
                } else {
                    Some(id.clone())
                };
            }
            Self::MultiOpen(active) => {
                if !active.remove(id) {
                    active.insert(id.clone());
                }
            }
        }
    }

    /// Collapse everything. Returns whether anything was open.
    fn clear(&mut self) -> bool {
        let was_open = !self.is_empty();
        match self {
            Self::Accordion(active) => *active = None,
            Self::MultiOpen(active) => active.clear(),
        }
        was_open
    }
}

/// Complete disclosure state of one mounted menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureState {
    /// Whether the outer surface (flyout, sidebar focus) is shown
    pub root_open: bool,
    pub active: ActiveGroups,
}

impl DisclosureState {
    /// Initial state on mount: root hidden, nothing expanded
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            root_open: false,
            active: ActiveGroups::empty(mode),
        }
    }

    pub fn mode(&self) -> DisclosureMode {
        match self.active {
            ActiveGroups::Accordion(_) => DisclosureMode::Accordion,
            ActiveGroups::MultiOpen(_) => DisclosureMode::MultiOpen,
        }
    }

    pub fn is_initial(&self) -> bool {
        !self.root_open && self.active.is_empty()
    }

    /// Flip root visibility, collapsing all groups when it closes
    pub(crate) fn toggle_root(&mut self) {
        self.root_open = !self.root_open;
        if !self.root_open {
            self.active.clear();
        }
    }

    pub(crate) fn open_root(&mut self) -> bool {
        let changed = !self.root_open;
        self.root_open = true;
        changed
    }

    pub(crate) fn toggle_group(&mut self, id: &GroupId) {
        self.active.toggle(id);
    }

    /// Reset to the initial state. Returns whether anything changed.
    pub(crate) fn close_all(&mut self) -> bool {
        let was_root_open = std::mem::replace(&mut self.root_open, false);
        let had_groups = self.active.clear();
        was_root_open || had_groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(title: &str) -> GroupId {
        GroupId::from_title(title)
    }

    #[test]
    fn test_initial_state() {
        let state = DisclosureState::new(DisclosureMode::Accordion);
        assert!(state.is_initial());
        assert_eq!(state.mode(), DisclosureMode::Accordion);
        assert_eq!(state.active, ActiveGroups::Accordion(None));
    }

    #[test]
    fn test_accordion_replaces_open_group() {
        let mut state = DisclosureState::new(DisclosureMode::Accordion);
        state.toggle_group(&id("A"));
        state.toggle_group(&id("B"));
        assert!(!state.active.contains(&id("A")));
        assert!(state.active.contains(&id("B")));
        assert_eq!(state.active.len(), 1);
        assert_eq!(state.active.iter().collect::<Vec<_>>(), [&id("B")]);
    }

    #[test]
    fn test_multi_open_is_independent() {
        let mut state = DisclosureState::new(DisclosureMode::MultiOpen);
        state.toggle_group(&id("A"));
        state.toggle_group(&id("B"));
        assert_eq!(state.active.len(), 2);
        let open: Vec<&str> = state.active.iter().map(GroupId::as_str).collect();
        assert_eq!(open, ["a", "b"]);
        state.toggle_group(&id("A"));
        assert!(!state.active.contains(&id("A")));
        assert!(state.active.contains(&id("B")));
    }

    #[test]
    fn test_root_close_cascades() {
        let mut state = DisclosureState::new(DisclosureMode::MultiOpen);
        state.toggle_root();
        state.toggle_group(&id("A"));
        state.toggle_group(&id("B"));
        state.toggle_root();
        assert!(state.is_initial());
    }

    #[test]
    fn test_close_all_reports_change() {
        let mut state = DisclosureState::new(DisclosureMode::Accordion);
        assert!(!state.close_all());
        state.toggle_group(&id("A"));
        assert!(state.close_all());
        assert!(state.is_initial());
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: DisclosureMode = serde_json::from_str("\"multi_open\"").unwrap();
        assert_eq!(mode, DisclosureMode::MultiOpen);
        assert_eq!(serde_json::to_string(&DisclosureMode::Accordion).unwrap(), "\"accordion\"");
    }
}
