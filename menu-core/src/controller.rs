//! Disclosure controller - state transitions for one mounted menu

use std::sync::Arc;

use crate::binder::{DismissalBinder, Trigger};
use crate::config::MenuConfig;
use crate::model::{GroupId, MenuModel};
use crate::state::{ActiveGroups, DisclosureMode, DisclosureState};

/// Discrete input delivered by the host surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Pointer-down anywhere in the document
    PointerDown { inside: bool },
    /// Key press, named as the DOM `KeyboardEvent.key`
    KeyDown { key: String },
    /// A menu link was selected; navigation follows externally
    LinkActivated { destination: String },
}

/// Owns the disclosure state of one menu instance
///
/// Every operation is synchronous and total. Group ids missing from the model
/// are ignored, since a surface only renders toggles for groups it was built
/// from.
#[derive(Debug)]
pub struct DisclosureController {
    model: Arc<MenuModel>,
    state: DisclosureState,
    binder: DismissalBinder,
    revision: u64,
}

impl DisclosureController {
    /// Mount a controller with no global event scope
    pub fn new(model: Arc<MenuModel>, mode: DisclosureMode) -> Self {
        Self::with_binder(model, mode, DismissalBinder::detached())
    }

    pub fn with_binder(model: Arc<MenuModel>, mode: DisclosureMode, binder: DismissalBinder) -> Self {
        Self {
            model,
            state: DisclosureState::new(mode),
            binder,
            revision: 0,
        }
    }

    pub fn from_config(model: Arc<MenuModel>, config: &MenuConfig) -> Self {
        Self::new(model, config.mode)
    }

    /// Swap in a binder for the host's event scope
    ///
    /// The previous binder is dropped, which releases anything it held.
    pub fn bind(&mut self, binder: DismissalBinder) {
        self.binder = binder;
        self.binder.sync(self.state.root_open);
    }

    // ========================
    // Reads
    // ========================

    pub fn is_root_open(&self) -> bool {
        self.state.root_open
    }

    pub fn is_group_open(&self, id: &GroupId) -> bool {
        self.state.active.contains(id)
    }

    pub fn open_groups(&self) -> &ActiveGroups {
        &self.state.active
    }

    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    pub fn mode(&self) -> DisclosureMode {
        self.state.mode()
    }

    pub fn model(&self) -> &Arc<MenuModel> {
        &self.model
    }

    /// Number of state changes since mount
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the dismissal listeners are registered
    pub fn is_listening(&self) -> bool {
        self.binder.is_bound()
    }

    // ========================
    // Transitions
    // ========================

    /// Show or hide the menu surface. Hiding collapses every group.
    pub fn toggle_root(&mut self) {
        self.state.toggle_root();
        self.commit("toggle_root");
    }

    /// Expand or collapse a group according to the disclosure mode
    ///
    /// Groups of a hidden menu stay collapsed; surfaces whose root region is
    /// always rendered go through `reveal_group` instead.
    pub fn toggle_group(&mut self, id: &GroupId) {
        if !self.model.contains(id) {
            tracing::trace!("Ignoring toggle for unknown group '{}'", id);
            return;
        }
        if !self.state.root_open {
            tracing::trace!("Ignoring toggle for '{}' while the menu is hidden", id);
            return;
        }
        self.state.toggle_group(id);
        self.commit("toggle_group");
    }

    /// Toggle a group on a surface whose root region is always rendered,
    /// revealing the root first so dismissal listeners get bound
    pub fn reveal_group(&mut self, id: &GroupId) {
        if !self.model.contains(id) {
            tracing::trace!("Ignoring reveal for unknown group '{}'", id);
            return;
        }
        self.state.open_root();
        self.state.toggle_group(id);
        self.commit("reveal_group");
    }

    /// Hide the surface and collapse every group
    pub fn close_all(&mut self) {
        if self.state.close_all() {
            self.commit("close_all");
        }
    }

    /// Close the menu ahead of navigating to `destination`
    pub fn activate_link(&mut self, destination: &str) {
        tracing::debug!("Link activated: {}", destination);
        self.close_all();
    }

    /// Handle a global dismissal trigger
    ///
    /// Triggers that arrive after the listeners were released are stale and
    /// leave the state untouched.
    pub fn dismiss(&mut self, trigger: Trigger) {
        if !self.binder.is_bound() {
            tracing::trace!("Stale {} dismissal ignored", trigger);
            return;
        }
        tracing::debug!("Menu dismissed by {}", trigger);
        self.close_all();
    }

    /// Route a host event. Returns whether the state changed.
    pub fn handle(&mut self, event: HostEvent) -> bool {
        let before = self.revision;
        match event {
            HostEvent::PointerDown { inside: false } => self.dismiss(Trigger::OutsidePointer),
            HostEvent::PointerDown { inside: true } => {}
            HostEvent::KeyDown { key } if key == "Escape" => self.dismiss(Trigger::Escape),
            HostEvent::KeyDown { .. } => {}
            HostEvent::LinkActivated { destination } => self.activate_link(&destination),
        }
        self.revision != before
    }

    /// Reset to the initial state and drop the dismissal listeners
    pub fn unmount(&mut self) {
        self.close_all();
        self.binder.release();
    }

    fn commit(&mut self, op: &str) {
        self.revision += 1;
        self.binder.sync(self.state.root_open);
        tracing::debug!(
            "{} -> root_open={}, open_groups={} (rev {})",
            op,
            self.state.root_open,
            self.state.active.len(),
            self.revision
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuGroup, MenuLink};

    fn model(titles: &[&str]) -> Arc<MenuModel> {
        let groups = titles
            .iter()
            .map(|t| MenuGroup::new(*t, vec![MenuLink::new(format!("{t} home"), format!("/{t}"))]))
            .collect();
        Arc::new(MenuModel::new(groups).unwrap())
    }

    fn id(title: &str) -> GroupId {
        GroupId::from_title(title)
    }

    #[test]
    fn test_accordion_walkthrough() {
        let mut menu = DisclosureController::new(model(&["A", "B"]), DisclosureMode::Accordion);
        assert!(!menu.is_root_open());

        menu.toggle_root();
        assert!(menu.is_root_open());
        assert!(!menu.is_group_open(&id("A")) && !menu.is_group_open(&id("B")));

        menu.toggle_group(&id("A"));
        assert!(menu.is_group_open(&id("A")));

        menu.toggle_group(&id("B"));
        assert!(menu.is_group_open(&id("B")));
        assert!(!menu.is_group_open(&id("A")));

        menu.toggle_group(&id("B"));
        assert!(menu.open_groups().is_empty());

        assert!(menu.handle(HostEvent::KeyDown { key: "Escape".into() }));
        assert!(!menu.is_root_open());
    }

    #[test]
    fn test_unknown_group_is_noop() {
        let mut menu = DisclosureController::new(model(&["A"]), DisclosureMode::Accordion);
        menu.toggle_root();
        let rev = menu.revision();

        menu.toggle_group(&id("missing"));
        menu.reveal_group(&id("missing"));
        assert_eq!(menu.revision(), rev);
        assert!(menu.open_groups().is_empty());
    }

    #[test]
    fn test_hidden_menu_keeps_groups_collapsed() {
        let mut menu = DisclosureController::new(model(&["A", "B"]), DisclosureMode::Accordion);
        menu.toggle_group(&id("A"));
        assert!(!menu.is_group_open(&id("A")));
        assert_eq!(menu.revision(), 0);

        menu.handle(HostEvent::KeyDown { key: "Escape".into() });
        menu.toggle_root();
        assert!(menu.is_root_open());
        assert!(menu.open_groups().is_empty());
    }

    #[test]
    fn test_reveal_group_opens_root() {
        let mut menu = DisclosureController::new(model(&["A", "B"]), DisclosureMode::Accordion);
        menu.reveal_group(&id("A"));
        assert!(menu.is_root_open());
        assert!(menu.is_listening());
        assert!(menu.is_group_open(&id("A")));

        menu.reveal_group(&id("A"));
        assert!(menu.is_root_open());
        assert!(menu.open_groups().is_empty());
    }

    #[test]
    fn test_close_all_without_change_keeps_revision() {
        let mut menu = DisclosureController::new(model(&["A"]), DisclosureMode::MultiOpen);
        menu.close_all();
        assert_eq!(menu.revision(), 0);
    }

    #[test]
    fn test_link_activation_closes_everything() {
        let mut menu = DisclosureController::new(model(&["A", "B"]), DisclosureMode::MultiOpen);
        menu.toggle_root();
        menu.toggle_group(&id("A"));
        menu.toggle_group(&id("B"));

        assert!(menu.handle(HostEvent::LinkActivated { destination: "/A".into() }));
        assert!(menu.state().is_initial());
        assert!(!menu.is_listening());
    }

    #[test]
    fn test_ignored_events() {
        let mut menu = DisclosureController::new(model(&["A"]), DisclosureMode::Accordion);
        menu.toggle_root();

        assert!(!menu.handle(HostEvent::PointerDown { inside: true }));
        assert!(!menu.handle(HostEvent::KeyDown { key: "Enter".into() }));
        assert!(menu.is_root_open());

        assert!(menu.handle(HostEvent::PointerDown { inside: false }));
        assert!(!menu.is_root_open());
    }

    #[test]
    fn test_unmount_resets_state() {
        let mut menu = DisclosureController::new(model(&["A"]), DisclosureMode::Accordion);
        menu.toggle_root();
        menu.toggle_group(&id("A"));
        menu.unmount();
        assert!(menu.state().is_initial());
        assert!(!menu.is_listening());
    }

    #[test]
    fn test_from_config_uses_mode() {
        let config = MenuConfig { mode: DisclosureMode::MultiOpen };
        let menu = DisclosureController::from_config(model(&["A"]), &config);
        assert_eq!(menu.mode(), DisclosureMode::MultiOpen);
    }
}
