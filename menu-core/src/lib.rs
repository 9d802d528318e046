//! Morphium Menu - disclosure state for collapsible navigation menus
//!
//! This library holds the interactive core shared by every navigation
//! surface of the Morphium front end:
//! - A validated, immutable menu model (groups and links)
//! - A disclosure controller with accordion and multi-open policies
//! - A dismissal binder that owns the global "outside pointer" and
//!   "Escape key" listeners for exactly as long as a menu is open
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use morphium_menu::prelude::*;
//!
//! let model = Arc::new(MenuModel::morphium().unwrap());
//! let mut menu = DisclosureController::new(model, DisclosureMode::Accordion);
//!
//! menu.toggle_root();
//! let group = GroupId::from_title("Data Management");
//! menu.toggle_group(&group);
//! assert!(menu.is_group_open(&group));
//!
//! // Escape closes the whole menu
//! menu.handle(HostEvent::KeyDown { key: "Escape".into() });
//! assert!(!menu.is_root_open());
//! ```

pub mod binder;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod state;

// Re-export common types
pub mod prelude {
    pub use crate::binder::{DismissalBinder, ListenerScope, NullScope, Trigger};
    pub use crate::config::MenuConfig;
    pub use crate::controller::{DisclosureController, HostEvent};
    pub use crate::error::{MenuError, MenuResult};
    pub use crate::model::{GroupId, MenuGroup, MenuLink, MenuModel};
    pub use crate::state::{ActiveGroups, DisclosureMode, DisclosureState};
}
