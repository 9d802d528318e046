use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::components::navigation::NavGroup;
use crate::hooks::use_disclosure;

pub const SIDE_NAV_ID: &str = "side-nav";

/// Desktop sidebar with accordion groups
///
/// The aside is always rendered. Escape or a click outside collapses the
/// open group.
#[component]
pub fn SideNav() -> Element {
    let menu = use_disclosure(MenuConfig::sidebar(), SIDE_NAV_ID);
    let model = menu.read().model().clone();

    rsx! {
        aside {
            id: SIDE_NAV_ID,
            class: "side-nav",
            aria_label: "Sidebar navigation",

            nav {
                for group in model.groups().iter().cloned() {
                    NavGroup { key: "{group.id}", group, menu, reveal: true }
                }
            }
        }
    }
}
