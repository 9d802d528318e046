use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::components::navigation::FlyoutMenu;

pub const DATA_SOURCE_MENU_ID: &str = "data-source-menu";

/// "Data source" dropdown in the top bar; groups expand independently
#[component]
pub fn DropDownNav() -> Element {
    rsx! {
        FlyoutMenu {
            surface_id: DATA_SOURCE_MENU_ID,
            config: MenuConfig::dropdown(),
            class: "data-source-menu",
            trigger_class: "data-source-button",
            trigger: "Data source",
            label: "Browse data sources",
        }
    }
}
