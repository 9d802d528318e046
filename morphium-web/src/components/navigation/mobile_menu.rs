use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::components::navigation::FlyoutMenu;

pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Hamburger menu shown on narrow screens; one group open at a time
#[component]
pub fn MobileMenu() -> Element {
    rsx! {
        FlyoutMenu {
            surface_id: MOBILE_MENU_ID,
            config: MenuConfig::mobile(),
            class: "mobile-menu",
            trigger_class: "hamburger-button",
            trigger: "☰",
            label: "Open main menu",
        }
    }
}
