use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::components::navigation::NavGroup;
use crate::hooks::use_disclosure;

/// A trigger button with a dismissible flyout listing every menu group
///
/// `surface_id` marks the element that counts as "inside" for outside-click
/// dismissal; it wraps both the trigger and the flyout so clicking the
/// trigger toggles instead of dismissing.
#[component]
pub fn FlyoutMenu(
    surface_id: &'static str,
    config: MenuConfig,
    class: String,
    trigger_class: String,
    trigger: String,
    label: String,
) -> Element {
    let mut menu = use_disclosure(config, surface_id);
    let is_open = menu.read().is_root_open();
    let model = menu.read().model().clone();
    let flyout_id = format!("{surface_id}-flyout");

    rsx! {
        div {
            id: surface_id,
            class: "{class}",

            button {
                class: "{trigger_class}",
                r#type: "button",
                aria_expanded: "{is_open}",
                aria_controls: "{flyout_id}",
                aria_label: "{label}",
                onclick: move |_| menu.write().toggle_root(),
                "{trigger}"
                span { class: "sr-only", "{label}" }
            }

            if is_open {
                div {
                    id: "{flyout_id}",
                    class: "menu-flyout",
                    role: "dialog",
                    aria_modal: "true",
                    aria_label: "{label}",

                    nav {
                        for group in model.groups().iter().cloned() {
                            NavGroup { key: "{group.id}", group, menu }
                        }
                    }
                }
            }
        }
    }
}
