use dioxus::prelude::*;

use crate::components::navigation::{DropDownNav, MobileMenu};
use crate::Route;

#[component]
pub fn TopNav() -> Element {
    rsx! {
        header {
            class: "top-nav",
            role: "banner",

            // Left side
            div { class: "top-nav-left",
                MobileMenu {}
                Link { class: "brand", to: Route::Home {}, "Morphium" }
                DropDownNav {}
            }

            // Right side
            div { class: "top-nav-right",
                button { class: "top-nav-action", r#type: "button", "Help" }
                button { class: "top-nav-action", r#type: "button", "Export" }
                Link {
                    class: "top-nav-action",
                    to: Route::Section { segments: vec!["settings".to_string()] },
                    "⚙️"
                    span { class: "sr-only", "Settings" }
                }
            }
        }
    }
}
