use dioxus::prelude::*;

use crate::components::layout::ContentArea;
use crate::components::navigation::{SideNav, TopNav};
use crate::Route;

#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        div {
            class: "dashboard-container",
            TopNav {}
            div { class: "dashboard-body",
                SideNav {}
                ContentArea {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
