use std::sync::Arc;

use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;
use morphium_menu::prelude::*;

// Module Declarations
mod components;
mod dom_scope;
mod hooks;
mod pages;

use components::layout::DashboardLayout;
use pages::{Home, Section};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        Section { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn load_navigation() -> Result<Arc<MenuModel>, String> {
    match MenuModel::morphium() {
        Ok(model) => {
            tracing::info!("Navigation loaded: {} groups, {} links", model.len(), model.link_count());
            Ok(Arc::new(model))
        }
        Err(err) => {
            tracing::error!("Navigation rejected: {}", err);
            Err(err.to_string())
        }
    }
}

#[component]
fn App() -> Element {
    let navigation = use_hook(load_navigation);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Morphium" }

        {match navigation {
            Ok(model) => rsx! { NavigationRoot { model } },
            Err(message) => rsx! { NavigationError { message } },
        }}
    }
}

#[component]
fn NavigationRoot(model: Arc<MenuModel>) -> Element {
    use_context_provider(|| model.clone());

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn NavigationError(message: String) -> Element {
    rsx! {
        div { class: "navigation-error", role: "alert",
            h2 { "Navigation could not be loaded" }
            pre { "{message}" }
        }
    }
}
