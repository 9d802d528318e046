use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::hooks::use_menu_model;

#[component]
pub fn Home() -> Element {
    let model = use_menu_model();

    rsx! {
        header { class: "content-header",
            h2 { "Morphium" }
            p { class: "content-subtitle", "Next Generation ML modeling app" }
        }
        div { class: "group-overview",
            for group in model.groups().iter().cloned() {
                section { key: "{group.id}", class: "group-card",
                    h3 {
                        if let Some(icon) = group.icon.clone() {
                            span { class: "nav-icon", "{icon}" }
                        }
                        "{group.title}"
                    }
                    p { "{group.links.len()} tools" }
                }
            }
        }
    }
}

/// Placeholder page for any menu destination
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let model = use_menu_model();
    let path = format!("/{}", segments.join("/"));
    let title = find_label(&model, &path).unwrap_or_else(|| path.clone());

    rsx! {
        header { class: "content-header",
            h2 { "{title}" }
            p { class: "content-subtitle", "{path}" }
        }
    }
}

fn find_label(model: &MenuModel, path: &str) -> Option<String> {
    model
        .groups()
        .iter()
        .flat_map(|g| g.links.iter())
        .find(|link| link.destination == path)
        .map(|link| link.label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_label() {
        let model = MenuModel::morphium().unwrap();
        assert_eq!(find_label(&model, "/schema").as_deref(), Some("Schema Editor"));
        assert_eq!(find_label(&model, "/settings"), None);
    }
}
