use dioxus::prelude::*;
use morphium_menu::prelude::*;

fn group_class(is_open: bool) -> &'static str {
    if is_open {
        "nav-group"
    } else {
        "nav-group collapsed"
    }
}

fn chevron(is_open: bool) -> &'static str {
    if is_open {
        "▾"
    } else {
        "▸"
    }
}

/// One collapsible group: a header toggle plus its links when expanded
///
/// Surfaces whose root is always visible pass `reveal` so the first toggle
/// also marks the root open and binds the dismissal listeners.
#[component]
pub fn NavGroup(
    group: MenuGroup,
    mut menu: Signal<DisclosureController>,
    #[props(default)] reveal: bool,
) -> Element {
    let is_open = menu.read().is_group_open(&group.id);
    let region = group.region_id();
    let chevron = chevron(is_open);
    let id = group.id.clone();

    rsx! {
        div {
            class: group_class(is_open),

            button {
                class: "nav-group-header",
                r#type: "button",
                aria_expanded: "{is_open}",
                aria_controls: "{region}",
                onclick: move |_| {
                    if reveal {
                        menu.write().reveal_group(&id);
                    } else {
                        menu.write().toggle_group(&id);
                    }
                },

                span { class: "nav-group-title",
                    if let Some(icon) = group.icon.clone() {
                        span { class: "nav-icon", "{icon}" }
                    }
                    "{group.title}"
                }
                span { class: "nav-group-toggle", "{chevron}" }
            }

            if is_open {
                div { id: "{region}", class: "nav-group-links",
                    for link in group.links.iter().cloned() {
                        NavLink { key: "{link.destination}", link, menu }
                    }
                }
            }
        }
    }
}

/// Router link that closes the owning menu before navigation proceeds
#[component]
pub fn NavLink(link: MenuLink, mut menu: Signal<DisclosureController>) -> Element {
    let destination = link.destination.clone();

    rsx! {
        Link {
            class: "nav-link",
            to: link.destination.clone(),
            onclick: move |_| menu.write().activate_link(&destination),
            if let Some(icon) = link.icon.clone() {
                span { class: "nav-icon", "{icon}" }
            }
            "{link.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_class() {
        assert_eq!(group_class(true), "nav-group");
        assert_eq!(group_class(false), "nav-group collapsed");
    }

    #[test]
    fn test_chevron() {
        assert_eq!(chevron(true), "▾");
        assert_eq!(chevron(false), "▸");
    }
}
