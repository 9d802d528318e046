use dioxus::prelude::*;

#[component]
pub fn ContentArea(children: Element) -> Element {
    rsx! {
        main { class: "content-area",
            div { class: "content-body",
                {children}
            }
        }
    }
}
