use std::sync::Arc;

use dioxus::prelude::*;
use morphium_menu::prelude::*;

use crate::dom_scope::DocumentScope;

/// The validated navigation provided at the app root
pub fn use_menu_model() -> Arc<MenuModel> {
    use_context::<Arc<MenuModel>>()
}

/// Mount a disclosure controller for the surface rendered with `surface_id`
///
/// Each call owns an independent controller. Document listeners are bound
/// after the first render, once the signal they report into exists, and are
/// released when the controller is dropped with the component.
pub fn use_disclosure(config: MenuConfig, surface_id: &'static str) -> Signal<DisclosureController> {
    let model = use_menu_model();
    let mut controller = use_signal(move || DisclosureController::from_config(model, &config));

    use_effect(move || {
        let binder = DismissalBinder::new(DocumentScope::new(controller, surface_id));
        controller.write().bind(binder);
    });

    controller
}
