use dioxus::logger::tracing;
use dioxus::prelude::*;
use js_sys::Function;
use morphium_menu::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent, Node, Window};

/// Browser listeners feeding dismissal events into a menu controller
///
/// The pointer listener is registered on `document` in the capture phase so
/// it sees pointer-downs before any handler can stop propagation. The key
/// listener sits on `window`. Both closures live as long as the scope;
/// attach and detach only add or remove the registration, so a listener can
/// detach itself while it is running.
pub struct DocumentScope {
    host: Option<(Window, Document)>,
    on_pointer: Closure<dyn FnMut(Event)>,
    on_key: Closure<dyn FnMut(Event)>,
}

impl DocumentScope {
    pub fn new(controller: Signal<DisclosureController>, surface_id: &'static str) -> Self {
        let host = web_sys::window().and_then(|w| w.document().map(|d| (w, d)));
        if host.is_none() {
            tracing::warn!("No document available; menu '{}' closes only via its own controls", surface_id);
        }

        let on_pointer = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let inside = contains_target(surface_id, &event);
            deliver(controller, HostEvent::PointerDown { inside });
        });

        let on_key = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                deliver(controller, HostEvent::KeyDown { key });
            }
        });

        Self { host, on_pointer, on_key }
    }
}

impl ListenerScope for DocumentScope {
    fn attach(&mut self, trigger: Trigger) {
        let Some((window, document)) = &self.host else { return };
        let result = match trigger {
            Trigger::OutsidePointer => document.add_event_listener_with_callback_and_bool(
                "pointerdown",
                self.on_pointer.as_ref().unchecked_ref::<Function>(),
                true,
            ),
            Trigger::Escape => {
                window.add_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref::<Function>())
            }
        };
        if let Err(err) = result {
            tracing::warn!("Failed to attach {} listener: {:?}", trigger, err);
        }
    }

    fn detach(&mut self, trigger: Trigger) {
        let Some((window, document)) = &self.host else { return };
        let result = match trigger {
            Trigger::OutsidePointer => document.remove_event_listener_with_callback_and_bool(
                "pointerdown",
                self.on_pointer.as_ref().unchecked_ref::<Function>(),
                true,
            ),
            Trigger::Escape => {
                window.remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref::<Function>())
            }
        };
        if let Err(err) = result {
            tracing::warn!("Failed to detach {} listener: {:?}", trigger, err);
        }
    }
}

fn deliver(mut controller: Signal<DisclosureController>, event: HostEvent) {
    // The signal is gone once the owning component unmounted
    match controller.try_write() {
        Ok(mut menu) => {
            menu.handle(event);
        }
        Err(_) => tracing::debug!("Dropped {:?} for an unmounted menu", event),
    }
}

fn contains_target(surface_id: &str, event: &Event) -> bool {
    let surface = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(surface_id));
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    match (surface, target) {
        (Some(surface), Some(target)) => surface.contains(Some(&target)),
        _ => false,
    }
}
