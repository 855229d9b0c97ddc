//! DOM Glue
//!
//! The page-wide click registry and containment checks.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::listeners::ListenerRegistry;

thread_local! {
    static DOCUMENT_CLICKS: RefCell<Option<ListenerRegistry<web_sys::MouseEvent>>> = const { RefCell::new(None) };
}

/// Registry fed by a single document `click` listener, installed on first use
pub fn document_clicks() -> ListenerRegistry<web_sys::MouseEvent> {
    DOCUMENT_CLICKS.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(bind_document_click)
            .clone()
    })
}

fn bind_document_click() -> ListenerRegistry<web_sys::MouseEvent> {
    let registry = ListenerRegistry::new();
    let dispatch = registry.clone();

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        dispatch.dispatch(&ev);
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    // Lives for the page session
    on_click.forget();

    registry
}

/// Whether the event target lies within `root`
pub fn event_within(root: &web_sys::Element, ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map_or(false, |node| root.contains(Some(&node)))
}
