//! Autocomplete Component
//!
//! View binding for an [`AutocompleteController`]: text input plus a
//! dropdown of rendered options. The root `div` is the mount point; the
//! controller owns everything beneath it.

use leptos::prelude::*;

use crate::autocomplete::AutocompleteController;
use crate::dom;
use crate::runtime::{BrowserRuntime, Runtime};

/// Tear down the stored controller unless the owner already disposed it
fn teardown_stored<C, R>(controller: StoredValue<AutocompleteController<C, R>, LocalStorage>)
where
    C: Clone + 'static,
    R: Runtime,
{
    if let Some(controller) = controller.try_get_value() {
        controller.teardown();
    }
}

/// Search box with suggestions
///
/// Props:
/// - controller: interaction state for this box (one per box)
/// - label: text shown above the input
#[component]
pub fn Autocomplete<C>(
    controller: AutocompleteController<C, BrowserRuntime>,
    #[prop(into, default = "Search".to_string())] label: String,
) -> impl IntoView
where
    C: Clone + 'static,
{
    let root_ref = NodeRef::<leptos::html::Div>::new();
    // Bumped by the controller on every state change
    let revision = RwSignal::new(0u64);

    controller.set_change_hook(move || revision.update(|r| *r += 1));
    controller.attach_outside_click(&dom::document_clicks(), move |ev: &web_sys::MouseEvent| {
        root_ref
            .get_untracked()
            .map_or(false, |root| dom::event_within(&root, ev))
    });

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || teardown_stored(controller));

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if controller.get_value().handle_key(&ev.key()) {
            ev.prevent_default();
        }
    };

    view! {
        <div class="autocomplete" node_ref=root_ref>
            <label><b>{label}</b></label>
            <input
                type="text"
                class="input"
                autocomplete="off"
                prop:value=move || {
                    revision.track();
                    controller.get_value().input_text()
                }
                on:input=move |ev| controller.get_value().handle_input(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class=move || {
                revision.track();
                if controller.get_value().is_open() { "dropdown is-active" } else { "dropdown" }
            }>
                <div class="dropdown-menu">
                    <div class="dropdown-content results">
                        {move || {
                            revision.track();
                            controller.get_value().options().into_iter().map(|option| {
                                let index = option.index;
                                view! {
                                    <a
                                        class=if option.highlighted { "dropdown-item is-active" } else { "dropdown-item" }
                                        inner_html=option.markup
                                        on:click=move |_| {
                                            controller.get_value().activate_option(index);
                                        }
                                    ></a>
                                }
                            }).collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
