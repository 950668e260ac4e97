use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

/// Call `on_outside` with the element behind `node` whenever a click lands
/// outside of it.
///
/// The document listener is registered when the component mounts and
/// removed when it unmounts. Re-renders only swap the callback.
#[hook]
pub fn use_click_outside(node: NodeRef, on_outside: Callback<Element>) {
    let latest = use_mut_ref(|| on_outside.clone());
    *latest.borrow_mut() = on_outside;

    use_effect_with(node, move |node| {
        let node = node.clone();

        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                tracing::debug!("Registering outside-click listener");

                EventListener::new(&document, "click", move |event| {
                    // Nothing to close until the element is mounted
                    let Some(root) = node.cast::<Element>() else {
                        return;
                    };

                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !root.contains(target.as_ref()) {
                        let on_outside = latest.borrow().clone();
                        on_outside.emit(root);
                    }
                })
            });

        if listener.is_none() {
            tracing::warn!("No document available, outside clicks will not be detected");
        }

        move || {
            if listener.is_some() {
                tracing::debug!("Releasing outside-click listener");
            }
            drop(listener);
        }
    });
}
