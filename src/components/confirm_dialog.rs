//! Modal asking the operator to confirm one pending action.
//!
//! Clicks on the backdrop cancel; clicks inside the panel do not reach it.
//! The panel takes focus when a prompt appears so Escape reaches its
//! keydown handler.

use leptos::prelude::*;

use crate::state::admin::Event;
use crate::state::confirm::is_cancel_key;
use crate::util::dispatch::Dispatcher;

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let prompt = Memo::new(move |_| state.with(|s| s.dialog().and_then(|d| d.prompt().cloned())));

    let panel_ref = NodeRef::<leptos::html::Div>::new();

    // reruns once Show mounts the panel and the ref is filled
    Effect::new(move || {
        if !prompt.with(Option::is_some) {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(panel) = panel_ref.get()
            && let Err(e) = panel.focus()
        {
            log::warn!("confirm dialog focus failed: {e:?}");
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_cancel_key(&ev.key()) {
            ev.prevent_default();
            dispatcher.dispatch(Event::ConfirmCancel);
        }
    };

    view! {
        <Show when=move || prompt.with(Option::is_some)>
            <div
                class="confirm-modal-backdrop"
                aria-hidden="false"
                on:click=move |_| dispatcher.dispatch(Event::ConfirmBackdrop)
            >
                <div
                    class="confirm-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=panel_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h5 class="confirm-title">{move || prompt.with(|p| p.as_ref().map(|p| p.title.clone()))}</h5>
                    <p class="confirm-message">{move || prompt.with(|p| p.as_ref().map(|p| p.message.clone()))}</p>
                    <div class="confirm-actions">
                        <button
                            class="btn btn-sm btn-secondary confirm-cancel"
                            on:click=move |_| dispatcher.dispatch(Event::ConfirmCancel)
                        >
                            "Cancel"
                        </button>
                        <button
                            class=move || prompt.with(|p| p.as_ref().map_or("btn btn-sm btn-danger", |p| p.tone.button_class()))
                            on:click=move |_| dispatcher.dispatch(Event::ConfirmOk)
                        >
                            {move || prompt.with(|p| p.as_ref().map(|p| p.ok_text.clone()))}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
