//! Button for an action that must be confirmed before it is sent.

use leptos::prelude::*;

use crate::state::admin::Event;
use crate::state::confirm::ActionId;
use crate::util::dispatch::Dispatcher;

/// Disabled while its request is in flight.
#[component]
pub fn ConfirmButton(
    id: ActionId,
    #[prop(into)] label: String,
    #[prop(into, default = "btn btn-sm btn-outline-danger".to_owned())] class: String,
) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let (name, endpoint) = state.with_untracked(|s| {
        s.action(&id)
            .map(|a| (a.name.clone(), a.endpoint.clone().unwrap_or_default()))
            .unwrap_or_default()
    });
    let key = id.clone();
    let pending = Memo::new(move |_| state.with(|s| s.action(&key).is_some_and(|a| a.is_pending)));

    let requested = id.clone();
    view! {
        <button
            id=id.to_string()
            class=format!("{class} confirm-action-btn")
            data-action=name
            data-endpoint=endpoint
            disabled=move || pending.get()
            on:click=move |ev| {
                ev.prevent_default();
                dispatcher.dispatch(Event::ActionRequested(requested.clone()));
            }
        >
            {label}
        </button>
    }
}
