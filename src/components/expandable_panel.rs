//! Collapsible container whose body animates `max-height`.

use leptos::prelude::*;

use crate::state::admin::Event;
use crate::state::panel::{Overflow, Panel, PanelId};
use crate::util::dispatch::Dispatcher;

/// Header toggle plus a height-capped body. The body keeps its DOM id so
/// the controller can measure it while closed.
#[component]
pub fn ExpandablePanel(id: PanelId, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let key = id.clone();
    let snapshot = Memo::new(move |_| state.with(|s| s.panel(&key).cloned()));
    let is_open = move || snapshot.with(|p| p.as_ref().is_some_and(Panel::is_open));
    let is_visible = move || snapshot.with(|p| p.as_ref().is_some_and(Panel::is_visible));
    let max_height = move || snapshot.with(|p| format!("{}px", p.as_ref().map_or(0.0, |p| p.max_height)));
    let overflow = move || snapshot.with(|p| p.as_ref().map_or(Overflow::Clip, |p| p.overflow).css());

    let toggle = {
        let id = id.clone();
        move || dispatcher.dispatch(Event::PanelToggle(id.clone()))
    };
    let toggle_key = toggle.clone();

    let settled = id.clone();
    let on_transition_end = move |ev: leptos::ev::TransitionEvent| {
        // nested form bodies animate too; only our own body counts
        if ev.target() == ev.current_target() {
            dispatcher.dispatch(Event::PanelTransitionEnd(settled.clone()));
        }
    };

    view! {
        <div class="contract-panel">
            <div
                class="contract-toggle"
                role="button"
                tabindex="0"
                aria-controls=id.to_string()
                aria-expanded=move || is_open().to_string()
                on:click=move |ev| {
                    ev.prevent_default();
                    toggle();
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if matches!(ev.key().as_str(), "Enter" | " ") {
                        ev.prevent_default();
                        toggle_key();
                    }
                }
            >
                <span class="contract-toggle__title">{title}</span>
                <span class="contract-arrow" class:open=is_open aria-hidden="true">
                    "▾"
                </span>
            </div>
            <div
                id=id.to_string()
                class="contract-collapse"
                class:open=is_visible
                aria-hidden=move || (!is_open()).to_string()
                style:max-height=max_height
                style:overflow=overflow
                on:transitionend=on_transition_end
            >
                {children()}
            </div>
        </div>
    }
}
