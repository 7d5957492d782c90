//! Inline form that slides open inside a panel and posts its fields.
//!
//! The toggle button only opens; closing happens through Cancel or after a
//! successful submit. Field markup comes from the caller as children and is
//! read back by name at submit time.

use leptos::prelude::*;

use crate::state::admin::Event;
use crate::state::form::{ActionForm as FormState, FormId};
use crate::util::dispatch::Dispatcher;
use crate::util::dom;

#[component]
pub fn ActionForm(id: FormId, #[prop(into)] label: String, children: Children) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let key = id.clone();
    let snapshot = Memo::new(move |_| state.with(|s| s.form(&key).cloned()));
    let flag = move |f: fn(&FormState) -> bool| snapshot.with(|form| form.as_ref().is_some_and(f));
    let endpoint = snapshot.with_untracked(|form| form.as_ref().and_then(|f| f.endpoint.clone()).unwrap_or_default());
    let max_height = move || snapshot.with(|form| format!("{}px", form.as_ref().map_or(0.0, |f| f.max_height)));
    let message = move || snapshot.with(|form| form.as_ref().and_then(|f| f.message.clone()));

    let open_id = id.clone();
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Event::FormToggle(open_id.clone()));
    };
    let cancel_id = id.clone();
    let on_cancel = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Event::FormCancel(cancel_id.clone()));
    };
    let submit_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = dom::collect_fields(submit_id.as_str());
        dispatcher.dispatch(Event::FormSubmit { form: submit_id.clone(), fields });
    };
    let settled = id.clone();
    let on_transition_end = move |ev: leptos::ev::TransitionEvent| {
        if ev.target() == ev.current_target() {
            dispatcher.dispatch(Event::FormTransitionEnd(settled.clone()));
        }
    };

    view! {
        <div class="fn-row">
            <button
                class="btn btn-sm btn-outline-primary toggle-fn-btn"
                data-target=format!("#{id}")
                disabled=move || !flag(FormState::toggle_enabled)
                on:click=on_toggle
            >
                {label}
            </button>
            <form
                id=id.to_string()
                class="fn-form"
                class:open=move || flag(FormState::is_open)
                aria-hidden=move || (!flag(FormState::is_open)).to_string()
                data-endpoint=endpoint
                style:max-height=max_height
                on:submit=on_submit
                on:transitionend=on_transition_end
            >
                {children()}
                <div class="fn-actions">
                    <button
                        type="submit"
                        class="btn btn-sm btn-primary submit-fn-btn"
                        disabled=move || !flag(FormState::submit_enabled)
                    >
                        "Save"
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm btn-secondary cancel-fn-btn"
                        disabled=move || !flag(FormState::cancel_enabled)
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                </div>
                {move || {
                    message()
                        .map(|m| {
                            view! {
                                <div class="fn-msg small mt-2" class:fn-msg--error=m.is_error>
                                    {m.text}
                                </div>
                            }
                        })
                }}
            </form>
        </div>
    }
}
