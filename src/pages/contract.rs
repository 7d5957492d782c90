//! Contract administration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Declares the contract backend's action catalogue (inline forms for
//! parameter changes, confirmable buttons for pause/unpause) inside one
//! collapsible panel, and owns the `AdminState` signal every component on
//! the page shares.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use leptos::prelude::*;

use crate::components::action_form::ActionForm;
use crate::components::confirm_button::ConfirmButton;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::expandable_panel::ExpandablePanel;
use crate::components::notification_stack::NotificationStack;
use crate::config::AdminConfig;
use crate::state::admin::{AdminState, Event};
use crate::state::confirm::ActionId;
use crate::state::form::FormId;
use crate::state::panel::PanelId;
use crate::util::dispatch::Dispatcher;
use crate::util::dom;

/// DOM id of the panel holding every contract control.
pub const PANEL_ID: &str = "contractCollapseNative";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputKind {
    Text,
    Number,
    Checkbox,
}

#[derive(Clone, Copy)]
struct InputSpec {
    name: &'static str,
    label: &'static str,
    kind: InputKind,
    placeholder: &'static str,
}

#[derive(Clone, Copy)]
struct FormSpec {
    slug: &'static str,
    label: &'static str,
    inputs: &'static [InputSpec],
}

#[derive(Clone, Copy)]
struct ActionSpec {
    slug: &'static str,
    label: &'static str,
    class: &'static str,
}

const FORMS: &[FormSpec] = &[
    FormSpec {
        slug: "set-platform-wallet",
        label: "Set platform wallet",
        inputs: &[InputSpec {
            name: "wallet_address",
            label: "Wallet address",
            kind: InputKind::Text,
            placeholder: "0x...",
        }],
    },
    FormSpec {
        slug: "set-allowed-token",
        label: "Set allowed token",
        inputs: &[
            InputSpec { name: "token_address", label: "Token address", kind: InputKind::Text, placeholder: "0x..." },
            InputSpec { name: "allowed", label: "Allowed", kind: InputKind::Checkbox, placeholder: "" },
        ],
    },
    FormSpec {
        slug: "transfer-ownership",
        label: "Transfer ownership",
        inputs: &[InputSpec { name: "new_owner", label: "New owner", kind: InputKind::Text, placeholder: "0x..." }],
    },
    FormSpec {
        slug: "set-fee-bps",
        label: "Set fee (bps)",
        inputs: &[InputSpec { name: "fee_bps", label: "Fee in basis points", kind: InputKind::Number, placeholder: "250" }],
    },
];

const ACTIONS: &[ActionSpec] = &[
    ActionSpec { slug: "pause", label: "Pause", class: "btn btn-sm btn-outline-danger" },
    ActionSpec { slug: "unpause", label: "Unpause", class: "btn btn-sm btn-outline-success" },
];

fn form_dom_id(slug: &str) -> String {
    format!("fn-{slug}")
}

fn action_dom_id(slug: &str) -> String {
    format!("btn-{slug}")
}

/// Controller for the catalogue, with every form and action registered
/// under the contract panel and endpoints resolved against `config`.
#[must_use]
pub fn build_state(config: AdminConfig) -> AdminState {
    let mut state = AdminState::new(config);
    state.attach_notifications();
    state.attach_dialog();

    let panel = PanelId::new(PANEL_ID);
    state.register_panel(panel.clone(), false);
    for form in FORMS {
        let endpoint = state.config().endpoint_for(form.slug);
        state.register_form(FormId::new(form_dom_id(form.slug)), Some(endpoint), Some(panel.clone()));
    }
    for action in ACTIONS {
        let endpoint = state.config().endpoint_for(action.slug);
        state.register_action(ActionId::new(action_dom_id(action.slug)), action.slug, Some(endpoint), Some(panel.clone()));
    }
    state
}

fn input_view(input: &'static InputSpec) -> AnyView {
    match input.kind {
        InputKind::Checkbox => view! {
            <label class="form-check small">
                <input type="checkbox" class="form-check-input" name=input.name/>
                " "
                {input.label}
            </label>
        }
        .into_any(),
        InputKind::Text | InputKind::Number => {
            let input_type = if input.kind == InputKind::Number { "number" } else { "text" };
            view! {
                <label class="form-label small">
                    {input.label}
                    <input
                        type=input_type
                        class="form-control form-control-sm"
                        name=input.name
                        placeholder=input.placeholder
                    />
                </label>
            }
            .into_any()
        }
    }
}

#[component]
pub fn ContractPage() -> impl IntoView {
    let config = AdminConfig::from_json_or_default(dom::config_override().as_deref());
    let state = RwSignal::new(build_state(config));
    let dispatcher = Dispatcher::new(state);
    provide_context(dispatcher);

    #[cfg(feature = "hydrate")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| dispatcher.dispatch(Event::ViewportResized));
        on_cleanup(move || resize.remove());
    }
    Effect::new(move || dispatcher.dispatch(Event::Ready));

    view! {
        <div class="contract-admin">
            <ExpandablePanel id=PanelId::new(PANEL_ID) title="Contract controls">
                <div class="contract-actions">
                    {ACTIONS
                        .iter()
                        .map(|action| {
                            view! {
                                <ConfirmButton
                                    id=ActionId::new(action_dom_id(action.slug))
                                    label=action.label
                                    class=action.class
                                />
                            }
                        })
                        .collect_view()}
                </div>
                {FORMS
                    .iter()
                    .map(|form| {
                        view! {
                            <ActionForm id=FormId::new(form_dom_id(form.slug)) label=form.label>
                                {form.inputs.iter().map(input_view).collect_view()}
                            </ActionForm>
                        }
                    })
                    .collect_view()}
            </ExpandablePanel>
            <ConfirmDialog/>
            <NotificationStack/>
        </div>
    }
}
