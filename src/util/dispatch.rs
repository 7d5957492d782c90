//! Effect runtime for the admin controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views hold a [`Dispatcher`] from context and call [`Dispatcher::dispatch`]
//! for every user or DOM event. The dispatcher applies the event to the
//! shared `RwSignal<AdminState>` and then performs the returned effects:
//! gateway POSTs and timers run on `spawn_local`, frame callbacks go through
//! `request_animation_frame`, and each completion is dispatched back as a
//! new event.
//!
//! ERROR HANDLING
//! ==============
//! Completions that arrive after the page was torn down find a disposed
//! signal; `try_update` returns `None` and the event is dropped.

use leptos::prelude::*;

use crate::net::gateway::RequestOptions;
use crate::state::admin::{AdminState, Effect, Event};

use super::dom::DomHost;

#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AdminState>,
}

impl Dispatcher {
    pub fn new(state: RwSignal<AdminState>) -> Self {
        Self { state }
    }

    pub fn state(self) -> RwSignal<AdminState> {
        self.state
    }

    /// Apply `event` and run whatever it asks for.
    pub fn dispatch(self, event: Event) {
        let Some(effects) = self.state.try_update(|s| s.handle(event, &DomHost)) else {
            log::debug!("admin state disposed; dropping event");
            return;
        };
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        #[cfg(feature = "hydrate")]
        match effect {
            Effect::Post { origin, endpoint, payload } => {
                let options = self.request_options();
                leptos::task::spawn_local(async move {
                    let result = crate::net::gateway::post_json(&endpoint, &payload, &options).await;
                    let event = match origin {
                        crate::state::admin::Origin::Form(form) => Event::FormResponse { form, result },
                        crate::state::admin::Origin::Action(action) => Event::ActionResponse { action, result },
                    };
                    self.dispatch(event);
                });
            }
            Effect::Schedule { timer, delay_ms } => {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                    self.dispatch(Event::TimerFired(timer));
                });
            }
            Effect::AfterFrame(timer) => request_animation_frame(move || self.dispatch(Event::TimerFired(timer))),
            Effect::ScrollIntoPanel { panel, target, offset } => {
                super::dom::scroll_into_container(panel.as_str(), target.as_str(), offset);
            }
            Effect::CopyToClipboard(text) => super::dom::copy_to_clipboard(text),
        }
        #[cfg(not(feature = "hydrate"))]
        log::debug!("effect skipped outside the browser: {effect:?}");
    }

    /// Credentials and limits for the next gateway call. The CSRF token is
    /// read fresh each time so a rotated cookie is picked up.
    pub fn request_options(self) -> RequestOptions {
        let config = self.state.try_with_untracked(|s| s.config().clone()).unwrap_or_default();
        RequestOptions {
            csrf_token: super::dom::cookie(&config.csrf_cookie),
            csrf_header: config.csrf_header,
            timeout_ms: config.request_timeout_ms,
        }
    }
}
