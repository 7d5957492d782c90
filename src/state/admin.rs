//! Interaction controller for one admin page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminState` is the single context object behind the page. It owns every
//! panel, inline form, and confirmable action, plus the optional
//! notification center and confirmation dialog. Views never mutate it
//! directly: they send an [`Event`] to [`AdminState::handle`] and the browser
//! runtime (`util::dispatch`) performs the returned [`Effect`]s, feeding
//! completions back in as further events.
//!
//! TRADE-OFFS
//! ==========
//! Transition-end signals can be lost, so every transition that gates later
//! work (panel open, form close, form waiting on its panel) is raced against
//! a fallback timer. Panel close gates nothing and waits for its transition
//! end. Timers carry the transition generation they were armed for; a timer
//! from an earlier transition is ignored.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::collections::BTreeMap;

use crate::config::AdminConfig;
use crate::net::gateway::GatewayError;
use crate::net::types::{ActionFailure, ActionResult, ActionSuccess, Field, collect_payload};

use super::confirm::{ActionId, ConfirmDialog, ConfirmPrompt, ConfirmableAction};
use super::form::{ActionForm, FormId, FormPhase};
use super::notify::{NotificationCenter, NotificationId, NotifyKind, NotifyOptions};
use super::panel::{Measure, Panel, PanelId, PanelPhase};

pub const FORM_SUCCESS_MESSAGE: &str = "Action succeeded";
pub const FORM_SENDING_MESSAGE: &str = "Sending...";
pub const FORM_SUCCESS_INLINE: &str = "Success";
pub const FORM_MISSING_ENDPOINT_NOTICE: &str = "No endpoint configured for that action";
pub const ACTION_MISSING_ENDPOINT_NOTICE: &str = "No endpoint configured for this action";

/// Environment queries the controller needs from the page.
pub trait Host {
    /// Full content extent (`scrollHeight`) of the element with this DOM id,
    /// or `None` when the element is absent.
    fn content_extent(&self, element_id: &str) -> Option<f64>;
    /// Current viewport height.
    fn viewport_extent(&self) -> f64;
    /// Milliseconds on a monotonic-enough wall clock.
    fn now_ms(&self) -> f64;
}

/// Who issued a gateway request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Form(FormId),
    Action(ActionId),
}

/// Deferred callbacks. Generation numbers guard fallback timers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Timer {
    PanelCollapse(PanelId),
    PanelSettle(PanelId, u64),
    FormReveal(FormId, u64),
    FormSettle(FormId, u64),
    FormCollapse(FormId),
    FormCloseFallback(FormId, u64),
    FormRemeasure(FormId),
    FormMessageExpire(FormId, u64),
    FormSuccessClose(FormId),
    NotifyReveal(NotificationId),
    NotifyExpire(NotificationId),
    NotifyDetach(NotificationId),
    CopyReset(NotificationId),
}

/// Work the runtime performs on the controller's behalf.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// POST `payload` to `endpoint`; reply with `FormResponse`/`ActionResponse`.
    Post { origin: Origin, endpoint: String, payload: serde_json::Value },
    /// Fire `TimerFired(timer)` after `delay_ms`.
    Schedule { timer: Timer, delay_ms: u32 },
    /// Fire `TimerFired(timer)` on the next animation frame.
    AfterFrame(Timer),
    /// Scroll `panel` so `target` sits `offset` px below its top edge.
    ScrollIntoPanel { panel: PanelId, target: FormId, offset: f64 },
    CopyToClipboard(String),
}

/// Input to the controller.
#[derive(Debug)]
pub enum Event {
    /// Page mounted; measure panels rendered open.
    Ready,
    ViewportResized,
    PanelToggle(PanelId),
    PanelTransitionEnd(PanelId),
    FormToggle(FormId),
    FormCancel(FormId),
    FormSubmit { form: FormId, fields: Vec<Field> },
    FormTransitionEnd(FormId),
    FormResponse { form: FormId, result: Result<ActionResult, GatewayError> },
    ActionRequested(ActionId),
    ConfirmOk,
    ConfirmCancel,
    ConfirmBackdrop,
    ActionResponse { action: ActionId, result: Result<ActionResult, GatewayError> },
    NotifyDismiss(NotificationId),
    NotifyCopy(NotificationId),
    TimerFired(Timer),
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    config: AdminConfig,
    panels: BTreeMap<PanelId, Panel>,
    forms: BTreeMap<FormId, ActionForm>,
    actions: BTreeMap<ActionId, ConfirmableAction>,
    notifications: Option<NotificationCenter>,
    dialog: Option<ConfirmDialog>,
}

impl AdminState {
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Registration
    // ---------------------------------------------------------------

    pub fn register_panel(&mut self, id: PanelId, initially_open: bool) {
        let panel = if initially_open {
            Panel::new_open(id.clone(), self.config.viewport_cap_fraction)
        } else {
            Panel::new(id.clone(), self.config.viewport_cap_fraction)
        };
        self.panels.insert(id, panel);
    }

    pub fn register_form(&mut self, id: FormId, endpoint: Option<String>, parent: Option<PanelId>) {
        if endpoint.as_deref().is_none_or(|e| e.trim().is_empty()) {
            log::warn!("form {id} declares no endpoint; submits will be refused locally");
        }
        self.forms.insert(id.clone(), ActionForm::new(id, endpoint, parent));
    }

    pub fn register_action(
        &mut self,
        id: ActionId,
        name: impl Into<String>,
        endpoint: Option<String>,
        parent: Option<PanelId>,
    ) {
        self.actions
            .insert(id.clone(), ConfirmableAction::new(id, name, endpoint, parent));
    }

    /// The page has a notification container.
    pub fn attach_notifications(&mut self) {
        self.notifications.get_or_insert_with(NotificationCenter::default);
    }

    /// The page has a confirmation dialog.
    pub fn attach_dialog(&mut self) {
        self.dialog.get_or_insert_with(ConfirmDialog::default);
    }

    // ---------------------------------------------------------------
    // Read access for views
    // ---------------------------------------------------------------

    #[must_use]
    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    #[must_use]
    pub fn form(&self, id: &FormId) -> Option<&ActionForm> {
        self.forms.get(id)
    }

    #[must_use]
    pub fn action(&self, id: &ActionId) -> Option<&ConfirmableAction> {
        self.actions.get(id)
    }

    #[must_use]
    pub fn notifications(&self) -> Option<&NotificationCenter> {
        self.notifications.as_ref()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&ConfirmDialog> {
        self.dialog.as_ref()
    }

    // ---------------------------------------------------------------
    // Event loop
    // ---------------------------------------------------------------

    /// Apply one event and return the effects it requests.
    pub fn handle(&mut self, event: Event, host: &impl Host) -> Vec<Effect> {
        let mut fx = Vec::new();
        match event {
            Event::Ready => self.remeasure_open_panels(host),
            Event::ViewportResized => {
                let visible: Vec<FormId> =
                    self.forms.values().filter(|f| f.is_open()).map(|f| f.id.clone()).collect();
                for id in visible {
                    self.remeasure_form(&id, host);
                }
                self.remeasure_open_panels(host);
            }
            Event::PanelToggle(id) => self.toggle_panel(&id, host, &mut fx),
            Event::PanelTransitionEnd(id) => self.settle_panel(&id, host, &mut fx),
            Event::FormToggle(id) => match self.forms.get(&id).map(|f| f.phase) {
                Some(FormPhase::Closed) => self.open_form(&id, host, &mut fx),
                Some(FormPhase::Open) => self.close_form(&id, host, &mut fx),
                _ => {}
            },
            Event::FormCancel(id) => {
                if self.forms.get(&id).is_some_and(ActionForm::cancel_enabled) {
                    self.close_form(&id, host, &mut fx);
                }
            }
            Event::FormSubmit { form, fields } => self.submit_form(&form, &fields, host, &mut fx),
            Event::FormTransitionEnd(id) => self.finish_close_form(&id, host),
            Event::FormResponse { form, result } => self.form_response(&form, result, host, &mut fx),
            Event::ActionRequested(id) => self.request_action(&id, host, &mut fx),
            Event::ConfirmOk => self.confirm_action(&mut fx),
            Event::ConfirmCancel | Event::ConfirmBackdrop => {
                if let Some(dialog) = self.dialog.as_mut()
                    && let Some(action) = dialog.cancel()
                {
                    log::debug!("confirmation for {action} cancelled");
                }
            }
            Event::ActionResponse { action, result } => self.action_response(&action, result, host, &mut fx),
            Event::NotifyDismiss(id) => self.dismiss_notification(id, &mut fx),
            Event::NotifyCopy(id) => {
                if let Some(tx) = self.notifications.as_mut().and_then(|c| c.copy_tx(id)) {
                    fx.push(Effect::CopyToClipboard(tx));
                    fx.push(Effect::Schedule { timer: Timer::CopyReset(id), delay_ms: self.config.copy_reset_ms });
                }
            }
            Event::TimerFired(timer) => self.timer_fired(timer, host, &mut fx),
        }
        fx
    }

    fn timer_fired(&mut self, timer: Timer, host: &impl Host, fx: &mut Vec<Effect>) {
        match timer {
            Timer::PanelCollapse(id) => {
                if let Some(panel) = self.panels.get_mut(&id) {
                    panel.collapse();
                }
            }
            Timer::PanelSettle(id, generation) => {
                if self.panels.get(&id).is_some_and(|p| p.transition == generation) {
                    self.settle_panel(&id, host, fx);
                }
            }
            Timer::FormReveal(id, generation) => {
                if self.form_generation_is(&id, generation) {
                    log::debug!("form {id}: parent panel did not report open in time; revealing anyway");
                    self.reveal_form(&id, host, fx);
                }
            }
            Timer::FormSettle(id, generation) => {
                if self.form_generation_is(&id, generation) {
                    self.settle_form(&id, host, fx);
                }
            }
            Timer::FormCollapse(id) => {
                if let Some(form) = self.forms.get_mut(&id) {
                    form.collapse();
                }
            }
            Timer::FormCloseFallback(id, generation) => {
                if self.form_generation_is(&id, generation) {
                    self.finish_close_form(&id, host);
                }
            }
            Timer::FormRemeasure(id) => self.remeasure_form(&id, host),
            Timer::FormMessageExpire(id, seq) => {
                if self.forms.get_mut(&id).is_some_and(|f| f.expire_message(seq)) {
                    fx.push(Effect::AfterFrame(Timer::FormRemeasure(id)));
                }
            }
            Timer::FormSuccessClose(id) => self.close_form(&id, host, fx),
            Timer::NotifyReveal(id) => {
                if let Some(center) = self.notifications.as_mut() {
                    center.reveal(id);
                }
            }
            Timer::NotifyExpire(id) => self.dismiss_notification(id, fx),
            Timer::NotifyDetach(id) => {
                if let Some(center) = self.notifications.as_mut() {
                    center.detach(id);
                }
            }
            Timer::CopyReset(id) => {
                if let Some(center) = self.notifications.as_mut() {
                    center.reset_copied(id);
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Panels
    // ---------------------------------------------------------------

    fn measure(&self, host: &impl Host, element_id: &str) -> Option<Measure> {
        Some(Measure { content: host.content_extent(element_id)?, viewport: host.viewport_extent() })
    }

    fn toggle_panel(&mut self, id: &PanelId, host: &impl Host, fx: &mut Vec<Effect>) {
        let Some(measure) = self.measure(host, id.as_str()) else {
            return;
        };
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        let entered = panel.toggle(measure);
        let generation = panel.transition;
        match entered {
            Some(PanelPhase::Opening) => {
                log::debug!("panel {id} opening");
                fx.push(Effect::Schedule {
                    timer: Timer::PanelSettle(id.clone(), generation),
                    delay_ms: self.config.transition_fallback_ms,
                });
            }
            // Close completes on transition end only; a missed end leaves it
            // Closing, which the next toggle reopens from.
            Some(PanelPhase::Closing) => {
                log::debug!("panel {id} closing");
                fx.push(Effect::AfterFrame(Timer::PanelCollapse(id.clone())));
            }
            _ => {}
        }
    }

    fn settle_panel(&mut self, id: &PanelId, host: &impl Host, fx: &mut Vec<Effect>) {
        let Some(settled) = self.panels.get_mut(id).and_then(Panel::settle) else {
            return;
        };
        if settled != PanelPhase::Open {
            return;
        }
        let waiting: Vec<FormId> = self
            .forms
            .values()
            .filter(|f| f.parent.as_ref() == Some(id) && f.phase == (FormPhase::Opening { awaiting_panel: true }))
            .map(|f| f.id.clone())
            .collect();
        for form in waiting {
            self.reveal_form(&form, host, fx);
        }
    }

    fn remeasure_panel(&mut self, id: &PanelId, host: &impl Host) {
        let Some(measure) = self.measure(host, id.as_str()) else {
            return;
        };
        if let Some(panel) = self.panels.get_mut(id) {
            panel.remeasure(measure);
        }
    }

    fn remeasure_open_panels(&mut self, host: &impl Host) {
        let open: Vec<PanelId> = self.panels.values().filter(|p| p.is_open()).map(|p| p.id.clone()).collect();
        for id in open {
            self.remeasure_panel(&id, host);
        }
    }

    // ---------------------------------------------------------------
    // Forms
    // ---------------------------------------------------------------

    fn form_generation_is(&self, id: &FormId, generation: u64) -> bool {
        self.forms.get(id).is_some_and(|f| f.transition == generation)
    }

    fn parent_phase(&self, id: &FormId) -> Option<(PanelId, PanelPhase)> {
        let parent = self.forms.get(id)?.parent.clone()?;
        let phase = self.panels.get(&parent)?.phase;
        Some((parent, phase))
    }

    fn open_form(&mut self, id: &FormId, host: &impl Host, fx: &mut Vec<Effect>) {
        if self.begin_open_form(id, host) {
            log::debug!("form {id} opening");
            self.open_form_effects(id, host, fx);
        }
    }

    fn begin_open_form(&mut self, id: &FormId, host: &impl Host) -> bool {
        let Some(content) = host.content_extent(id.as_str()) else {
            return false;
        };
        let parent = self.parent_phase(id);
        let awaiting = parent
            .as_ref()
            .is_some_and(|(panel, phase)| *phase != PanelPhase::Open && host.content_extent(panel.as_str()).is_some());
        let Some(form) = self.forms.get_mut(id) else {
            return false;
        };
        form.begin_open(content, awaiting)
    }

    fn open_form_effects(&mut self, id: &FormId, host: &impl Host, fx: &mut Vec<Effect>) {
        let Some(form) = self.forms.get(id) else {
            return;
        };
        let generation = form.transition;
        if form.phase == (FormPhase::Opening { awaiting_panel: true }) {
            if let Some((panel, phase)) = self.parent_phase(id)
                && matches!(phase, PanelPhase::Closed | PanelPhase::Closing)
            {
                self.toggle_panel(&panel, host, fx);
            }
            fx.push(Effect::Schedule {
                timer: Timer::FormReveal(id.clone(), generation),
                delay_ms: self.config.transition_fallback_ms,
            });
        } else {
            fx.push(Effect::Schedule {
                timer: Timer::FormSettle(id.clone(), generation),
                delay_ms: self.config.settle_delay_ms,
            });
        }
    }

    /// Parent panel is ready (or the wait timed out): size the form and let it settle.
    fn reveal_form(&mut self, id: &FormId, host: &impl Host, fx: &mut Vec<Effect>) {
        let content = host.content_extent(id.as_str());
        let Some(form) = self.forms.get_mut(id) else {
            return;
        };
        let content = content.unwrap_or(form.max_height);
        if form.parent_ready(content) {
            fx.push(Effect::Schedule {
                timer: Timer::FormSettle(id.clone(), form.transition),
                delay_ms: self.config.settle_delay_ms,
            });
        }
    }

    fn settle_form(&mut self, id: &FormId, host: &impl Host, fx: &mut Vec<Effect>) {
        if !self.forms.get_mut(id).is_some_and(ActionForm::finish_open) {
            return;
        }
        log::debug!("form {id} open");
        self.remeasure_form(id, host);
        if let Some((panel, phase)) = self.parent_phase(id)
            && phase != PanelPhase::Closed
        {
            fx.push(Effect::ScrollIntoPanel {
                panel,
                target: id.clone(),
                offset: self.config.scroll_offset_px,
            });
        }
    }

    fn close_form(&mut self, id: &FormId, host: &impl Host, fx: &mut Vec<Effect>) {
        let content = host.content_extent(id.as_str());
        let Some(form) = self.forms.get_mut(id) else {
            return;
        };
        let content = content.unwrap_or(form.max_height);
        if !form.begin_close(content) {
            return;
        }
        log::debug!("form {id} closing");
        fx.push(Effect::AfterFrame(Timer::FormCollapse(id.clone())));
        fx.push(Effect::Schedule {
            timer: Timer::FormCloseFallback(id.clone(), form.transition),
            delay_ms: self.config.transition_fallback_ms,
        });
    }

    fn finish_close_form(&mut self, id: &FormId, host: &impl Host) {
        if !self.forms.get_mut(id).is_some_and(ActionForm::finish_close) {
            return;
        }
        log::debug!("form {id} closed");
        if let Some((panel, phase)) = self.parent_phase(id)
            && phase != PanelPhase::Closed
        {
            self.remeasure_panel(&panel, host);
        }
    }

    /// Form extent changed: resize it, then the panel around it.
    fn remeasure_form(&mut self, id: &FormId, host: &impl Host) {
        if let Some(content) = host.content_extent(id.as_str())
            && let Some(form) = self.forms.get_mut(id)
        {
            form.remeasure(content);
        }
        if let Some((panel, _)) = self.parent_phase(id) {
            self.remeasure_panel(&panel, host);
        }
    }

    fn form_message(&mut self, id: &FormId, text: &str, is_error: bool, fx: &mut Vec<Effect>) {
        let Some(form) = self.forms.get_mut(id) else {
            return;
        };
        let seq = form.set_message(text, is_error);
        fx.push(Effect::Schedule {
            timer: Timer::FormMessageExpire(id.clone(), seq),
            delay_ms: self.config.inline_message_ms,
        });
        fx.push(Effect::AfterFrame(Timer::FormRemeasure(id.clone())));
    }

    fn submit_form(&mut self, id: &FormId, fields: &[Field], host: &impl Host, fx: &mut Vec<Effect>) {
        let Some(form) = self.forms.get_mut(id) else {
            return;
        };
        if !form.submit_enabled() {
            log::debug!("form {id}: submit ignored in phase {:?}", form.phase);
            return;
        }
        let Some(endpoint) = form.endpoint.clone() else {
            self.form_message(id, &ActionFailure::MissingEndpoint.to_string(), true, fx);
            self.notify(FORM_MISSING_ENDPOINT_NOTICE, NotifyKind::Error, NotifyOptions::default(), host, fx);
            return;
        };
        form.begin_submit();
        self.form_message(id, FORM_SENDING_MESSAGE, false, fx);
        fx.push(Effect::Post { origin: Origin::Form(id.clone()), endpoint, payload: collect_payload(fields) });
    }

    fn form_response(
        &mut self,
        id: &FormId,
        result: Result<ActionResult, GatewayError>,
        host: &impl Host,
        fx: &mut Vec<Effect>,
    ) {
        match classify(result, id.as_str()) {
            Ok(success) => {
                self.form_message(id, FORM_SUCCESS_INLINE, false, fx);
                let message = success.message.unwrap_or_else(|| FORM_SUCCESS_MESSAGE.to_owned());
                self.notify(message, NotifyKind::Success, NotifyOptions::with_tx(success.tx_hash), host, fx);
                fx.push(Effect::Schedule {
                    timer: Timer::FormSuccessClose(id.clone()),
                    delay_ms: self.config.success_close_delay_ms,
                });
            }
            Err(failure) => {
                self.form_message(id, &failure.to_string(), true, fx);
                self.notify(failure.notification_text(), NotifyKind::Error, NotifyOptions::default(), host, fx);
                if let Some(form) = self.forms.get_mut(id) {
                    form.submit_failed();
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Confirmable actions
    // ---------------------------------------------------------------

    fn request_action(&mut self, id: &ActionId, host: &impl Host, fx: &mut Vec<Effect>) {
        let Some(action) = self.actions.get(id) else {
            return;
        };
        if action.is_pending {
            return;
        }
        if action.endpoint.is_none() {
            self.notify(ACTION_MISSING_ENDPOINT_NOTICE, NotifyKind::Error, NotifyOptions::default(), host, fx);
            return;
        }
        let prompt = ConfirmPrompt::for_action(&action.name, &self.config.record_noun);
        let Some(dialog) = self.dialog.as_mut() else {
            log::warn!("action {id} requested but the page has no confirmation dialog");
            return;
        };
        if let Some(previous) = dialog.request(id.clone(), prompt) {
            log::debug!("confirmation for {previous} replaced by {id}");
        }
    }

    fn confirm_action(&mut self, fx: &mut Vec<Effect>) {
        let Some(id) = self.dialog.as_mut().and_then(ConfirmDialog::confirm) else {
            return;
        };
        let Some(action) = self.actions.get_mut(&id) else {
            return;
        };
        let Some(endpoint) = action.endpoint.clone() else {
            return;
        };
        if action.is_pending {
            return;
        }
        action.is_pending = true;
        log::debug!("action {id} confirmed; posting to {endpoint}");
        fx.push(Effect::Post {
            origin: Origin::Action(id),
            endpoint,
            payload: serde_json::Value::Object(serde_json::Map::new()),
        });
    }

    fn action_response(
        &mut self,
        id: &ActionId,
        result: Result<ActionResult, GatewayError>,
        host: &impl Host,
        fx: &mut Vec<Effect>,
    ) {
        let outcome = classify(result, id.as_str());
        let Some(action) = self.actions.get_mut(id) else {
            return;
        };
        action.is_pending = false;
        let name = action.name.clone();
        let parent = action.parent.clone();
        match outcome {
            Ok(success) => {
                let message = success.message.unwrap_or_else(|| format!("Action {name} executed"));
                self.notify(message, NotifyKind::Success, NotifyOptions::with_tx(success.tx_hash), host, fx);
                if let Some(panel) = parent
                    && self.panels.get(&panel).is_some_and(Panel::is_open)
                {
                    self.remeasure_panel(&panel, host);
                }
            }
            Err(failure) => {
                self.notify(failure.notification_text(), NotifyKind::Error, NotifyOptions::sticky(), host, fx);
            }
        }
    }

    // ---------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------

    fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotifyKind,
        options: NotifyOptions,
        host: &impl Host,
        fx: &mut Vec<Effect>,
    ) {
        let message = message.into();
        let Some(center) = self.notifications.as_mut() else {
            log::warn!("no notification container; dropped {kind:?} notice: {message}");
            return;
        };
        let sticky = options.sticky;
        let id = center.show(message, kind, options, host.now_ms());
        fx.push(Effect::AfterFrame(Timer::NotifyReveal(id)));
        if !sticky {
            fx.push(Effect::Schedule { timer: Timer::NotifyExpire(id), delay_ms: self.config.notify_lifetime_ms });
        }
    }

    fn dismiss_notification(&mut self, id: NotificationId, fx: &mut Vec<Effect>) {
        if self.notifications.as_mut().is_some_and(|c| c.dismiss(id)) {
            fx.push(Effect::Schedule { timer: Timer::NotifyDetach(id), delay_ms: self.config.notify_exit_ms });
        }
    }
}

/// Fold a gateway reply into the operator-facing outcome.
fn classify(result: Result<ActionResult, GatewayError>, origin: &str) -> Result<ActionSuccess, ActionFailure> {
    match result {
        Ok(reply) => reply.outcome(),
        Err(e) => {
            log::warn!("{origin}: {e}");
            Err(ActionFailure::Transport)
        }
    }
}
