//! Inline action form lifecycle.
//!
//! ```text
//! Closed --toggle--> Opening --settle--> Open --submit--> Submitting
//!   ^                                     |  ^               |
//!   |                                   cancel +---failure---+
//!   +------ transition end ---- Closing <-+------ success (after delay)
//! ```
//!
//! The form only tracks its own phase, extent, and inline message. Parent
//! panel coordination and network effects live in `state::admin`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use super::panel::PanelId;

/// DOM id of an inline action form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(pub String);

impl FormId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Closed,
    /// `awaiting_panel` while the parent panel is still animating open.
    Opening { awaiting_panel: bool },
    Open,
    Submitting,
    Closing,
}

/// Transient text shown under the form controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineMessage {
    pub text: String,
    pub is_error: bool,
    /// Expiry timers carry this so they only clear the message they were set for.
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionForm {
    pub id: FormId,
    pub endpoint: Option<String>,
    /// Enclosing panel, looked up by id so a removed panel is simply absent.
    pub parent: Option<PanelId>,
    pub phase: FormPhase,
    pub max_height: f64,
    pub message: Option<InlineMessage>,
    /// Bumped on every open/close so stale fallback timers can be told apart.
    pub transition: u64,
    message_seq: u64,
}

impl ActionForm {
    #[must_use]
    pub fn new(id: FormId, endpoint: Option<String>, parent: Option<PanelId>) -> Self {
        Self {
            id,
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            parent,
            phase: FormPhase::Closed,
            max_height: 0.0,
            message: None,
            transition: 0,
            message_seq: 0,
        }
    }

    /// Rendered open (class `open`, `aria-hidden=false`).
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, FormPhase::Closed | FormPhase::Closing)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The toggle control only opens a closed form.
    #[must_use]
    pub fn toggle_enabled(&self) -> bool {
        self.phase == FormPhase::Closed
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Open
    }

    #[must_use]
    pub fn cancel_enabled(&self) -> bool {
        self.phase == FormPhase::Open
    }

    /// `Closed -> Opening`. Returns `false` from any other phase.
    pub fn begin_open(&mut self, content: f64, awaiting_panel: bool) -> bool {
        if self.phase != FormPhase::Closed {
            return false;
        }
        self.phase = FormPhase::Opening { awaiting_panel };
        self.transition += 1;
        self.max_height = content;
        true
    }

    /// Parent panel finished opening (or the wait timed out). Returns `true`
    /// only for the first resolution.
    pub fn parent_ready(&mut self, content: f64) -> bool {
        if self.phase != (FormPhase::Opening { awaiting_panel: true }) {
            return false;
        }
        self.phase = FormPhase::Opening { awaiting_panel: false };
        self.max_height = content;
        true
    }

    /// `Opening -> Open` once the reveal has settled and been scrolled into view.
    pub fn finish_open(&mut self) -> bool {
        if self.phase != (FormPhase::Opening { awaiting_panel: false }) {
            return false;
        }
        self.phase = FormPhase::Open;
        true
    }

    /// `Open -> Submitting`. Re-entrant submits are refused.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Open {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Failed submission returns the form to `Open`.
    pub fn submit_failed(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Open;
        }
    }

    /// Start collapsing from the full content extent. Allowed from `Open`
    /// (cancel) and from `Submitting` (success-delay expiry) only.
    pub fn begin_close(&mut self, content: f64) -> bool {
        if !matches!(self.phase, FormPhase::Open | FormPhase::Submitting) {
            return false;
        }
        self.phase = FormPhase::Closing;
        self.transition += 1;
        self.max_height = content;
        true
    }

    pub fn collapse(&mut self) {
        if self.phase == FormPhase::Closing {
            self.max_height = 0.0;
        }
    }

    /// `Closing -> Closed` on transition end or its fallback.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != FormPhase::Closing {
            return false;
        }
        self.phase = FormPhase::Closed;
        self.max_height = 0.0;
        true
    }

    /// Track content growth while visible.
    pub fn remeasure(&mut self, content: f64) -> bool {
        if !matches!(self.phase, FormPhase::Opening { awaiting_panel: false } | FormPhase::Open | FormPhase::Submitting) {
            return false;
        }
        self.max_height = content;
        true
    }

    /// Replace the inline message; returns the sequence number for its expiry timer.
    pub fn set_message(&mut self, text: impl Into<String>, is_error: bool) -> u64 {
        self.message_seq += 1;
        self.message = Some(InlineMessage { text: text.into(), is_error, seq: self.message_seq });
        self.message_seq
    }

    /// Clear the message if it is still the one `seq` refers to.
    pub fn expire_message(&mut self, seq: u64) -> bool {
        if self.message.as_ref().is_some_and(|m| m.seq == seq) {
            self.message = None;
            return true;
        }
        false
    }
}
