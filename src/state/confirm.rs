//! Confirmable actions and the shared yes/no dialog that gates them.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::fmt;

use super::panel::PanelId;

/// DOM id of a confirmable action button.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single-click action that must be confirmed before it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmableAction {
    pub id: ActionId,
    pub name: String,
    pub endpoint: Option<String>,
    pub parent: Option<PanelId>,
    /// Request in flight; the button is disabled while set.
    pub is_pending: bool,
}

impl ConfirmableAction {
    #[must_use]
    pub fn new(id: ActionId, name: impl Into<String>, endpoint: Option<String>, parent: Option<PanelId>) -> Self {
        Self {
            id,
            name: name.into(),
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            parent,
            is_pending: false,
        }
    }
}

/// Visual tone of the dialog's confirm button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmTone {
    #[default]
    Danger,
    Affirmative,
}

impl ConfirmTone {
    /// `pause`-class actions are destructive; everything else is affirmative.
    #[must_use]
    pub fn for_action(name: &str) -> Self {
        if name.eq_ignore_ascii_case("pause") { Self::Danger } else { Self::Affirmative }
    }

    #[must_use]
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Danger => "btn btn-sm btn-danger",
            Self::Affirmative => "btn btn-sm btn-success",
        }
    }
}

/// Text shown in the dialog for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub ok_text: String,
    pub tone: ConfirmTone,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn for_action(name: &str, record_noun: &str) -> Self {
        Self {
            title: format!("Confirm {name}"),
            message: format!("Are you sure you want to {name} the {record_noun}?"),
            ok_text: format!("Yes, {name}"),
            tone: ConfirmTone::for_action(name),
        }
    }
}

/// Keyboard keys that dismiss the dialog without confirming. Older
/// browsers report Escape as `"Esc"`.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// The page's single confirmation dialog.
///
/// Holds at most one pending action: a new request replaces the previous
/// one instead of queueing behind it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    prompt: Option<ConfirmPrompt>,
    pending: Option<ActionId>,
}

impl ConfirmDialog {
    /// Show the dialog for `action`, returning the action it displaced, if any.
    pub fn request(&mut self, action: ActionId, prompt: ConfirmPrompt) -> Option<ActionId> {
        self.prompt = Some(prompt);
        self.pending.replace(action)
    }

    /// Operator confirmed: hide and hand back the bound action.
    pub fn confirm(&mut self) -> Option<ActionId> {
        self.prompt = None;
        self.pending.take()
    }

    /// Operator cancelled or clicked the backdrop: hide with no side effects.
    pub fn cancel(&mut self) -> Option<ActionId> {
        self.prompt = None;
        self.pending.take()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.prompt.is_some()
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&ConfirmPrompt> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ActionId> {
        self.pending.as_ref()
    }
}
