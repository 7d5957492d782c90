//! Notification center: a stack of transient, dismissible status messages.
//!
//! Most recent first. Entries enter hidden, are revealed on the next frame,
//! and leave in two steps (`dismiss` starts the exit transition, `detach`
//! removes the entry) so the view can animate both edges.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::VecDeque;

/// Stable identifier of one notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifyKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotifyKind {
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Info => "Notice",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "✓",
            Self::Error => "⚠",
        }
    }

    /// CSS modifier class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Optional extras for [`NotificationCenter::show`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyOptions {
    pub title: Option<String>,
    pub tx_hash: Option<String>,
    pub sticky: bool,
}

impl NotifyOptions {
    #[must_use]
    pub fn sticky() -> Self {
        Self { sticky: true, ..Self::default() }
    }

    #[must_use]
    pub fn with_tx(tx_hash: Option<String>) -> Self {
        Self { tx_hash, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifyPhase {
    #[default]
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotifyKind,
    pub title: String,
    pub message: String,
    pub tx_ref: Option<String>,
    pub sticky: bool,
    pub created_at_ms: f64,
    pub phase: NotifyPhase,
    /// Copy button shows "Copied" until the reset timer fires.
    pub copied: bool,
}

impl Notification {
    /// Transaction reference as displayed: elided to `width / 2` characters
    /// on each side of `...` when longer than `width`.
    #[must_use]
    pub fn display_tx(&self, width: usize) -> Option<String> {
        self.tx_ref.as_deref().map(|tx| elide_middle(tx, width))
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == NotifyPhase::Shown
    }
}

/// Elide the middle of `value` when it exceeds `width` characters.
#[must_use]
pub fn elide_middle(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        return value.to_owned();
    }
    let half = width / 2;
    let head: String = value.chars().take(half).collect();
    let tail: String = value.chars().skip(len - half).collect();
    format!("{head}...{tail}")
}

/// Owns every live notification.
#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    stack: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    /// Push a new notification to the top of the stack and return its id.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotifyKind,
        options: NotifyOptions,
        now_ms: f64,
    ) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let title = options
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| kind.default_title().to_owned());
        self.stack.push_front(Notification {
            id,
            kind,
            title,
            message: message.into(),
            tx_ref: options.tx_hash.filter(|tx| !tx.is_empty()),
            sticky: options.sticky,
            created_at_ms: now_ms,
            phase: NotifyPhase::Entering,
            copied: false,
        });
        id
    }

    /// Finish the entrance transition.
    pub fn reveal(&mut self, id: NotificationId) {
        if let Some(n) = self.get_mut(id)
            && n.phase == NotifyPhase::Entering
        {
            n.phase = NotifyPhase::Shown;
        }
    }

    /// Begin the exit transition. Returns `true` only the first time for a
    /// live id; unknown or already-leaving ids are a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(n) if n.phase != NotifyPhase::Leaving => {
                n.phase = NotifyPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove the entry from the stack. No-op for unknown ids.
    pub fn detach(&mut self, id: NotificationId) -> bool {
        let before = self.stack.len();
        self.stack.retain(|n| n.id != id);
        self.stack.len() != before
    }

    /// Full transaction reference for the copy action; marks the entry copied.
    pub fn copy_tx(&mut self, id: NotificationId) -> Option<String> {
        let n = self.get_mut(id)?;
        let tx = n.tx_ref.clone()?;
        n.copied = true;
        Some(tx)
    }

    pub fn reset_copied(&mut self, id: NotificationId) {
        if let Some(n) = self.get_mut(id) {
            n.copied = false;
        }
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.stack.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.stack.iter_mut().find(|n| n.id == id)
    }

    /// Notifications in display order, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.stack.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
