//! Expandable panel state: height-animated open/close with a viewport cap.
//!
//! DESIGN
//! ======
//! The panel never reads the DOM itself. Callers pass a [`Measure`] taken
//! from the live element; the panel turns it into the `max-height` and
//! overflow policy the view renders. Closing only completes on a
//! transition-end (or its fallback), never on a bare timer.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::fmt;

/// DOM id of a collapsible container.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Overflow policy applied to the panel body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Clip,
    Scroll,
}

impl Overflow {
    /// CSS `overflow` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Clip => "hidden",
            Self::Scroll => "auto",
        }
    }
}

/// Animation phase of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Geometry snapshot: full content extent and current viewport extent, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measure {
    pub content: f64,
    pub viewport: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub phase: PanelPhase,
    /// Last measured full content extent.
    pub measured_height: f64,
    /// Rendered `max-height` in px.
    pub max_height: f64,
    pub overflow: Overflow,
    /// Bumped on every open/close so stale fallback timers can be told apart.
    pub transition: u64,
    cap_fraction: f64,
}

impl Panel {
    #[must_use]
    pub fn new(id: PanelId, cap_fraction: f64) -> Self {
        Self {
            id,
            phase: PanelPhase::Closed,
            measured_height: 0.0,
            max_height: 0.0,
            overflow: Overflow::Clip,
            transition: 0,
            cap_fraction,
        }
    }

    /// Panel rendered open by the page; the first remeasure fixes its extent.
    #[must_use]
    pub fn new_open(id: PanelId, cap_fraction: f64) -> Self {
        Self { phase: PanelPhase::Open, ..Self::new(id, cap_fraction) }
    }

    /// Open or opening. Drives the `open` class and `aria-expanded`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Open)
    }

    /// Whether the body still occupies space (open, opening, or mid-close).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Start opening. Returns `false` when already open or opening.
    pub fn open(&mut self, measure: Measure) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = PanelPhase::Opening;
        self.transition += 1;
        self.apply(measure);
        true
    }

    /// Start closing from the full measured extent. Returns `false` when
    /// already closed or closing.
    ///
    /// The caller collapses `max_height` to zero on the next frame via
    /// [`Panel::collapse`] so the transition animates from the full extent.
    pub fn close(&mut self, measure: Measure) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = PanelPhase::Closing;
        self.transition += 1;
        self.measured_height = measure.content;
        self.max_height = measure.content;
        true
    }

    /// Second half of [`Panel::close`]: drop the extent to zero.
    pub fn collapse(&mut self) {
        if self.phase == PanelPhase::Closing {
            self.max_height = 0.0;
        }
    }

    /// Toggle based on current phase. Returns the phase entered, if any.
    pub fn toggle(&mut self, measure: Measure) -> Option<PanelPhase> {
        if self.is_open() {
            self.close(measure).then_some(PanelPhase::Closing)
        } else {
            self.open(measure).then_some(PanelPhase::Opening)
        }
    }

    /// Recompute extent and overflow for an open panel. No-op otherwise.
    pub fn remeasure(&mut self, measure: Measure) -> bool {
        if !self.is_open() {
            return false;
        }
        self.apply(measure);
        true
    }

    /// Transition finished (or its fallback fired). Returns the settled
    /// phase when this call completed a transition.
    pub fn settle(&mut self) -> Option<PanelPhase> {
        match self.phase {
            PanelPhase::Opening => {
                self.phase = PanelPhase::Open;
                Some(PanelPhase::Open)
            }
            PanelPhase::Closing => {
                self.phase = PanelPhase::Closed;
                self.max_height = 0.0;
                self.overflow = Overflow::Clip;
                Some(PanelPhase::Closed)
            }
            PanelPhase::Open | PanelPhase::Closed => None,
        }
    }

    fn apply(&mut self, measure: Measure) {
        let cap = (measure.viewport * self.cap_fraction).floor();
        self.measured_height = measure.content;
        self.max_height = measure.content.min(cap);
        self.overflow = if measure.content > cap { Overflow::Scroll } else { Overflow::Clip };
    }
}
