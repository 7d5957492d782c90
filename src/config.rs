//! Timing and layout configuration for the admin interaction layer.
//!
//! Every value has a default so a page can ship without any override. The
//! page may embed a JSON object in a `data-admin-config` attribute on the
//! document root; fields it names replace the defaults, the rest stay.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_VIEWPORT_CAP_FRACTION: f64 = 0.60;
pub const DEFAULT_NOTIFY_LIFETIME_MS: u32 = 5400;
pub const DEFAULT_NOTIFY_EXIT_MS: u32 = 240;
pub const DEFAULT_COPY_RESET_MS: u32 = 1200;
pub const DEFAULT_TX_DISPLAY_WIDTH: usize = 40;
pub const DEFAULT_INLINE_MESSAGE_MS: u32 = 4000;
pub const DEFAULT_SUCCESS_CLOSE_DELAY_MS: u32 = 700;
pub const DEFAULT_TRANSITION_FALLBACK_MS: u32 = 500;
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 30;
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 12.0;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_RECORD_NOUN: &str = "contract";
pub const DEFAULT_ENDPOINT_BASE: &str = "/contract/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("admin config parse failed: {0}")]
    Parse(String),

    #[error("viewport cap fraction must be in (0, 1], got {0}")]
    ViewportCap(f64),
}

/// Constants consumed by the panel, form, action and notification machines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Fraction of the viewport height an open panel may occupy before it scrolls.
    pub viewport_cap_fraction: f64,
    pub notify_lifetime_ms: u32,
    pub notify_exit_ms: u32,
    pub copy_reset_ms: u32,
    pub tx_display_width: usize,
    pub inline_message_ms: u32,
    /// Delay between a successful form submit and the form collapsing.
    pub success_close_delay_ms: u32,
    /// Upper bound on waiting for a `transitionend` that may never arrive.
    pub transition_fallback_ms: u32,
    pub settle_delay_ms: u32,
    pub scroll_offset_px: f64,
    pub request_timeout_ms: u32,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub record_noun: String,
    pub endpoint_base: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            viewport_cap_fraction: DEFAULT_VIEWPORT_CAP_FRACTION,
            notify_lifetime_ms: DEFAULT_NOTIFY_LIFETIME_MS,
            notify_exit_ms: DEFAULT_NOTIFY_EXIT_MS,
            copy_reset_ms: DEFAULT_COPY_RESET_MS,
            tx_display_width: DEFAULT_TX_DISPLAY_WIDTH,
            inline_message_ms: DEFAULT_INLINE_MESSAGE_MS,
            success_close_delay_ms: DEFAULT_SUCCESS_CLOSE_DELAY_MS,
            transition_fallback_ms: DEFAULT_TRANSITION_FALLBACK_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scroll_offset_px: DEFAULT_SCROLL_OFFSET_PX,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            record_noun: DEFAULT_RECORD_NOUN.to_owned(),
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_owned(),
        }
    }
}

impl AdminConfig {
    /// Parse a JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::ViewportCap`] when the cap fraction is outside `(0, 1]`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        // serde also fills structs from sequences in field order; only objects are overrides
        if !value.is_object() {
            return Err(ConfigError::Parse("admin config must be a JSON object".to_owned()));
        }
        let config: Self = serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if !(config.viewport_cap_fraction > 0.0 && config.viewport_cap_fraction <= 1.0) {
            return Err(ConfigError::ViewportCap(config.viewport_cap_fraction));
        }
        Ok(config)
    }

    /// Like [`AdminConfig::from_json`], but falls back to defaults on any error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default admin config");
                Self::default()
            }
        }
    }

    /// Join an action slug onto the endpoint base, e.g. `pause` -> `/contract/pause/`.
    #[must_use]
    pub fn endpoint_for(&self, slug: &str) -> String {
        let base = self.endpoint_base.trim_end_matches('/');
        format!("{base}/{slug}/")
    }
}
