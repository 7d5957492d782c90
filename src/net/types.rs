//! Wire types exchanged with the contract action endpoints.
//!
//! DESIGN
//! ======
//! Success is carried by the HTTP status; the JSON body only adds text and an
//! optional transaction reference. Bodies that fail to parse are replaced by
//! a synthetic failure body so callers never see a parse error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid server response";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// JSON body returned by an action endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl ResponseBody {
    /// Body substituted when the server reply is not a JSON object of the expected shape.
    #[must_use]
    pub fn invalid() -> Self {
        Self { ok: Some(false), error: Some(INVALID_RESPONSE_MESSAGE.to_owned()), ..Self::default() }
    }

    /// Failure text: `error` wins over `message`; blank strings count as absent.
    #[must_use]
    pub fn failure_text(&self) -> Option<&str> {
        non_blank(self.error.as_deref()).or_else(|| non_blank(self.message.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalized result of one gateway round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    pub status: u16,
    pub ok: bool,
    pub body: ResponseBody,
    /// True when `body` was synthesized because the reply did not parse.
    pub malformed: bool,
}

impl ActionResult {
    /// Build a result from a raw status and response text.
    #[must_use]
    pub fn from_response(status: u16, text: &str) -> Self {
        let ok = (200..300).contains(&status);
        match serde_json::from_str::<ResponseBody>(text) {
            Ok(body) => Self { status, ok, body, malformed: false },
            Err(e) => {
                log::warn!("action response did not parse (status {status}): {e}");
                Self { status, ok, body: ResponseBody::invalid(), malformed: true }
            }
        }
    }

    /// Classify into success or one of the failure kinds.
    ///
    /// # Errors
    ///
    /// A non-2xx status is an [`ActionFailure::Application`] carrying the
    /// server's text; a reply whose body did not parse is an
    /// [`ActionFailure::Protocol`], whatever its status.
    pub fn outcome(&self) -> Result<ActionSuccess, ActionFailure> {
        if self.malformed {
            return Err(ActionFailure::Protocol);
        }
        if !self.ok {
            let text = self.body.failure_text().unwrap_or(SERVER_ERROR_MESSAGE);
            return Err(ActionFailure::Application(text.to_owned()));
        }
        Ok(ActionSuccess {
            message: non_blank(self.body.message.as_deref()).map(str::to_owned),
            tx_hash: non_blank(self.body.tx_hash.as_deref()).map(str::to_owned),
        })
    }
}

/// Success payload extracted from an [`ActionResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSuccess {
    pub message: Option<String>,
    pub tx_hash: Option<String>,
}

/// Operator-facing failure taxonomy. `Display` is the text shown to the operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionFailure {
    /// No endpoint declared on the form or button; never reaches the network.
    #[error("No endpoint configured")]
    MissingEndpoint,

    /// The request could not be completed. The cause is logged, not shown.
    #[error("Network error")]
    Transport,

    #[error("Invalid server response")]
    Protocol,

    /// Server-reported failure, text taken verbatim from the body.
    #[error("{0}")]
    Application(String),
}

impl ActionFailure {
    /// Longer text used in notifications where the inline text is terse.
    #[must_use]
    pub fn notification_text(&self) -> String {
        match self {
            Self::Transport => "Network error - check your connection".to_owned(),
            other => other.to_string(),
        }
    }
}

/// Value of one named form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Checkbox(bool),
    Text(String),
}

/// A named control read out of an inline form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub input: FieldInput,
}

impl Field {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), input: FieldInput::Text(value.into()) }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), input: FieldInput::Checkbox(checked) }
    }
}

/// Build the JSON request body from form controls.
///
/// Unnamed controls are skipped; a later control overwrites an earlier one
/// with the same name.
#[must_use]
pub fn collect_payload(fields: &[Field]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for field in fields {
        if field.name.is_empty() {
            continue;
        }
        let value = match &field.input {
            FieldInput::Checkbox(checked) => serde_json::Value::Bool(*checked),
            FieldInput::Text(text) => serde_json::Value::String(text.clone()),
        };
        map.insert(field.name.clone(), value);
    }
    serde_json::Value::Object(map)
}
