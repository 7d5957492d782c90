//! Request gateway: uniform JSON POST to an action endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout. Server-side (SSR): `post_json` reports a transport
//! error since action endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The gateway never panics and never surfaces a parse error. Any HTTP reply
//! becomes an [`ActionResult`]; only failures to complete the request at all
//! come back as [`GatewayError`], which callers fold into a transport outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use super::types::ActionResult;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0}ms")]
    Timeout(u32),

    #[error("payload encode failed: {0}")]
    Encode(String),
}

/// Credentials and limits attached to every gateway request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub csrf_header: String,
    pub csrf_token: Option<String>,
    pub timeout_ms: u32,
}

/// Header list sent with each action request, in send order.
///
/// The CSRF header is sent empty when no token is available so the backend
/// rejects the call with its own message instead of the client guessing.
#[must_use]
pub fn request_headers(options: &RequestOptions) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_owned(), "application/json".to_owned()),
        ("Accept".to_owned(), "application/json".to_owned()),
        (options.csrf_header.clone(), options.csrf_token.clone().unwrap_or_default()),
    ]
}

/// Find a cookie's raw (still percent-encoded) value in a `document.cookie` string.
#[must_use]
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then_some(value)
        })
        .filter(|value| !value.is_empty())
}

/// POST `payload` as JSON to `endpoint` and normalize the reply.
///
/// # Errors
///
/// Returns [`GatewayError`] when the request cannot be built, sent, or does
/// not complete within `options.timeout_ms`. HTTP error statuses are not
/// errors; they come back inside the [`ActionResult`].
pub async fn post_json(
    endpoint: &str,
    payload: &serde_json::Value,
    options: &RequestOptions,
) -> Result<ActionResult, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let body = serde_json::to_string(payload).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let mut builder = gloo_net::http::Request::post(endpoint);
        for (name, value) in request_headers(options) {
            builder = builder.header(&name, &value);
        }
        let request = builder.body(body).map_err(|e| GatewayError::Transport(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(options.timeout_ms));
        let resp = match select(send, timeout).await {
            Either::Left((sent, _)) => sent.map_err(|e| GatewayError::Transport(e.to_string()))?,
            Either::Right(((), _)) => return Err(GatewayError::Timeout(options.timeout_ms)),
        };

        let status = resp.status();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("action response body unreadable from {endpoint}: {e}");
                String::new()
            }
        };
        Ok(ActionResult::from_response(status, &text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload, options);
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}
