//! Live-document access for the admin controller.
//!
//! Client-side (hydrate): geometry, field values, cookies, scrolling and the
//! clipboard come from `web-sys`. Server-side (SSR): every reader returns an
//! empty answer and every writer is a no-op, so the controller sees a page
//! with no measurable elements and issues no effects that matter.
//!
//! ERROR HANDLING
//! ==============
//! Missing elements are expected (forms and panels may be removed at any
//! time) and surface as `None`. Browser API failures are logged at `warn`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::net::types::Field;
use crate::state::admin::Host;

/// Attribute on `<html>` holding an optional JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-admin-config";

#[cfg(feature = "hydrate")]
const FIELD_SELECTOR: &str = "input[name], select[name], textarea[name]";

/// `scrollTop` that puts an element `offset` px below its scroll
/// container's top edge. Rects are viewport-relative.
#[must_use]
pub fn scroll_target(container_top: f64, element_top: f64, container_scroll_top: f64, offset: f64) -> f64 {
    (element_top - container_top + container_scroll_top - offset).max(0.0)
}

/// Map one named control to a payload field. Checkboxes carry their checked
/// state; every other control carries its string value.
#[must_use]
pub fn control_field(name: &str, input_type: &str, value: String, checked: bool) -> Field {
    if input_type.eq_ignore_ascii_case("checkbox") {
        Field::checkbox(name, checked)
    } else {
        Field::text(name, value)
    }
}

/// [`Host`] backed by the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomHost;

impl Host for DomHost {
    fn content_extent(&self, element_id: &str) -> Option<f64> {
        #[cfg(feature = "hydrate")]
        {
            let el = document()?.get_element_by_id(element_id)?;
            Some(f64::from(el.scroll_height()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = element_id;
            None
        }
    }

    fn viewport_extent(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn now_ms(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }
}

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read every named control inside the element with DOM id `container_id`.
pub fn collect_fields(container_id: &str) -> Vec<Field> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(container) = document().and_then(|d| d.get_element_by_id(container_id)) else {
            return Vec::new();
        };
        let nodes = match container.query_selector_all(FIELD_SELECTOR) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("field query failed in {container_id}: {e:?}");
                return Vec::new();
            }
        };
        let mut fields = Vec::new();
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
                fields.push(control_field(&input.name(), &input.type_(), input.value(), input.checked()));
            } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
                fields.push(Field::text(select.name(), select.value()));
            } else if let Some(area) = node.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                fields.push(Field::text(area.name(), area.value()));
            }
        }
        fields
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = container_id;
        Vec::new()
    }
}

/// Decoded value of the named cookie, if present and non-empty.
pub fn cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let html = document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        let raw = crate::net::gateway::find_cookie(&cookies, name)?;
        match js_sys::decode_uri_component(raw) {
            Ok(decoded) => decoded.as_string(),
            Err(_) => Some(raw.to_owned()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// JSON config override from [`CONFIG_ATTRIBUTE`] on the document root.
pub fn config_override() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        document()?.document_element()?.get_attribute(CONFIG_ATTRIBUTE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Smooth-scroll `container_id` so `target_id` sits `offset` px below its top.
pub fn scroll_into_container(container_id: &str, target_id: &str, offset: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let (Some(container), Some(target)) = (doc.get_element_by_id(container_id), doc.get_element_by_id(target_id))
        else {
            return;
        };
        let top = scroll_target(
            container.get_bounding_client_rect().top(),
            target.get_bounding_client_rect().top(),
            f64::from(container.scroll_top()),
            offset,
        );
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (container_id, target_id, offset);
    }
}

/// Write `text` to the system clipboard in the background.
pub fn copy_to_clipboard(text: String) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {e:?}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
